//! Spine color extraction from cover images
//!
//! Samples a window centered on the cover, averages the channels, and darkens
//! the result so light spine text stays legible. Every failure mode (fetch,
//! decode, timeout) resolves to the fallback color.

use super::convert::{darken, rgb_to_hex};
use crate::http::{HttpClient, HttpError};
use image::RgbImage;
use std::time::Duration;
use thiserror::Error;

/// Color used whenever extraction cannot produce a real sample
pub const FALLBACK_COLOR: &str = "#6b7280";

/// Side length of the sampling window, in pixels
const SAMPLE_SIZE: u32 = 50;
/// Darkening applied to the averaged color
const DARKEN_AMOUNT: f64 = 0.2;
/// Time limit for one fetch-and-sample round trip
const EXTRACT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("Timed out")]
    Timeout,
}

pub struct ColorExtractor {
    client: HttpClient,
}

impl ColorExtractor {
    pub fn new() -> Self {
        Self {
            client: HttpClient::default(),
        }
    }

    /// Extract a spine color from a cover image URL.
    ///
    /// Total: always resolves with a hex color, falling back to
    /// [`FALLBACK_COLOR`] on fetch failure, decode failure, or timeout.
    pub async fn extract_color(&self, image_url: &str) -> String {
        match self.try_extract_color(image_url).await {
            Ok(color) => color,
            Err(e) => {
                tracing::warn!(url = image_url, error = %e, "color extraction failed");
                FALLBACK_COLOR.to_string()
            }
        }
    }

    /// Fallible variant used by the cache, which only stores real samples
    pub async fn try_extract_color(&self, image_url: &str) -> Result<String, ExtractError> {
        tokio::time::timeout(EXTRACT_TIMEOUT, self.try_extract(image_url))
            .await
            .map_err(|_| ExtractError::Timeout)?
    }

    async fn try_extract(&self, image_url: &str) -> Result<String, ExtractError> {
        let bytes = self.client.get_bytes(image_url).await?;
        sample_cover_color(&bytes)
    }
}

impl Default for ColorExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode image bytes and produce the darkened average of the center window
pub fn sample_cover_color(bytes: &[u8]) -> Result<String, ExtractError> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| ExtractError::Decode(e.to_string()))?
        .to_rgb8();

    let (r, g, b) = average_center_color(&img);
    Ok(darken(&rgb_to_hex(r, g, b), DARKEN_AMOUNT))
}

/// Arithmetic per-channel mean over a SAMPLE_SIZE square centered on the
/// image, clamped so the window never leaves the image bounds.
fn average_center_color(img: &RgbImage) -> (u8, u8, u8) {
    let (width, height) = img.dimensions();

    let window_w = SAMPLE_SIZE.min(width);
    let window_h = SAMPLE_SIZE.min(height);
    let x0 = (width / 2).saturating_sub(window_w / 2).min(width - window_w);
    let y0 = (height / 2)
        .saturating_sub(window_h / 2)
        .min(height - window_h);

    let mut r_sum: u64 = 0;
    let mut g_sum: u64 = 0;
    let mut b_sum: u64 = 0;

    for y in y0..y0 + window_h {
        for x in x0..x0 + window_w {
            let pixel = img.get_pixel(x, y);
            r_sum += pixel[0] as u64;
            g_sum += pixel[1] as u64;
            b_sum += pixel[2] as u64;
        }
    }

    let count = (window_w * window_h) as f64;
    let mean = |sum: u64| (sum as f64 / count).round() as u8;
    (mean(r_sum), mean(g_sum), mean(b_sum))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use std::io::Cursor;

    fn png_bytes(img: &RgbImage) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_uniform_image_averages_to_its_color() {
        let img = RgbImage::from_pixel(100, 100, Rgb([200, 100, 50]));
        let (r, g, b) = average_center_color(&img);
        assert_eq!((r, g, b), (200, 100, 50));
    }

    #[test]
    fn test_only_center_window_is_sampled() {
        // Blue border, red 50x50 center block
        let mut img = RgbImage::from_pixel(100, 100, Rgb([0, 0, 255]));
        for y in 25..75 {
            for x in 25..75 {
                img.put_pixel(x, y, Rgb([255, 0, 0]));
            }
        }

        let (r, g, b) = average_center_color(&img);
        assert_eq!((r, g, b), (255, 0, 0));
    }

    #[test]
    fn test_window_clamps_to_small_images() {
        let img = RgbImage::from_pixel(10, 6, Rgb([10, 20, 30]));
        let (r, g, b) = average_center_color(&img);
        assert_eq!((r, g, b), (10, 20, 30));
    }

    #[test]
    fn test_sampled_color_is_darkened() {
        let img = RgbImage::from_pixel(60, 60, Rgb([255, 255, 255]));
        let color = sample_cover_color(&png_bytes(&img)).unwrap();
        // 255 * 0.8 = 204 = 0xcc
        assert_eq!(color, "#cccccc");
    }

    #[test]
    fn test_undecodable_bytes_are_an_error() {
        assert!(sample_cover_color(b"definitely not an image").is_err());
    }
}
