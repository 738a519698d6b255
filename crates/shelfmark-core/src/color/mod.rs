//! Spine color extraction and color math

pub mod convert;
pub mod extract;
pub mod pool;

pub use convert::{contrast_color, darken, hex_to_rgb, hue, relative_luminance, rgb_to_hex};
pub use extract::{sample_cover_color, ColorExtractor, ExtractError, FALLBACK_COLOR};
pub use pool::SpineColorCache;
