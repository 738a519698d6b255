//! Spine width calculation from page count
//!
//! Approximates real paperback spines: width ≈ pages / 30, clamped.

use serde::{Deserialize, Serialize};

const MIN_SPINE_WIDTH: u32 = 8;
const MAX_SPINE_WIDTH: u32 = 48;
const PAGES_PER_PIXEL: u32 = 30;

/// Spine thickness band by page count
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SpineCategory {
    Thin,
    Normal,
    Thick,
    VeryThick,
}

impl SpineCategory {
    pub fn description(&self) -> &'static str {
        match self {
            SpineCategory::Thin => "Short read",
            SpineCategory::Normal => "Standard book",
            SpineCategory::Thick => "Substantial tome",
            SpineCategory::VeryThick => "Epic volume",
        }
    }
}

/// Font size band for spine text, by computed width
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SpineFontSize {
    Xs,
    Sm,
    Base,
    Lg,
    Xl,
}

impl SpineFontSize {
    /// CSS utility class name for the band
    pub fn class(&self) -> &'static str {
        match self {
            SpineFontSize::Xs => "text-xs",
            SpineFontSize::Sm => "text-sm",
            SpineFontSize::Base => "text-base",
            SpineFontSize::Lg => "text-lg",
            SpineFontSize::Xl => "text-xl",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpineWidth {
    /// Width in pixels
    pub width: u32,
    pub category: SpineCategory,
}

impl SpineWidth {
    /// Font size band for this spine's width
    pub fn font_size(&self) -> SpineFontSize {
        match self.width {
            0..=10 => SpineFontSize::Xs,
            11..=16 => SpineFontSize::Sm,
            17..=24 => SpineFontSize::Base,
            25..=32 => SpineFontSize::Lg,
            _ => SpineFontSize::Xl,
        }
    }

    /// Wide spines can carry horizontal text
    pub fn is_wide(&self) -> bool {
        self.width >= 32
    }
}

/// Calculate spine width and category from a page count.
/// Missing or zero page counts get the minimum width.
pub fn calculate_spine_width(page_count: Option<u32>) -> SpineWidth {
    let Some(pages) = page_count.filter(|p| *p > 0) else {
        return SpineWidth {
            width: MIN_SPINE_WIDTH,
            category: SpineCategory::Thin,
        };
    };

    let raw = (pages as f64 / PAGES_PER_PIXEL as f64).round() as u32;
    let width = raw.clamp(MIN_SPINE_WIDTH, MAX_SPINE_WIDTH);

    let category = match pages {
        0..=99 => SpineCategory::Thin,
        100..=299 => SpineCategory::Normal,
        300..=599 => SpineCategory::Thick,
        _ => SpineCategory::VeryThick,
    };

    SpineWidth { width, category }
}
