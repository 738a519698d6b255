//! Book aging classification for shelf rendering
//!
//! Presentation-only: recomputed from status and time on the shelf, never
//! persisted.

use crate::domain::{Book, ReadingStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AgingLevel {
    Pristine,
    LightlyWorn,
    WellRead,
    Beloved,
}

/// Rendering parameters for an aging level
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AgingEffects {
    pub level: AgingLevel,
    pub opacity: f64,
    /// Corner rounding in pixels
    pub corner_radius: u32,
    /// CSS filter descriptor
    pub filter: &'static str,
    pub description: &'static str,
}

/// Classify a book's wear from its status and days on the shelf.
pub fn aging_level(status: ReadingStatus, date_added: DateTime<Utc>, now: DateTime<Utc>) -> AgingLevel {
    let days = (now - date_added).num_days();

    if status == ReadingStatus::Finished && days > 180 {
        AgingLevel::Beloved
    } else if status == ReadingStatus::Finished && days > 90 {
        AgingLevel::WellRead
    } else if status == ReadingStatus::Reading || days > 30 {
        AgingLevel::LightlyWorn
    } else {
        AgingLevel::Pristine
    }
}

/// Classify a book's wear as of the current time
pub fn aging_level_now(book: &Book) -> AgingLevel {
    aging_level(book.status, book.date_added, Utc::now())
}

/// Fixed rendering effects for an aging level
pub fn aging_effects(level: AgingLevel) -> AgingEffects {
    match level {
        AgingLevel::Pristine => AgingEffects {
            level,
            opacity: 1.0,
            corner_radius: 0,
            filter: "none",
            description: "Newly added, pristine condition",
        },
        AgingLevel::LightlyWorn => AgingEffects {
            level,
            opacity: 0.95,
            corner_radius: 2,
            filter: "brightness(0.98)",
            description: "Lightly handled",
        },
        AgingLevel::WellRead => AgingEffects {
            level,
            opacity: 0.9,
            corner_radius: 4,
            filter: "brightness(0.95) saturate(0.9)",
            description: "Well-loved and read",
        },
        AgingLevel::Beloved => AgingEffects {
            level,
            opacity: 0.85,
            corner_radius: 6,
            filter: "brightness(0.9) saturate(0.8) sepia(0.1)",
            description: "Treasured classic",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn added_days_ago(days: i64) -> (DateTime<Utc>, DateTime<Utc>) {
        let now = Utc::now();
        (now - Duration::days(days), now)
    }

    #[test]
    fn test_finished_long_ago_is_beloved() {
        let (added, now) = added_days_ago(200);
        assert_eq!(
            aging_level(ReadingStatus::Finished, added, now),
            AgingLevel::Beloved
        );
    }

    #[test]
    fn test_finished_recently_is_well_read() {
        let (added, now) = added_days_ago(120);
        assert_eq!(
            aging_level(ReadingStatus::Finished, added, now),
            AgingLevel::WellRead
        );
    }

    #[test]
    fn test_old_wanted_book_is_lightly_worn() {
        // Same 200-day shelf time as the beloved case, different status
        let (added, now) = added_days_ago(200);
        assert_eq!(
            aging_level(ReadingStatus::Wanted, added, now),
            AgingLevel::LightlyWorn
        );
    }

    #[test]
    fn test_reading_is_always_lightly_worn() {
        let (added, now) = added_days_ago(1);
        assert_eq!(
            aging_level(ReadingStatus::Reading, added, now),
            AgingLevel::LightlyWorn
        );
    }

    #[test]
    fn test_fresh_book_is_pristine() {
        let (added, now) = added_days_ago(5);
        assert_eq!(
            aging_level(ReadingStatus::Wanted, added, now),
            AgingLevel::Pristine
        );
    }

    #[test]
    fn test_effects_are_fixed_per_level() {
        let effects = aging_effects(AgingLevel::Beloved);
        assert_eq!(effects.opacity, 0.85);
        assert_eq!(effects.corner_radius, 6);
        assert_eq!(effects.filter, "brightness(0.9) saturate(0.8) sepia(0.1)");
    }
}
