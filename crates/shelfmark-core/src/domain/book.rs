//! Persisted catalog entry and reading status

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::PublishYear;

/// Reading status of a catalogued book
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ReadingStatus {
    Wanted,
    Reading,
    Finished,
    Abandoned,
}

impl ReadingStatus {
    /// Display label for the status badge
    pub fn label(&self) -> &'static str {
        match self {
            ReadingStatus::Wanted => "Want to Read",
            ReadingStatus::Reading => "Currently Reading",
            ReadingStatus::Finished => "Read",
            ReadingStatus::Abandoned => "Did Not Finish",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ReadingStatus::Wanted => "Awaiting exploration in your collection",
            ReadingStatus::Reading => "Actively navigating through pages",
            ReadingStatus::Finished => "Successfully completed",
            ReadingStatus::Abandoned => "Left unexplored",
        }
    }
}

/// A book in the catalog.
///
/// `date_added` is immutable after insert; `date_completed` is set only when
/// the status transitions to Finished; `spine_color` is a lazily cached
/// extraction result, written at most once.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    /// Cover image URL, or a local placeholder path
    pub cover: String,
    pub isbn: String,
    pub publish_year: PublishYear,
    pub publisher: String,
    pub status: ReadingStatus,
    pub date_added: DateTime<Utc>,
    pub date_completed: Option<DateTime<Utc>>,
    pub page_count: Option<u32>,
    pub shelf_id: String,
    pub spine_color: Option<String>,
}
