//! Shelf ordering by a selected sort mode

use crate::color::hue;
use crate::domain::{Book, ReadingStatus};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;

/// Neutral color for books with no cached spine color; hue 0
const NEUTRAL_SPINE_COLOR: &str = "#808080";

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    Recency,
    Title,
    Author,
    Status,
    PageCount,
    Hue,
}

/// Sort mode menu entries for the UI layer
pub const SORT_OPTIONS: &[(SortMode, &str, &str)] = &[
    (SortMode::Recency, "Date Added", "Recently added first"),
    (SortMode::Title, "Title (A-Z)", "Alphabetical by title"),
    (SortMode::Author, "Author (A-Z)", "Alphabetical by author"),
    (SortMode::Status, "Reading Status", "Group by reading status"),
    (SortMode::PageCount, "Page Count", "Longest books first"),
    (SortMode::Hue, "Rainbow", "Sort by spine color hue"),
];

/// Collation key: NFKD-normalized, diacritics stripped, lowercased.
/// Deterministic across environments, unlike locale collation.
fn collation_key(text: &str) -> String {
    text.nfkd()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_ascii_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// Fixed grouping priority: reading < wanted < finished < abandoned
fn status_priority(status: ReadingStatus) -> u8 {
    match status {
        ReadingStatus::Reading => 0,
        ReadingStatus::Wanted => 1,
        ReadingStatus::Finished => 2,
        ReadingStatus::Abandoned => 3,
    }
}

/// Hue sort key: cached spine color, else the neutral gray
fn hue_key(book: &Book) -> f64 {
    let color = book.spine_color.as_deref().unwrap_or(NEUTRAL_SPINE_COLOR);
    hue(color)
}

/// Return a sorted copy of the books. Non-mutating and stable: books with
/// equal keys keep their relative input order.
pub fn sort_books(books: &[Book], mode: SortMode) -> Vec<Book> {
    let mut sorted = books.to_vec();

    match mode {
        SortMode::Recency => {
            sorted.sort_by(|a, b| b.date_added.cmp(&a.date_added));
        }
        SortMode::Title => {
            sorted.sort_by(|a, b| collation_key(&a.title).cmp(&collation_key(&b.title)));
        }
        SortMode::Author => {
            sorted.sort_by(|a, b| collation_key(&a.author).cmp(&collation_key(&b.author)));
        }
        SortMode::Status => {
            sorted.sort_by_key(|book| status_priority(book.status));
        }
        SortMode::PageCount => {
            sorted.sort_by(|a, b| b.page_count.unwrap_or(0).cmp(&a.page_count.unwrap_or(0)));
        }
        SortMode::Hue => {
            sorted.sort_by(|a, b| {
                hue_key(a).partial_cmp(&hue_key(b)).unwrap_or(Ordering::Equal)
            });
        }
    }

    sorted
}
