//! Shelf definitions and the default shelf set

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named shelf books are assigned to
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Shelf {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    /// System shelves cannot be deleted
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
}

impl Shelf {
    fn system(id: &str, name: &str, description: &str, icon: &str, now: DateTime<Utc>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            is_default: true,
            created_at: now,
        }
    }
}

/// The system shelves every catalog starts with
pub fn default_shelves(now: DateTime<Utc>) -> Vec<Shelf> {
    vec![
        Shelf::system(
            "main-stacks",
            "Main Stacks",
            "The primary home for your collection",
            "📚",
            now,
        ),
        Shelf::system(
            "reading-desk",
            "Reading Desk",
            "Books currently in rotation",
            "📖",
            now,
        ),
        Shelf::system(
            "archive",
            "Archive",
            "Finished and shelved away",
            "🗄️",
            now,
        ),
        Shelf::system(
            "wishlist",
            "Wishlist",
            "Books you are hunting for",
            "⭐",
            now,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shelves_are_protected() {
        let shelves = default_shelves(Utc::now());
        assert_eq!(shelves.len(), 4);
        assert!(shelves.iter().all(|s| s.is_default));
    }
}
