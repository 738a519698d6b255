//! Catalog store: the repository boundary for books and shelves
//!
//! The core computes over read-only snapshots; all mutation goes through
//! this interface, which owns the concurrency discipline.

use crate::domain::{default_shelves, Book, ReadingStatus, Shelf, UnifiedBookRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Book not found: {0}")]
    BookNotFound(String),
    #[error("Shelf not found: {0}")]
    ShelfNotFound(String),
    #[error("Cannot delete default shelf: {0}")]
    DefaultShelfProtected(String),
}

/// Fields a caller may change on an existing book. `None` leaves the field
/// untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BookPatch {
    pub status: Option<ReadingStatus>,
    pub shelf_id: Option<String>,
    pub spine_color: Option<String>,
    pub date_completed: Option<DateTime<Utc>>,
}

/// Fields a caller may change on an existing shelf
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ShelfPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

/// A new shelf as submitted by the caller
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewShelf {
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
}

/// The trait catalog storage backends implement.
pub trait CatalogStore: Send + Sync {
    /// All books in insertion order.
    fn books(&self) -> Vec<Book>;

    /// Get a book by id.
    fn book(&self, id: &str) -> Option<Book>;

    /// Add a search result to the catalog. Returns the created book.
    fn insert_book(&self, record: &UnifiedBookRecord, shelf_id: &str) -> Book;

    /// Apply a patch to an existing book.
    fn patch_book(&self, id: &str, patch: BookPatch) -> Result<Book, StoreError>;

    /// Delete a book by id.
    fn delete_book(&self, id: &str) -> Result<(), StoreError>;

    /// All shelves in insertion order.
    fn shelves(&self) -> Vec<Shelf>;

    /// Create a user shelf.
    fn insert_shelf(&self, shelf: NewShelf) -> Shelf;

    /// Apply a patch to an existing shelf.
    fn patch_shelf(&self, id: &str, patch: ShelfPatch) -> Result<Shelf, StoreError>;

    /// Delete a user shelf. Default shelves are protected.
    fn delete_shelf(&self, id: &str) -> Result<(), StoreError>;
}

/// In-memory catalog store guarded by RwLocks, seeded with the default
/// shelves.
pub struct MemoryCatalogStore {
    books: RwLock<Vec<Book>>,
    shelves: RwLock<Vec<Shelf>>,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self {
            books: RwLock::new(Vec::new()),
            shelves: RwLock::new(default_shelves(Utc::now())),
        }
    }
}

impl Default for MemoryCatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore for MemoryCatalogStore {
    fn books(&self) -> Vec<Book> {
        self.books.read().expect("books lock poisoned").clone()
    }

    fn book(&self, id: &str) -> Option<Book> {
        self.books
            .read()
            .expect("books lock poisoned")
            .iter()
            .find(|b| b.id == id)
            .cloned()
    }

    fn insert_book(&self, record: &UnifiedBookRecord, shelf_id: &str) -> Book {
        let book = Book {
            id: Uuid::new_v4().to_string(),
            title: record.title.clone(),
            author: record.primary_author().to_string(),
            cover: record
                .cover_url
                .clone()
                .unwrap_or_else(|| "/placeholder.svg".to_string()),
            isbn: record.isbn.clone(),
            publish_year: record.publish_year.clone(),
            publisher: record.publisher.clone(),
            status: ReadingStatus::Wanted,
            date_added: Utc::now(),
            date_completed: None,
            page_count: record.page_count,
            shelf_id: shelf_id.to_string(),
            spine_color: None,
        };

        self.books
            .write()
            .expect("books lock poisoned")
            .push(book.clone());
        book
    }

    fn patch_book(&self, id: &str, patch: BookPatch) -> Result<Book, StoreError> {
        let mut books = self.books.write().expect("books lock poisoned");
        let book = books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| StoreError::BookNotFound(id.to_string()))?;

        if let Some(status) = patch.status {
            if status != book.status {
                // date_completed tracks the Finished transition only
                book.date_completed = if status == ReadingStatus::Finished {
                    Some(patch.date_completed.unwrap_or_else(Utc::now))
                } else {
                    None
                };
            }
            book.status = status;
        }

        if let Some(shelf_id) = patch.shelf_id {
            book.shelf_id = shelf_id;
        }

        // Cached at most once; a present value is never overwritten
        if book.spine_color.is_none() {
            book.spine_color = patch.spine_color;
        }

        Ok(book.clone())
    }

    fn delete_book(&self, id: &str) -> Result<(), StoreError> {
        let mut books = self.books.write().expect("books lock poisoned");
        let before = books.len();
        books.retain(|b| b.id != id);

        if books.len() == before {
            return Err(StoreError::BookNotFound(id.to_string()));
        }
        Ok(())
    }

    fn shelves(&self) -> Vec<Shelf> {
        self.shelves.read().expect("shelves lock poisoned").clone()
    }

    fn insert_shelf(&self, shelf: NewShelf) -> Shelf {
        let shelf = Shelf {
            id: format!("custom-{}", Uuid::new_v4()),
            name: shelf.name,
            description: shelf.description.unwrap_or_default(),
            icon: shelf.icon.unwrap_or_else(|| "📚".to_string()),
            is_default: false,
            created_at: Utc::now(),
        };

        self.shelves
            .write()
            .expect("shelves lock poisoned")
            .push(shelf.clone());
        shelf
    }

    fn patch_shelf(&self, id: &str, patch: ShelfPatch) -> Result<Shelf, StoreError> {
        let mut shelves = self.shelves.write().expect("shelves lock poisoned");
        let shelf = shelves
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| StoreError::ShelfNotFound(id.to_string()))?;

        if let Some(name) = patch.name {
            shelf.name = name;
        }
        if let Some(description) = patch.description {
            shelf.description = description;
        }
        if let Some(icon) = patch.icon {
            shelf.icon = icon;
        }

        Ok(shelf.clone())
    }

    fn delete_shelf(&self, id: &str) -> Result<(), StoreError> {
        let mut shelves = self.shelves.write().expect("shelves lock poisoned");

        if let Some(shelf) = shelves.iter().find(|s| s.id == id) {
            if shelf.is_default {
                return Err(StoreError::DefaultShelfProtected(id.to_string()));
            }
        } else {
            return Err(StoreError::ShelfNotFound(id.to_string()));
        }

        shelves.retain(|s| s.id != id);
        Ok(())
    }
}
