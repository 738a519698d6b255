//! Domain models for the shelfmark catalog

pub mod book;
pub mod record;
pub mod shelf;

pub use book::{Book, ReadingStatus};
pub use record::{PublishYear, RecordSource, UnifiedBookRecord, NOT_AVAILABLE};
pub use shelf::{default_shelves, Shelf};
