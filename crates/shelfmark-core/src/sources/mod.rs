//! Source adapters for fetching books from online catalogs

pub mod google_books;
pub mod open_library;
pub mod traits;

pub use google_books::GoogleBooksSource;
pub use open_library::OpenLibrarySource;
pub use traits::{BookSource, SourceError, SourceMetadata};
