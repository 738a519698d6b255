//! shelfmark-core: Core library for the shelfmark book catalog
//!
//! This library provides:
//! - Hybrid search aggregation across Google Books and OpenLibrary, with
//!   title-keyed deduplication and field merging
//! - Spine color extraction from cover images, with a bounded-concurrency
//!   cache
//! - Pure presentation derivations: spine width, font bands, aging levels,
//!   and color hue
//! - Stable shelf ordering by a selected sort mode
//! - The catalog store boundary (books and shelves) and CSV export
//!
//! Search, extraction, and derivation are total: provider and image failures
//! are absorbed at their boundaries and surface only as empty results or
//! fallback values.

pub mod aging;
pub mod color;
pub mod dedup;
pub mod domain;
pub mod error;
pub mod export;
pub mod http;
pub mod hybrid;
pub mod sorting;
pub mod sources;
pub mod spine;
pub mod store;

// Re-export main types for convenience
pub use aging::{aging_effects, aging_level, aging_level_now, AgingEffects, AgingLevel};
pub use color::{
    contrast_color, darken, hex_to_rgb, hue, relative_luminance, rgb_to_hex, ColorExtractor,
    ExtractError, SpineColorCache, FALLBACK_COLOR,
};
pub use dedup::{dedup_key, deduplicate};
pub use domain::{
    default_shelves, Book, PublishYear, ReadingStatus, RecordSource, Shelf, UnifiedBookRecord,
};
pub use error::{Result, ShelfmarkError};
pub use export::{export_csv, ExportError, ExportOptions};
pub use http::{HttpClient, HttpError};
pub use hybrid::HybridSearcher;
pub use sorting::{sort_books, SortMode, SORT_OPTIONS};
pub use sources::{BookSource, GoogleBooksSource, OpenLibrarySource, SourceError, SourceMetadata};
pub use spine::{calculate_spine_width, SpineCategory, SpineFontSize, SpineWidth};
pub use store::{
    BookPatch, CatalogStore, MemoryCatalogStore, NewShelf, ShelfPatch, StoreError,
};
