//! Error types for shelfmark-core

use thiserror::Error;

/// Result type alias for shelfmark operations
pub type Result<T> = std::result::Result<T, ShelfmarkError>;

/// Umbrella error for operations outside the total core surfaces.
///
/// The search, extraction, and derivation pipelines never surface these;
/// they absorb failures at their boundaries. Store and export callers see
/// them.
#[derive(Error, Debug)]
pub enum ShelfmarkError {
    #[error("HTTP error: {0}")]
    Http(#[from] crate::http::HttpError),

    #[error("Source error: {0}")]
    Source(#[from] crate::sources::SourceError),

    #[error("Extraction error: {0}")]
    Extract(#[from] crate::color::ExtractError),

    #[error("Store error: {0}")]
    Store(#[from] crate::store::StoreError),

    #[error("Export error: {0}")]
    Export(#[from] crate::export::ExportError),
}
