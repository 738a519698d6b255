//! Common traits for catalog source adapters

use crate::domain::UnifiedBookRecord;
use crate::http::HttpError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

/// Metadata about a catalog source
pub struct SourceMetadata {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub base_url: &'static str,
    pub requires_api_key: bool,
}

/// A searchable catalog provider.
///
/// `search` is total: transport and parse failures are absorbed here,
/// logged, and surfaced as an empty result. Callers never see an error.
pub trait BookSource {
    fn metadata() -> SourceMetadata
    where
        Self: Sized;

    fn search(
        &self,
        query: &str,
        limit: usize,
    ) -> impl std::future::Future<Output = Vec<UnifiedBookRecord>> + Send;
}
