//! OpenLibrary source adapter
//!
//! API docs: https://openlibrary.org/dev/docs/api/search

use super::traits::{BookSource, SourceError, SourceMetadata};
use crate::domain::{PublishYear, RecordSource, UnifiedBookRecord};
use crate::http::HttpClient;
use serde::Deserialize;

/// OpenLibrary search.json response wrapper
#[derive(Debug, Deserialize)]
struct SearchResponse {
    docs: Vec<SearchDoc>,
    #[serde(rename = "numFound")]
    #[allow(dead_code)]
    num_found: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct SearchDoc {
    key: String,
    title: Option<String>,
    author_name: Option<Vec<String>>,
    cover_i: Option<u64>,
    isbn: Option<Vec<String>>,
    first_publish_year: Option<i32>,
    publisher: Option<Vec<String>>,
    number_of_pages_median: Option<u32>,
}

/// Build a medium-size cover URL from an OpenLibrary cover id
fn cover_url(cover_id: u64) -> String {
    format!("https://covers.openlibrary.org/b/id/{}-M.jpg", cover_id)
}

pub struct OpenLibrarySource {
    client: HttpClient,
    base_url: String,
}

impl OpenLibrarySource {
    pub fn new() -> Self {
        Self {
            client: HttpClient::default(),
            base_url: "https://openlibrary.org".to_string(),
        }
    }

    /// Parse an OpenLibrary search response to unified records, keeping the
    /// first `limit` documents in the provider's own ranking.
    pub fn parse_search_response(
        json: &str,
        limit: usize,
    ) -> Result<Vec<UnifiedBookRecord>, SourceError> {
        let response: SearchResponse = serde_json::from_str(json)
            .map_err(|e| SourceError::Parse(format!("Invalid OpenLibrary JSON: {}", e)))?;

        Ok(response
            .docs
            .into_iter()
            .filter_map(Self::parse_doc)
            .take(limit)
            .collect())
    }

    fn parse_doc(doc: SearchDoc) -> Option<UnifiedBookRecord> {
        let title = doc.title.unwrap_or_default();
        if title.is_empty() {
            return None;
        }

        let isbn = doc
            .isbn
            .and_then(|list| list.into_iter().next())
            .unwrap_or_else(|| "N/A".to_string());

        let publisher = doc
            .publisher
            .and_then(|list| list.into_iter().next())
            .unwrap_or_else(|| "N/A".to_string());

        let publish_year = doc
            .first_publish_year
            .map(PublishYear::Year)
            .unwrap_or(PublishYear::NotAvailable);

        Some(UnifiedBookRecord {
            id: doc.key,
            title,
            authors: doc
                .author_name
                .filter(|a| !a.is_empty())
                .unwrap_or_else(|| vec!["Unknown".to_string()]),
            isbn,
            publish_year,
            publisher,
            page_count: doc.number_of_pages_median,
            cover_url: doc.cover_i.map(cover_url),
            description: None,
            categories: None,
            source: RecordSource::OpenLibrary,
        })
    }
}

impl Default for OpenLibrarySource {
    fn default() -> Self {
        Self::new()
    }
}

impl BookSource for OpenLibrarySource {
    fn metadata() -> SourceMetadata {
        SourceMetadata {
            id: "openlibrary",
            name: "OpenLibrary",
            description: "Internet Archive's open book catalog",
            base_url: "https://openlibrary.org",
            requires_api_key: false,
        }
    }

    async fn search(&self, query: &str, limit: usize) -> Vec<UnifiedBookRecord> {
        let url = format!("{}/search.json", self.base_url);
        let params = [("q", query)];

        let body = match self.client.get_text_with_params(&url, &params).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(source = "openlibrary", error = %e, "search request failed");
                return Vec::new();
            }
        };

        match Self::parse_search_response(&body, limit) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(source = "openlibrary", error = %e, "search response rejected");
                Vec::new()
            }
        }
    }
}
