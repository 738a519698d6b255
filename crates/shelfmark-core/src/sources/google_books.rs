//! Google Books source adapter
//!
//! API docs: https://developers.google.com/books/docs/v1/using

use super::traits::{BookSource, SourceError, SourceMetadata};
use crate::domain::{PublishYear, RecordSource, UnifiedBookRecord};
use crate::http::HttpClient;
use serde::Deserialize;

/// Google Books volumes response wrapper
#[derive(Debug, Deserialize)]
struct VolumesResponse {
    items: Option<Vec<Volume>>,
    #[serde(rename = "totalItems")]
    #[allow(dead_code)]
    total_items: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct Volume {
    id: String,
    #[serde(rename = "volumeInfo")]
    volume_info: VolumeInfo,
}

#[derive(Debug, Deserialize)]
struct VolumeInfo {
    title: Option<String>,
    authors: Option<Vec<String>>,
    publisher: Option<String>,
    #[serde(rename = "publishedDate")]
    published_date: Option<String>,
    description: Option<String>,
    #[serde(rename = "pageCount")]
    page_count: Option<u32>,
    categories: Option<Vec<String>>,
    #[serde(rename = "imageLinks")]
    image_links: Option<ImageLinks>,
    #[serde(rename = "industryIdentifiers")]
    industry_identifiers: Option<Vec<IndustryIdentifier>>,
}

#[derive(Debug, Deserialize)]
struct ImageLinks {
    thumbnail: Option<String>,
    #[serde(rename = "smallThumbnail")]
    #[allow(dead_code)]
    small_thumbnail: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IndustryIdentifier {
    #[serde(rename = "type")]
    id_type: String,
    identifier: String,
}

/// Pick the best ISBN from a volume's identifier list, preferring the
/// 13-digit form over the 10-digit one, with the "N/A" sentinel otherwise.
fn extract_isbn(identifiers: &[IndustryIdentifier]) -> String {
    if let Some(isbn13) = identifiers.iter().find(|id| id.id_type == "ISBN_13") {
        return isbn13.identifier.clone();
    }
    if let Some(isbn10) = identifiers.iter().find(|id| id.id_type == "ISBN_10") {
        return isbn10.identifier.clone();
    }
    "N/A".to_string()
}

/// Extract the year from a date-like string ("1965", "1965-08", "1965-08-01")
/// by taking the leading 4-digit run.
fn extract_publish_year(published_date: Option<&str>) -> PublishYear {
    let Some(date) = published_date else {
        return PublishYear::NotAvailable;
    };

    let lead: String = date.chars().take_while(|c| c.is_ascii_digit()).collect();
    if lead.len() != 4 {
        return PublishYear::NotAvailable;
    }

    lead.parse::<i32>()
        .map(PublishYear::Year)
        .unwrap_or(PublishYear::NotAvailable)
}

pub struct GoogleBooksSource {
    client: HttpClient,
    base_url: String,
}

impl GoogleBooksSource {
    pub fn new() -> Self {
        Self {
            client: HttpClient::default(),
            base_url: "https://www.googleapis.com/books/v1".to_string(),
        }
    }

    /// Parse a Google Books volumes response to unified records
    pub fn parse_search_response(json: &str) -> Result<Vec<UnifiedBookRecord>, SourceError> {
        let response: VolumesResponse = serde_json::from_str(json)
            .map_err(|e| SourceError::Parse(format!("Invalid Google Books JSON: {}", e)))?;

        Ok(response
            .items
            .unwrap_or_default()
            .into_iter()
            .filter_map(Self::parse_volume)
            .collect())
    }

    fn parse_volume(volume: Volume) -> Option<UnifiedBookRecord> {
        let info = volume.volume_info;
        let title = info.title.unwrap_or_default();
        if title.is_empty() {
            return None;
        }

        let isbn = extract_isbn(&info.industry_identifiers.unwrap_or_default());
        let publish_year = extract_publish_year(info.published_date.as_deref());

        let cover_url = info
            .image_links
            .and_then(|links| links.thumbnail)
            .map(|url| url.replacen("http:", "https:", 1));

        Some(UnifiedBookRecord {
            id: format!("google-{}", volume.id),
            title,
            authors: info
                .authors
                .filter(|a| !a.is_empty())
                .unwrap_or_else(|| vec!["Unknown".to_string()]),
            isbn,
            publish_year,
            publisher: info.publisher.unwrap_or_else(|| "N/A".to_string()),
            page_count: info.page_count,
            cover_url,
            description: info.description,
            categories: info.categories,
            source: RecordSource::GoogleBooks,
        })
    }
}

impl Default for GoogleBooksSource {
    fn default() -> Self {
        Self::new()
    }
}

impl BookSource for GoogleBooksSource {
    fn metadata() -> SourceMetadata {
        SourceMetadata {
            id: "google",
            name: "Google Books",
            description: "Google Books volumes catalog",
            base_url: "https://www.googleapis.com/books/v1",
            requires_api_key: false,
        }
    }

    async fn search(&self, query: &str, limit: usize) -> Vec<UnifiedBookRecord> {
        let url = format!("{}/volumes", self.base_url);
        let limit_str = limit.to_string();
        let params = [("q", query), ("maxResults", limit_str.as_str())];

        let body = match self.client.get_text_with_params(&url, &params).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(source = "google", error = %e, "search request failed");
                return Vec::new();
            }
        };

        match Self::parse_search_response(&body) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(source = "google", error = %e, "search response rejected");
                Vec::new()
            }
        }
    }
}
