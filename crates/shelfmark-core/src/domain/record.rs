//! Unified search result representation merged across catalog providers

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Sentinel used by providers for missing string fields
pub const NOT_AVAILABLE: &str = "N/A";

/// Catalog provider a search result came from
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecordSource {
    #[serde(rename = "google")]
    GoogleBooks,
    #[serde(rename = "openlibrary")]
    OpenLibrary,
    Hybrid,
}

impl RecordSource {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordSource::GoogleBooks => "google",
            RecordSource::OpenLibrary => "openlibrary",
            RecordSource::Hybrid => "hybrid",
        }
    }
}

/// Publication year, which providers report as either an integer or the
/// sentinel string "N/A". Serialized as a bare number or the sentinel for
/// wire compatibility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PublishYear {
    Year(i32),
    NotAvailable,
}

impl PublishYear {
    pub fn is_available(&self) -> bool {
        matches!(self, PublishYear::Year(_))
    }
}

impl Serialize for PublishYear {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PublishYear::Year(y) => serializer.serialize_i32(*y),
            PublishYear::NotAvailable => serializer.serialize_str(NOT_AVAILABLE),
        }
    }
}

impl<'de> Deserialize<'de> for PublishYear {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct YearVisitor;

        impl<'de> Visitor<'de> for YearVisitor {
            type Value = PublishYear;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer year or the string \"N/A\"")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(PublishYear::Year(v as i32))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(PublishYear::Year(v as i32))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                match v.parse::<i32>() {
                    Ok(y) => Ok(PublishYear::Year(y)),
                    Err(_) => Ok(PublishYear::NotAvailable),
                }
            }
        }

        deserializer.deserialize_any(YearVisitor)
    }
}

/// A search result from an online catalog, possibly merged from several
/// providers under the same dedup key.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UnifiedBookRecord {
    pub id: String,
    pub title: String,
    /// Ordered author list; providers without author data yield ["Unknown"]
    pub authors: Vec<String>,
    pub isbn: String,
    pub publish_year: PublishYear,
    pub publisher: String,
    pub page_count: Option<u32>,
    pub cover_url: Option<String>,
    pub description: Option<String>,
    pub categories: Option<Vec<String>>,
    pub source: RecordSource,
}

impl UnifiedBookRecord {
    /// First author, defaulting to "Unknown" for records with no author data
    pub fn primary_author(&self) -> &str {
        self.authors.first().map(String::as_str).unwrap_or("Unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_source_as_str() {
        assert_eq!(RecordSource::GoogleBooks.as_str(), "google");
        assert_eq!(RecordSource::OpenLibrary.as_str(), "openlibrary");
        assert_eq!(RecordSource::Hybrid.as_str(), "hybrid");
    }

    #[test]
    fn test_publish_year_serializes_as_number_or_sentinel() {
        assert_eq!(
            serde_json::to_string(&PublishYear::Year(1965)).unwrap(),
            "1965"
        );
        assert_eq!(
            serde_json::to_string(&PublishYear::NotAvailable).unwrap(),
            "\"N/A\""
        );
    }

    #[test]
    fn test_publish_year_deserializes_both_shapes() {
        let year: PublishYear = serde_json::from_str("1965").unwrap();
        assert_eq!(year, PublishYear::Year(1965));

        let sentinel: PublishYear = serde_json::from_str("\"N/A\"").unwrap();
        assert_eq!(sentinel, PublishYear::NotAvailable);

        let stringly: PublishYear = serde_json::from_str("\"2001\"").unwrap();
        assert_eq!(stringly, PublishYear::Year(2001));
    }
}
