//! Hybrid search combining Google Books and OpenLibrary

use crate::dedup::deduplicate;
use crate::domain::UnifiedBookRecord;
use crate::sources::{BookSource, GoogleBooksSource, OpenLibrarySource};

/// Results fetched per provider before merging
const PER_SOURCE_LIMIT: usize = 5;
/// Maximum merged results returned to callers
const MAX_RESULTS: usize = 10;

/// Aggregates two catalog sources into one deduplicated, ranked list.
pub struct HybridSearcher<A: BookSource, B: BookSource> {
    source_a: A,
    source_b: B,
}

impl Default for HybridSearcher<GoogleBooksSource, OpenLibrarySource> {
    fn default() -> Self {
        Self::new(GoogleBooksSource::new(), OpenLibrarySource::new())
    }
}

impl<A: BookSource, B: BookSource> HybridSearcher<A, B> {
    pub fn new(source_a: A, source_b: B) -> Self {
        Self { source_a, source_b }
    }

    /// Search both providers concurrently and return at most 10 merged
    /// records in first-appearance order.
    ///
    /// Both branches run to completion before merging; a failing provider
    /// contributes an empty set without reducing its sibling's results
    /// (each `search` is total and absorbs its own failures).
    pub async fn hybrid_search(&self, query: &str) -> Vec<UnifiedBookRecord> {
        let (mut results_a, results_b) = tokio::join!(
            self.source_a.search(query, PER_SOURCE_LIMIT),
            self.source_b.search(query, PER_SOURCE_LIMIT),
        );

        // Fixed provider order: A before B, each keeping its own ranking
        results_a.extend(results_b);

        let mut merged = deduplicate(results_a);
        merged.truncate(MAX_RESULTS);
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PublishYear, RecordSource};
    use crate::sources::SourceMetadata;

    struct StubSource {
        results: Vec<UnifiedBookRecord>,
    }

    impl BookSource for StubSource {
        fn metadata() -> SourceMetadata {
            SourceMetadata {
                id: "stub",
                name: "Stub",
                description: "test fixture",
                base_url: "http://localhost",
                requires_api_key: false,
            }
        }

        async fn search(&self, _query: &str, limit: usize) -> Vec<UnifiedBookRecord> {
            self.results.iter().take(limit).cloned().collect()
        }
    }

    fn record(id: &str, title: &str, source: RecordSource) -> UnifiedBookRecord {
        UnifiedBookRecord {
            id: id.to_string(),
            title: title.to_string(),
            authors: vec!["Unknown".to_string()],
            isbn: "N/A".to_string(),
            publish_year: PublishYear::NotAvailable,
            publisher: "N/A".to_string(),
            page_count: None,
            cover_url: None,
            description: None,
            categories: None,
            source,
        }
    }

    #[tokio::test]
    async fn test_provider_a_ranked_before_b() {
        let searcher = HybridSearcher::new(
            StubSource {
                results: vec![record("g1", "Alpha", RecordSource::GoogleBooks)],
            },
            StubSource {
                results: vec![record("o1", "Beta", RecordSource::OpenLibrary)],
            },
        );

        let results = searcher.hybrid_search("alpha").await;
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, "g1");
        assert_eq!(results[1].id, "o1");
    }

    #[tokio::test]
    async fn test_empty_provider_does_not_reduce_sibling() {
        let searcher = HybridSearcher::new(
            StubSource {
                results: (0..5)
                    .map(|i| record(&format!("g{}", i), &format!("Title {}", i), RecordSource::GoogleBooks))
                    .collect(),
            },
            StubSource { results: vec![] },
        );

        let results = searcher.hybrid_search("anything").await;
        assert_eq!(results.len(), 5);
        assert!(results.iter().all(|r| r.source == RecordSource::GoogleBooks));
    }
}
