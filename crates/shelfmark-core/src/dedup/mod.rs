//! Deduplication of search results across catalog providers
//!
//! Results are keyed by normalized title only. Two distinct books sharing a
//! normalized title collapse into one record; author disambiguation is not
//! performed.

use crate::domain::{PublishYear, RecordSource, UnifiedBookRecord, NOT_AVAILABLE};
use std::collections::HashMap;

/// Normalize a title into a dedup key: lowercase, keep only `[a-z0-9]`
pub fn dedup_key(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Merge a later record into the canonical one for its key.
///
/// Field rule: keep the existing value unless it is empty or a sentinel
/// ("N/A", absent, empty list), in which case take the incoming value.
/// Any merge marks the canonical record as Hybrid.
fn merge_into(canonical: &mut UnifiedBookRecord, incoming: UnifiedBookRecord) {
    if canonical.isbn == NOT_AVAILABLE && incoming.isbn != NOT_AVAILABLE {
        canonical.isbn = incoming.isbn;
    }
    if canonical.publisher == NOT_AVAILABLE && incoming.publisher != NOT_AVAILABLE {
        canonical.publisher = incoming.publisher;
    }
    if canonical.publish_year == PublishYear::NotAvailable {
        canonical.publish_year = incoming.publish_year;
    }
    if canonical.authors.is_empty() || canonical.authors == ["Unknown"] {
        if !incoming.authors.is_empty() && incoming.authors != ["Unknown"] {
            canonical.authors = incoming.authors;
        }
    }
    if canonical.page_count.is_none() {
        canonical.page_count = incoming.page_count;
    }
    if canonical.cover_url.is_none() {
        canonical.cover_url = incoming.cover_url;
    }
    if canonical.description.is_none() {
        canonical.description = incoming.description;
    }
    if canonical
        .categories
        .as_ref()
        .map(|c| c.is_empty())
        .unwrap_or(true)
    {
        canonical.categories = incoming.categories.filter(|c| !c.is_empty());
    }

    canonical.source = RecordSource::Hybrid;
}

/// Walk records in order, keeping the first record per key as canonical and
/// merging later duplicates into it. Output preserves first-appearance order.
pub fn deduplicate(records: Vec<UnifiedBookRecord>) -> Vec<UnifiedBookRecord> {
    let mut key_order: Vec<String> = Vec::new();
    let mut seen: HashMap<String, UnifiedBookRecord> = HashMap::new();

    for record in records {
        let key = dedup_key(&record.title);
        match seen.get_mut(&key) {
            None => {
                key_order.push(key.clone());
                seen.insert(key, record);
            }
            Some(canonical) => {
                tracing::debug!(key = %key, id = %record.id, "merging duplicate search result");
                merge_into(canonical, record);
            }
        }
    }

    key_order
        .into_iter()
        .filter_map(|key| seen.remove(&key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, title: &str, isbn: &str, source: RecordSource) -> UnifiedBookRecord {
        UnifiedBookRecord {
            id: id.to_string(),
            title: title.to_string(),
            authors: vec!["Unknown".to_string()],
            isbn: isbn.to_string(),
            publish_year: PublishYear::NotAvailable,
            publisher: "N/A".to_string(),
            page_count: None,
            cover_url: None,
            description: None,
            categories: None,
            source,
        }
    }

    #[test]
    fn test_dedup_key_strips_punctuation_and_case() {
        assert_eq!(dedup_key("Dune"), "dune");
        assert_eq!(dedup_key("The Left Hand of Darkness!"), "thelefthandofdarkness");
        assert_eq!(dedup_key("Fahrenheit 451"), "fahrenheit451");
        assert_eq!(dedup_key("  ?! "), "");
    }

    #[test]
    fn test_first_record_is_canonical() {
        let merged = deduplicate(vec![
            record("a", "Dune", "111", RecordSource::GoogleBooks),
            record("b", "DUNE!", "222", RecordSource::OpenLibrary),
        ]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].id, "a");
        assert_eq!(merged[0].isbn, "111");
        assert_eq!(merged[0].source, RecordSource::Hybrid);
    }

    #[test]
    fn test_sentinel_fields_take_incoming_value() {
        let mut first = record("a", "Dune", "N/A", RecordSource::GoogleBooks);
        first.description = Some("A desert planet".to_string());
        let mut second = record("b", "Dune", "0441013597", RecordSource::OpenLibrary);
        second.publisher = "Ace".to_string();
        second.publish_year = PublishYear::Year(1965);
        second.page_count = Some(604);
        second.authors = vec!["Frank Herbert".to_string()];

        let merged = deduplicate(vec![first, second]);
        assert_eq!(merged.len(), 1);
        let canonical = &merged[0];
        assert_eq!(canonical.isbn, "0441013597");
        assert_eq!(canonical.publisher, "Ace");
        assert_eq!(canonical.publish_year, PublishYear::Year(1965));
        assert_eq!(canonical.page_count, Some(604));
        assert_eq!(canonical.authors, vec!["Frank Herbert"]);
        assert_eq!(canonical.description.as_deref(), Some("A desert planet"));
        assert_eq!(canonical.source, RecordSource::Hybrid);
    }

    #[test]
    fn test_distinct_titles_do_not_merge() {
        let merged = deduplicate(vec![
            record("a", "Dune", "111", RecordSource::GoogleBooks),
            record("b", "Dune Messiah", "222", RecordSource::OpenLibrary),
        ]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].source, RecordSource::GoogleBooks);
        assert_eq!(merged[1].source, RecordSource::OpenLibrary);
    }

    #[test]
    fn test_output_preserves_first_appearance_order() {
        let merged = deduplicate(vec![
            record("a", "Beta", "1", RecordSource::GoogleBooks),
            record("b", "Alpha", "2", RecordSource::GoogleBooks),
            record("c", "beta", "3", RecordSource::OpenLibrary),
        ]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].title, "Beta");
        assert_eq!(merged[1].title, "Alpha");
    }
}
