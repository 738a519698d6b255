//! Catalog store, presentation, and export integration tests

use chrono::{Duration, Utc};
use shelfmark_core::{
    aging_level, calculate_spine_width, export_csv, sort_books, AgingLevel, BookPatch,
    CatalogStore, ExportOptions, MemoryCatalogStore, PublishYear, ReadingStatus, RecordSource,
    SortMode, SpineCategory, UnifiedBookRecord,
};

fn search_result(title: &str, pages: Option<u32>) -> UnifiedBookRecord {
    UnifiedBookRecord {
        id: format!("google-{}", title.to_lowercase()),
        title: title.to_string(),
        authors: vec!["Ursula K. Le Guin".to_string()],
        isbn: "N/A".to_string(),
        publish_year: PublishYear::Year(1969),
        publisher: "Ace".to_string(),
        page_count: pages,
        cover_url: None,
        description: None,
        categories: None,
        source: RecordSource::GoogleBooks,
    }
}

#[test]
fn test_add_to_library_then_render_attributes() {
    let store = MemoryCatalogStore::new();
    let book = store.insert_book(&search_result("The Dispossessed", Some(387)), "main-stacks");

    // Fresh wanted book renders pristine with a thick spine
    let spine = calculate_spine_width(book.page_count);
    assert_eq!(spine.width, 13);
    assert_eq!(spine.category, SpineCategory::Thick);
    assert_eq!(
        aging_level(book.status, book.date_added, Utc::now()),
        AgingLevel::Pristine
    );
}

#[test]
fn test_status_lifecycle_drives_aging() {
    let store = MemoryCatalogStore::new();
    let book = store.insert_book(&search_result("The Dispossessed", None), "main-stacks");

    let finished = store
        .patch_book(
            &book.id,
            BookPatch {
                status: Some(ReadingStatus::Finished),
                ..Default::default()
            },
        )
        .unwrap();

    // 200 days from now this finished book reads as beloved
    let later = Utc::now() + Duration::days(200);
    assert_eq!(
        aging_level(finished.status, finished.date_added, later),
        AgingLevel::Beloved
    );
}

#[test]
fn test_store_snapshot_sorts_without_mutation() {
    let store = MemoryCatalogStore::new();
    store.insert_book(&search_result("Zebra", Some(100)), "main-stacks");
    store.insert_book(&search_result("Apple", Some(900)), "main-stacks");

    let snapshot = store.books();
    let by_title = sort_books(&snapshot, SortMode::Title);
    assert_eq!(by_title[0].title, "Apple");

    let by_pages = sort_books(&snapshot, SortMode::PageCount);
    assert_eq!(by_pages[0].title, "Apple");

    // The stored order is untouched
    assert_eq!(store.books()[0].title, "Zebra");
}

#[test]
fn test_export_reflects_store_state() {
    let store = MemoryCatalogStore::new();
    let book = store.insert_book(&search_result("The Dispossessed", Some(387)), "archive");
    store
        .patch_book(
            &book.id,
            BookPatch {
                status: Some(ReadingStatus::Finished),
                ..Default::default()
            },
        )
        .unwrap();

    let csv = export_csv(&store.books(), &store.shelves(), &ExportOptions::default()).unwrap();
    let row = csv.lines().nth(1).unwrap();

    assert!(row.starts_with("The Dispossessed,Ursula K. Le Guin,N/A,1969,Ace,387,Read,Archive,"));
    // Completed today, so the Date Completed column is populated
    assert!(!row.ends_with(','));
}
