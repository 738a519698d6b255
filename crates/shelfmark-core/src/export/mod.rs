//! CSV export of the catalog

use crate::domain::{Book, PublishYear, Shelf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Encoding error: {0}")]
    Encoding(String),
}

/// Options for export
#[derive(Clone, Debug)]
pub struct ExportOptions {
    pub include_status: bool,
    pub include_shelf: bool,
    pub include_page_count: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_status: true,
            include_shelf: true,
            include_page_count: true,
        }
    }
}

fn year_column(year: &PublishYear) -> String {
    match year {
        PublishYear::Year(y) => y.to_string(),
        PublishYear::NotAvailable => "N/A".to_string(),
    }
}

/// Export books to a CSV document.
pub fn export_csv(
    books: &[Book],
    shelves: &[Shelf],
    options: &ExportOptions,
) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec!["Title", "Author", "ISBN", "Published Year", "Publisher"];
    if options.include_page_count {
        header.push("Page Count");
    }
    if options.include_status {
        header.push("Reading Status");
    }
    if options.include_shelf {
        header.push("Shelf");
    }
    header.push("Date Added");
    header.push("Date Completed");
    writer.write_record(&header)?;

    for book in books {
        let mut row = vec![
            book.title.clone(),
            book.author.clone(),
            book.isbn.clone(),
            year_column(&book.publish_year),
            book.publisher.clone(),
        ];

        if options.include_page_count {
            row.push(
                book.page_count
                    .map(|p| p.to_string())
                    .unwrap_or_default(),
            );
        }
        if options.include_status {
            row.push(book.status.label().to_string());
        }
        if options.include_shelf {
            let shelf_name = shelves
                .iter()
                .find(|s| s.id == book.shelf_id)
                .map(|s| s.name.clone())
                .unwrap_or_default();
            row.push(shelf_name);
        }

        row.push(book.date_added.format("%Y-%m-%d").to_string());
        row.push(
            book.date_completed
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        );

        writer.write_record(&row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Encoding(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Encoding(e.to_string()))
}
