//! CSV rendering of generated books.

use std::io::Write;

use folio_generator::Book;
use serde::Serialize;
use thiserror::Error;

pub const CONTENT_TYPE: &str = "text/csv; charset=utf-8";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// One flattened CSV line; the header row comes from the renames.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Index")]
    index: u64,
    #[serde(rename = "ISBN")]
    isbn: &'a str,
    #[serde(rename = "Title")]
    title: &'a str,
    #[serde(rename = "Authors")]
    authors: String,
    #[serde(rename = "Publisher")]
    publisher: &'a str,
    #[serde(rename = "Likes")]
    likes: u32,
    #[serde(rename = "ReviewCount")]
    review_count: usize,
    #[serde(rename = "Reviews")]
    reviews: String,
}

impl<'a> From<&'a Book> for CsvRow<'a> {
    fn from(book: &'a Book) -> Self {
        Self {
            index: book.absolute_index,
            isbn: &book.isbn,
            title: &book.title,
            authors: book.authors.join("; "),
            publisher: &book.publisher,
            likes: book.likes,
            review_count: book.reviews.len(),
            reviews: book
                .reviews
                .iter()
                .map(|review| format!("{}: {}", review.author, review.text))
                .collect::<Vec<_>>()
                .join(" | "),
        }
    }
}

/// Write a header row and one row per book.
pub fn write_csv<W: Write>(writer: W, books: &[Book]) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for book in books {
        csv_writer.serialize(CsvRow::from(book))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Render books into an in-memory CSV document.
pub fn to_csv(books: &[Book]) -> Result<Vec<u8>, ExportError> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, books)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_generator::Review;

    fn sample_book() -> Book {
        Book {
            absolute_index: 1,
            isbn: "978-1-23-456789-0".to_string(),
            title: "The Quiet, Red River".to_string(),
            authors: vec!["Ada Lane".to_string(), "Tom Reed".to_string()],
            publisher: "Harbor Press".to_string(),
            likes: 4,
            reviews: vec![
                Review {
                    text: "Lovely.".to_string(),
                    author: "J. Smith".to_string(),
                },
                Review {
                    text: "Slow start.".to_string(),
                    author: "K. Ito".to_string(),
                },
            ],
        }
    }

    #[test]
    fn header_row_comes_first() {
        let csv = String::from_utf8(to_csv(&[sample_book()]).unwrap()).unwrap();
        let header = csv.lines().next().unwrap();
        assert_eq!(
            header,
            "Index,ISBN,Title,Authors,Publisher,Likes,ReviewCount,Reviews"
        );
    }

    #[test]
    fn lists_are_joined_within_one_row() {
        let bytes = to_csv(&[sample_book()]).unwrap();
        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(&row[0], "1");
        assert_eq!(&row[2], "The Quiet, Red River");
        assert_eq!(&row[3], "Ada Lane; Tom Reed");
        assert_eq!(&row[6], "2");
        assert_eq!(&row[7], "J. Smith: Lovely. | K. Ito: Slow start.");
    }

    #[test]
    fn empty_batch_writes_nothing() {
        // Headers are emitted with the first serialized row.
        assert!(to_csv(&[]).unwrap().is_empty());
    }
}
