use tracing::warn;

use crate::models::views::{BookCard, BookDetails, BookDetailsView};
use crate::services::catalog::Catalog;
use crate::utils::stars::star_row;

/// Builds the details page for a raw id taken from the route path. An
/// id that does not parse as an integer is treated the same as one that
/// matches no record.
pub fn book_details(book_id: &str, catalog: &Catalog) -> BookDetailsView {
    let id = match book_id.parse::<u32>() {
        Ok(id) => id,
        Err(_) => {
            warn!("Book id '{}' is not a number", book_id);
            return BookDetailsView::NotFound {
                book_id: book_id.to_string(),
            };
        }
    };

    match catalog.find(id) {
        Some(book) => BookDetailsView::Found(BookDetails {
            book: book.clone(),
            stars: star_row(book.rating),
            review_count: (book.rating * 10.0).floor() as u32,
            related: catalog
                .related_books(book)
                .iter()
                .map(|related| BookCard::from_record(related))
                .collect(),
        }),
        None => {
            warn!("Book {} not found", id);
            BookDetailsView::NotFound {
                book_id: book_id.to_string(),
            }
        }
    }
}
