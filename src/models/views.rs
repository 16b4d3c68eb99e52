use serde::{Deserialize, Serialize};

use crate::models::book::BookRecord;
use crate::utils::stars::Star;

/// Summary shown in the result grid and in related-book sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookCard {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub category: String,
    pub price: f64,
    pub rating: f64,
    pub cover_image: String,
    pub stock: u32,
}

impl BookCard {
    pub fn from_record(book: &BookRecord) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
            category: book.category.clone(),
            price: book.price,
            rating: book.rating,
            cover_image: book.cover_image.clone(),
            stock: book.stock,
        }
    }
}

/// Entry in the search dropdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub cover_image: String,
}

impl Suggestion {
    pub fn from_record(book: &BookRecord) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
            cover_image: book.cover_image.clone(),
        }
    }
}

/// Heading above the result grid: the full library, or a search result
/// count while a term is entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogHeading {
    Library,
    SearchResults { count: usize },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogView {
    pub query: String,
    pub heading: CatalogHeading,
    pub count: usize,
    pub results: Vec<BookCard>,
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookDetails {
    pub book: BookRecord,
    pub stars: [Star; 5],
    pub review_count: u32,
    pub related: Vec<BookCard>,
}

/// A missing or unparseable book id is an expected outcome with its own
/// rendered state, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BookDetailsView {
    Found(BookDetails),
    NotFound { book_id: String },
}
