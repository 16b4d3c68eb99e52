use std::collections::HashSet;

use thiserror::Error;

use crate::models::book::BookRecord;

/// Related-books sections show at most this many entries.
pub const RELATED_LIMIT: usize = 4;

const BUILTIN_BOOKS: &str = include_str!("../data/books.json");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog data error: {0}")]
    Data(#[from] serde_json::Error),
    #[error("duplicate book id {0} in catalog data")]
    DuplicateId(u32),
    #[error("book {id} has rating {rating} outside 0.0..=5.0")]
    InvalidRating { id: u32, rating: f64 },
}

/// Read-only, ordered book collection. Built once per session and
/// stable for its lifetime; every derived view preserves its order.
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<BookRecord>,
}

impl Catalog {
    pub fn new(books: Vec<BookRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for book in &books {
            if !seen.insert(book.id) {
                return Err(CatalogError::DuplicateId(book.id));
            }
            if !(0.0..=5.0).contains(&book.rating) {
                return Err(CatalogError::InvalidRating {
                    id: book.id,
                    rating: book.rating,
                });
            }
        }
        Ok(Self { books })
    }

    pub fn from_json(data: &str) -> Result<Self, CatalogError> {
        let books: Vec<BookRecord> = serde_json::from_str(data)?;
        Self::new(books)
    }

    /// The catalog shipped with the application.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_BOOKS)
    }

    pub fn books(&self) -> &[BookRecord] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn find(&self, book_id: u32) -> Option<&BookRecord> {
        self.books.iter().find(|book| book.id == book_id)
    }

    /// Up to [`RELATED_LIMIT`] other books from the same category, in
    /// catalog order.
    pub fn related_books(&self, book: &BookRecord) -> Vec<&BookRecord> {
        self.books
            .iter()
            .filter(|other| other.category == book.category && other.id != book.id)
            .take(RELATED_LIMIT)
            .collect()
    }
}
