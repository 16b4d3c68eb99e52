use tracing::info;

use crate::models::views::{BookCard, CatalogHeading, CatalogView, Suggestion};
use crate::services::catalog::Catalog;
use crate::services::search::{filter_books, suggestions};

/// State behind the catalog page: the current search term. Both derived
/// lists are recomputed from scratch by [`CatalogPage::view`] on every
/// change; there is exactly one writer and no background work.
#[derive(Debug, Default)]
pub struct CatalogPage {
    term: String,
}

impl CatalogPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
    }

    /// The clear action: resets the term so the next view shows the full
    /// collection again.
    pub fn clear(&mut self) {
        self.term.clear();
    }

    pub fn view(&self, catalog: &Catalog) -> CatalogView {
        let filtered = filter_books(catalog.books(), &self.term);
        let suggested = suggestions(&self.term, &filtered);

        info!(
            "Search '{}' matched {} of {} books",
            self.term,
            filtered.len(),
            catalog.len()
        );

        let heading = if self.term.is_empty() {
            CatalogHeading::Library
        } else {
            CatalogHeading::SearchResults {
                count: filtered.len(),
            }
        };

        CatalogView {
            query: self.term.clone(),
            heading,
            count: filtered.len(),
            results: filtered.iter().map(|book| BookCard::from_record(book)).collect(),
            suggestions: suggested
                .iter()
                .map(|book| Suggestion::from_record(book))
                .collect(),
        }
    }
}
