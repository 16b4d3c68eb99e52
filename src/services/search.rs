use crate::models::book::BookRecord;
use crate::utils::text::normalize_term;

/// The suggestion dropdown shows at most this many entries.
pub const SUGGESTION_LIMIT: usize = 5;

/// Case-insensitive substring match against the searchable fields.
/// `term` must already be normalized.
pub fn matches_term(book: &BookRecord, term: &str) -> bool {
    book.title.to_lowercase().contains(term)
        || book.author.to_lowercase().contains(term)
        || book.category.to_lowercase().contains(term)
        || book.description.to_lowercase().contains(term)
}

/// Filters the collection by the current search term. An empty or
/// whitespace-only term returns every book; otherwise the result keeps
/// catalog order (stable filter, no relevance ranking).
pub fn filter_books<'a>(books: &'a [BookRecord], term: &str) -> Vec<&'a BookRecord> {
    let term = normalize_term(term);
    if term.is_empty() {
        return books.iter().collect();
    }

    books
        .iter()
        .filter(|book| matches_term(book, &term))
        .collect()
}

/// Truncation view of the filtered list for the dropdown. The dropdown
/// is gated on the raw input value, not the trimmed one, so a
/// whitespace-only term still shows the (unfiltered) head of the list.
pub fn suggestions<'a>(raw_term: &str, filtered: &[&'a BookRecord]) -> Vec<&'a BookRecord> {
    if raw_term.is_empty() {
        return Vec::new();
    }

    filtered.iter().copied().take(SUGGESTION_LIMIT).collect()
}
