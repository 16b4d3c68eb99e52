/// Normalizes a search term for matching: surrounding whitespace is
/// dropped and the remainder lower-cased, so a whitespace-only term
/// normalizes to the empty string.
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}
