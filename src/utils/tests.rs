//! Utility Tests
//!
//! Term normalization and the rating-to-stars display mapping.

#[cfg(test)]
mod tests {
    use crate::utils::stars::star_row;
    use crate::utils::stars::Star::{Empty, Full, Half};
    use crate::utils::text::normalize_term;

    #[test]
    fn test_normalize_term_trims_and_lowercases() {
        assert_eq!(normalize_term("  DUNE  "), "dune");
        assert_eq!(normalize_term("Frank Herbert"), "frank herbert");
    }

    #[test]
    fn test_normalize_term_whitespace_only_is_empty() {
        assert_eq!(normalize_term("   \t "), "");
        assert_eq!(normalize_term(""), "");
    }

    #[test]
    fn test_star_row_rounds_half_up() {
        assert_eq!(star_row(3.7), [Full, Full, Full, Half, Empty]);
    }

    #[test]
    fn test_star_row_whole_rating_has_no_half() {
        assert_eq!(star_row(4.0), [Full, Full, Full, Full, Empty]);
    }

    #[test]
    fn test_star_row_small_fraction_stays_empty() {
        assert_eq!(star_row(0.2), [Empty, Empty, Empty, Empty, Empty]);
    }

    #[test]
    fn test_star_row_half_boundary() {
        assert_eq!(star_row(4.5), [Full, Full, Full, Full, Half]);
        assert_eq!(star_row(0.5), [Half, Empty, Empty, Empty, Empty]);
    }

    #[test]
    fn test_star_row_full_rating() {
        assert_eq!(star_row(5.0), [Full, Full, Full, Full, Full]);
    }
}
