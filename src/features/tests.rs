use super::*;

use crate::constants::NEUTRAL_RATING;

mod rating_tests {
    use super::*;

    #[test]
    fn test_numeric_rating_passes_through() {
        assert_eq!(parse_rating(&RawRating::Number(4.5), NEUTRAL_RATING), 4.5);
        assert_eq!(parse_rating(&RawRating::Number(1.0), NEUTRAL_RATING), 1.0);
    }

    #[test]
    fn test_text_rating_parses() {
        let raw = RawRating::Text("4.0".to_string());
        assert_eq!(parse_rating(&raw, NEUTRAL_RATING), 4.0);

        let padded = RawRating::Text("  5 ".to_string());
        assert_eq!(parse_rating(&padded, NEUTRAL_RATING), 5.0);
    }

    #[test]
    fn test_unparseable_text_substitutes_neutral() {
        let raw = RawRating::Text("abc".to_string());
        assert_eq!(parse_rating(&raw, NEUTRAL_RATING), NEUTRAL_RATING);
    }

    #[test]
    fn test_unparseable_equals_explicit_neutral() {
        // "abc" must behave identically to an explicit 3.0
        let malformed = parse_rating(&RawRating::Text("abc".to_string()), NEUTRAL_RATING);
        let explicit = parse_rating(&RawRating::Number(3.0), NEUTRAL_RATING);
        assert_eq!(malformed, explicit);
    }

    #[test]
    fn test_absent_rating_substitutes_neutral() {
        assert_eq!(parse_rating(&RawRating::Absent, NEUTRAL_RATING), NEUTRAL_RATING);
    }

    #[test]
    fn test_non_finite_rating_substitutes_neutral() {
        assert_eq!(
            parse_rating(&RawRating::Number(f64::NAN), NEUTRAL_RATING),
            NEUTRAL_RATING
        );
        assert_eq!(
            parse_rating(&RawRating::Text("inf".to_string()), NEUTRAL_RATING),
            NEUTRAL_RATING
        );
    }

    #[test]
    fn test_custom_neutral_is_honored() {
        assert_eq!(parse_rating(&RawRating::Absent, 2.5), 2.5);
    }
}

mod fuse_tests {
    use super::*;

    #[test]
    fn test_layout_is_rating_count_then_text() {
        // rating=4, 5 tokens, text=[0.1, 0.2] -> exactly [4.0, 5.0, 0.1, 0.2]
        let features = fuse(4.0, 5, &[0.1, 0.2]);
        assert_eq!(features, vec![4.0, 5.0, 0.1, 0.2]);
    }

    #[test]
    fn test_output_dimension() {
        let features = fuse(3.0, 12, &[0.0; 300]);
        assert_eq!(features.len(), crate::constants::feature_dim(300));
    }

    #[test]
    fn test_zero_length_text_vector() {
        // Degenerate at the type level; the pipeline never constructs this,
        // but the layout still holds.
        assert_eq!(fuse(2.0, 0, &[]), vec![2.0, 0.0]);
    }
}
