//! Tests for the dot-decimal parser

#[cfg(test)]
mod tests {
    use super::super::parser::{parse, parse_ipv4};
    use crate::error::FormatError;

    #[test]
    fn test_parse_simple() {
        assert_eq!(parse("22.4.5").unwrap(), vec![22, 4, 5]);
    }

    #[test]
    fn test_parse_single_part() {
        assert_eq!(parse("7").unwrap(), vec![7]);
    }

    #[test]
    fn test_parse_signed_parts() {
        // Standard integer literal rules: leading '-' and '+' are accepted
        assert_eq!(parse("-1.0.+3").unwrap(), vec![-1, 0, 3]);
    }

    #[test]
    fn test_parse_empty_string_fails() {
        // "".split('.') yields one empty part, which is not an integer
        let err = parse("").unwrap_err();
        assert!(matches!(err, FormatError::InvalidInteger { part, .. } if part.is_empty()));
    }

    #[test]
    fn test_parse_non_numeric_part_fails() {
        let err = parse("1.x.3").unwrap_err();
        assert!(matches!(err, FormatError::InvalidInteger { part, .. } if part == "x"));
    }

    #[test]
    fn test_parse_adjacent_dots_fail() {
        // "1..2" has an empty middle part
        assert!(parse("1..2").is_err());
    }

    #[test]
    fn test_ipv4_valid() {
        assert_eq!(parse_ipv4("1.2.3.4"), Some(vec![1, 2, 3, 4]));
        assert_eq!(parse_ipv4("127.0.0.1"), Some(vec![127, 0, 0, 1]));
        assert_eq!(parse_ipv4("0.0.0.0"), Some(vec![0, 0, 0, 0]));
        assert_eq!(parse_ipv4("255.255.255.255"), Some(vec![255, 255, 255, 255]));
    }

    #[test]
    fn test_ipv4_wrong_part_count() {
        assert_eq!(parse_ipv4("22.4.5"), None);
        assert_eq!(parse_ipv4("1.2.3.4.5"), None);
    }

    #[test]
    fn test_ipv4_out_of_range() {
        assert_eq!(parse_ipv4("1.2.3.256"), None);
    }

    #[test]
    fn test_ipv4_negative_octet() {
        // Syntactically a valid integer, but below the octet range
        assert_eq!(parse_ipv4("1.2.3.-1"), None);
    }

    #[test]
    fn test_ipv4_non_numeric_caught() {
        // Parse failure is swallowed internally, not surfaced
        assert_eq!(parse_ipv4("a.b.c.d"), None);
    }

    #[test]
    fn test_ipv4_empty_string() {
        assert_eq!(parse_ipv4(""), None);
    }
}
