//! # Numeric Filter Predicates
//!
//! Parses comparison strings such as `">=4.5"` into predicates.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Comparison operators accepted by the filter grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparison {
    /// Equals
    #[serde(rename = "eq")]
    Eq,

    /// Greater than
    #[serde(rename = "gt")]
    Gt,

    /// Less than
    #[serde(rename = "lt")]
    Lt,

    /// Greater than or equal
    #[serde(rename = "gte")]
    Gte,

    /// Less than or equal
    #[serde(rename = "lte")]
    Lte,
}

impl Comparison {
    /// Get the operator string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparison::Eq => "eq",
            Comparison::Gt => "gt",
            Comparison::Lt => "lt",
            Comparison::Gte => "gte",
            Comparison::Lte => "lte",
        }
    }
}

/// A numeric comparison predicate: operator plus threshold.
///
/// Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericFilter {
    /// Comparison operator
    pub comparison: Comparison,

    /// Threshold the field value is compared against
    pub threshold: f64,
}

/// Anchored filter grammar: optional operator (two-character operators
/// listed before their one-character prefixes), optional whitespace, then
/// `digits[.digits]`. No sign, no exponent, no thousands separators.
fn filter_grammar() -> &'static Regex {
    static GRAMMAR: OnceLock<Regex> = OnceLock::new();
    GRAMMAR.get_or_init(|| {
        Regex::new(r"^(>=|<=|>|<|=)?\s*(\d+(?:\.\d+)?)$").expect("filter grammar is valid")
    })
}

impl NumericFilter {
    /// Create a new predicate
    pub fn new(comparison: Comparison, threshold: f64) -> Self {
        Self {
            comparison,
            threshold,
        }
    }

    /// Parse a raw filter string into a predicate.
    ///
    /// Returns `None` for anything that does not match the grammar as a
    /// whole string. Absence is not an error: the caller treats it as
    /// "field unconstrained". A missing operator defaults to equality.
    pub fn parse(raw: &str) -> Option<Self> {
        let captures = filter_grammar().captures(raw)?;

        let comparison = match captures.get(1).map(|m| m.as_str()) {
            Some(">=") => Comparison::Gte,
            Some("<=") => Comparison::Lte,
            Some(">") => Comparison::Gt,
            Some("<") => Comparison::Lt,
            Some("=") | None => Comparison::Eq,
            Some(_) => return None,
        };

        let threshold: f64 = captures.get(2)?.as_str().parse().ok()?;

        Some(Self::new(comparison, threshold))
    }

    /// Check whether a field value satisfies this predicate
    pub fn matches(&self, value: f64) -> bool {
        match self.comparison {
            Comparison::Eq => value == self.threshold,
            Comparison::Gt => value > self.threshold,
            Comparison::Lt => value < self.threshold,
            Comparison::Gte => value >= self.threshold,
            Comparison::Lte => value <= self.threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_operator() {
        let filter = NumericFilter::parse(">=4.5").unwrap();
        assert_eq!(filter.comparison, Comparison::Gte);
        assert_eq!(filter.threshold, 4.5);

        let filter = NumericFilter::parse("<=400").unwrap();
        assert_eq!(filter.comparison, Comparison::Lte);
        assert_eq!(filter.threshold, 400.0);

        let filter = NumericFilter::parse(">30").unwrap();
        assert_eq!(filter.comparison, Comparison::Gt);

        let filter = NumericFilter::parse("<5").unwrap();
        assert_eq!(filter.comparison, Comparison::Lt);

        let filter = NumericFilter::parse("=3").unwrap();
        assert_eq!(filter.comparison, Comparison::Eq);
    }

    #[test]
    fn test_parse_without_operator_defaults_to_eq() {
        let filter = NumericFilter::parse("4.5").unwrap();
        assert_eq!(filter.comparison, Comparison::Eq);
        assert_eq!(filter.threshold, 4.5);
    }

    #[test]
    fn test_parse_allows_whitespace_after_operator() {
        let filter = NumericFilter::parse(">= 4.5").unwrap();
        assert_eq!(filter.comparison, Comparison::Gte);
        assert_eq!(filter.threshold, 4.5);
    }

    #[test]
    fn test_two_character_operators_not_mis_split() {
        // ">=" must not parse as ">" followed by "=4.5"
        let filter = NumericFilter::parse(">=2").unwrap();
        assert_eq!(filter.comparison, Comparison::Gte);
        assert_eq!(filter.threshold, 2.0);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert_eq!(NumericFilter::parse(""), None);
        assert_eq!(NumericFilter::parse("abc"), None);
        assert_eq!(NumericFilter::parse(">="), None);
        assert_eq!(NumericFilter::parse("4.5.6"), None);
        assert_eq!(NumericFilter::parse("banana"), None);
        assert_eq!(NumericFilter::parse(">=abc"), None);
    }

    #[test]
    fn test_parse_rejects_sign_and_exponent() {
        assert_eq!(NumericFilter::parse("-4"), None);
        assert_eq!(NumericFilter::parse("+4"), None);
        assert_eq!(NumericFilter::parse("1e5"), None);
        assert_eq!(NumericFilter::parse("1,000"), None);
    }

    #[test]
    fn test_parse_requires_full_string_match() {
        assert_eq!(NumericFilter::parse("4.5 stars"), None);
        assert_eq!(NumericFilter::parse("rating >=4.5"), None);
        assert_eq!(NumericFilter::parse(">=4.5 "), None);
    }

    #[test]
    fn test_matches() {
        let gte = NumericFilter::new(Comparison::Gte, 4.5);
        assert!(gte.matches(4.5));
        assert!(gte.matches(4.6));
        assert!(!gte.matches(4.4));

        let lt = NumericFilter::new(Comparison::Lt, 400.0);
        assert!(lt.matches(389.0));
        assert!(!lt.matches(400.0));

        let eq = NumericFilter::new(Comparison::Eq, 3.0);
        assert!(eq.matches(3.0));
        assert!(!eq.matches(3.1));
    }
}
