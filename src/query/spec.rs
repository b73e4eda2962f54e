//! # Query Spec Builder
//!
//! Assembles a full query specification from raw HTTP query parameters.
//!
//! The builder never fails: unparsable or absent optional inputs are
//! omitted from the resulting spec, never surfaced as errors.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::filter::NumericFilter;

/// Default result page if `page` is absent or unparsable
pub const DEFAULT_PAGE: usize = 1;

/// Default page size if `limit` is absent or unparsable
pub const DEFAULT_LIMIT: usize = 10;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Sort key: field name plus direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub field: String,
    pub direction: SortDirection,
}

impl SortKey {
    /// Ascending sort on a field
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    /// Descending sort on a field
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }

    /// Parse a `<field>:<direction>` sort parameter.
    ///
    /// Only the exact direction `asc` sorts ascending; anything else,
    /// including a missing `:<direction>` part, sorts descending.
    fn parse(raw: &str) -> Self {
        match raw.split_once(':') {
            Some((field, "asc")) => Self::asc(field),
            Some((field, _)) => Self::desc(field),
            None => Self::desc(raw),
        }
    }
}

impl Default for SortKey {
    /// Default sort: rating descending
    fn default() -> Self {
        Self::desc("rating")
    }
}

/// The aggregate of filter predicates, sort order, and pagination derived
/// from one request.
///
/// Constructed fresh per request, consumed once by the store lookup, then
/// discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySpec {
    /// Case-insensitive substring match against the title field
    pub title: Option<String>,

    /// Exact match against the cuisine field
    pub cuisine: Option<String>,

    /// Numeric comparison against the rating field
    pub rating: Option<NumericFilter>,

    /// Numeric comparison against the total_time field
    pub total_time: Option<NumericFilter>,

    /// Derived numeric comparison against the stored `nutrients.calories`
    /// value, which may be a unit-suffixed string. Evaluation is a store
    /// capability; see `store::RecipeStore`.
    pub calories: Option<NumericFilter>,

    /// Sort key and direction
    pub sort: SortKey,

    /// Result page number, 1-based
    pub page: usize,

    /// Page size
    pub limit: usize,
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self {
            title: None,
            cuisine: None,
            rating: None,
            total_time: None,
            calories: None,
            sort: SortKey::default(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl QuerySpec {
    /// Build a spec from a mapping of raw query parameter names to values.
    ///
    /// Pure, stateless, single-pass. Unknown parameters are ignored;
    /// recognized parameters that fail to parse leave their field
    /// unconstrained (or at its default) rather than producing an error.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let mut spec = Self::default();

        for (key, value) in params {
            match key.as_str() {
                "page" => spec.page = parse_positive(value).unwrap_or(DEFAULT_PAGE),
                "limit" => spec.limit = parse_positive(value).unwrap_or(DEFAULT_LIMIT),
                "sort" => spec.sort = SortKey::parse(value),
                "title" => {
                    if !value.is_empty() {
                        spec.title = Some(value.clone());
                    }
                }
                "cuisine" => {
                    if !value.is_empty() {
                        spec.cuisine = Some(value.clone());
                    }
                }
                "rating" => spec.rating = NumericFilter::parse(value),
                "total_time" => spec.total_time = NumericFilter::parse(value),
                "calories" => spec.calories = NumericFilter::parse(value),
                _ => {}
            }
        }

        spec
    }

    /// Number of records to skip before the first returned one
    pub fn skip(&self) -> usize {
        (self.page - 1) * self.limit
    }
}

/// Parse a positive integer; `None` for anything else, including zero.
fn parse_positive(raw: &str) -> Option<usize> {
    raw.trim().parse().ok().filter(|n| *n > 0)
}
