//! Query filter translation invariants.
//!
//! The translator never fails: every degenerate input resolves to a valid,
//! possibly less-constrained spec.

use std::collections::HashMap;

use ladle::query::{Comparison, NumericFilter, QuerySpec, SortKey};

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn operator_strings_parse_to_matching_predicates() {
    let cases = [
        (">4", Comparison::Gt, 4.0),
        ("<4", Comparison::Lt, 4.0),
        (">=4.5", Comparison::Gte, 4.5),
        ("<=120", Comparison::Lte, 120.0),
        ("=3.0", Comparison::Eq, 3.0),
    ];

    for (raw, comparison, threshold) in cases {
        let filter = NumericFilter::parse(raw).unwrap();
        assert_eq!(filter.comparison, comparison, "operator of {raw:?}");
        assert_eq!(filter.threshold, threshold, "threshold of {raw:?}");
    }
}

#[test]
fn bare_numbers_parse_to_equality() {
    let filter = NumericFilter::parse("400").unwrap();
    assert_eq!(filter.comparison, Comparison::Eq);
    assert_eq!(filter.threshold, 400.0);
}

#[test]
fn malformed_strings_parse_to_no_predicate() {
    for raw in ["", "abc", ">=", "4.5.6", "--4", "4,5", " 4 .5"] {
        assert_eq!(NumericFilter::parse(raw), None, "input {raw:?}");
    }
}

#[test]
fn full_example_query() {
    let spec = QuerySpec::from_params(&params(&[
        ("rating", ">=4.5"),
        ("title", "pie"),
        ("page", "2"),
        ("limit", "5"),
    ]));

    assert_eq!(spec.rating, Some(NumericFilter::parse(">=4.5").unwrap()));
    assert_eq!(spec.title.as_deref(), Some("pie"));
    assert_eq!(spec.page, 2);
    assert_eq!(spec.limit, 5);
    assert_eq!(spec.sort, SortKey::desc("rating"));
}

#[test]
fn sort_only_query_has_no_filters() {
    let spec = QuerySpec::from_params(&params(&[("sort", "title:asc")]));

    assert_eq!(spec.sort, SortKey::asc("title"));
    assert_eq!(spec.title, None);
    assert_eq!(spec.cuisine, None);
    assert_eq!(spec.rating, None);
    assert_eq!(spec.total_time, None);
    assert_eq!(spec.calories, None);
}

#[test]
fn calories_filter_is_attached() {
    let spec = QuerySpec::from_params(&params(&[("calories", "<=400")]));
    assert_eq!(spec.calories, Some(NumericFilter::parse("<=400").unwrap()));
}

#[test]
fn unparsable_rating_leaves_field_unconstrained() {
    let spec = QuerySpec::from_params(&params(&[("rating", "banana")]));
    assert_eq!(spec.rating, None);
    // Everything else keeps its defaults; no error surfaced anywhere.
    assert_eq!(spec.page, 1);
    assert_eq!(spec.limit, 10);
}

#[test]
fn empty_input_yields_defaults() {
    let spec = QuerySpec::from_params(&HashMap::new());

    assert_eq!(spec.page, 1);
    assert_eq!(spec.limit, 10);
    assert_eq!(spec.sort, SortKey::desc("rating"));
    assert_eq!(spec.title, None);
    assert_eq!(spec.rating, None);
}

#[test]
fn building_twice_yields_value_equal_specs() {
    let input = params(&[
        ("title", "Pie"),
        ("cuisine", "American"),
        ("rating", ">=4"),
        ("total_time", "<90"),
        ("calories", "<=400"),
        ("sort", "total_time:asc"),
        ("page", "2"),
        ("limit", "25"),
    ]);

    assert_eq!(
        QuerySpec::from_params(&input),
        QuerySpec::from_params(&input)
    );
}
