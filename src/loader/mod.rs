//! # Bulk Dataset Loader
//!
//! Reads a JSON array of raw recipe records and sanitizes each one into a
//! draft the store will accept. Source datasets are messy: numeric fields
//! may arrive as strings, NaN artifacts, or nulls, and those all collapse
//! to "absent" here so the stored document never violates its numeric
//! invariant. Records without a usable title are skipped and counted.

pub mod errors;

pub use errors::{LoaderError, LoaderResult};

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::schema::RecipeDraft;

/// Outcome of reading a dataset
#[derive(Debug)]
pub struct LoadOutcome {
    /// Sanitized drafts, in file order
    pub drafts: Vec<RecipeDraft>,

    /// Records skipped for lacking a usable title
    pub skipped: usize,
}

impl LoadOutcome {
    /// Number of records that survived sanitization
    pub fn loaded(&self) -> usize {
        self.drafts.len()
    }
}

/// Read and sanitize a dataset file.
///
/// # Errors
///
/// Returns `LoaderError` only for an unreadable file, invalid JSON, or a
/// non-array root. Individual malformed records are skipped, not errors.
pub fn read_dataset(path: &Path) -> LoaderResult<LoadOutcome> {
    let content = fs::read_to_string(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let root: Value = serde_json::from_str(&content)?;
    let records = root.as_array().ok_or(LoaderError::NotAnArray)?;

    let mut drafts = Vec::with_capacity(records.len());
    let mut skipped = 0;

    for record in records {
        match sanitize(record) {
            Some(draft) => drafts.push(draft),
            None => skipped += 1,
        }
    }

    Ok(LoadOutcome { drafts, skipped })
}

/// Sanitize one raw record into a draft; `None` if it has no usable title.
fn sanitize(record: &Value) -> Option<RecipeDraft> {
    let obj = record.as_object()?;

    let title = obj.get("title")?.as_str()?.trim();
    if title.is_empty() {
        return None;
    }

    Some(RecipeDraft {
        title: title.to_string(),
        cuisine: text_field(obj, "cuisine"),
        rating: finite_number(obj, "rating"),
        prep_time: minutes(obj, "prep_time"),
        cook_time: minutes(obj, "cook_time"),
        total_time: minutes(obj, "total_time"),
        description: text_field(obj, "description"),
        nutrients: obj
            .get("nutrients")
            .and_then(Value::as_object)
            .map(|m| m.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            .unwrap_or_default(),
        serves: text_field(obj, "serves"),
        ingredients: text_list(obj, "ingredients"),
        instructions: text_list(obj, "instructions"),
    })
}

/// Optional text field; non-strings and blanks collapse to absent
fn text_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)?
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Numeric field accepted only as a finite JSON number. Strings ("4.5",
/// "NaN") and nulls collapse to absent rather than failing the record.
fn finite_number(obj: &Map<String, Value>, key: &str) -> Option<f64> {
    obj.get(key)?.as_f64().filter(|f| f.is_finite())
}

/// Non-negative whole minutes; anything else collapses to absent
fn minutes(obj: &Map<String, Value>, key: &str) -> Option<u32> {
    let n = obj.get(key)?.as_f64()?;
    if n.is_finite() && n >= 0.0 && n <= f64::from(u32::MAX) {
        Some(n as u32)
    } else {
        None
    }
}

/// Ordered list of strings; non-string elements are dropped
fn text_list(obj: &Map<String, Value>, key: &str) -> Vec<String> {
    obj.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
