//! In-memory reference store.
//!
//! Evaluates query specs over an `RwLock`-guarded vector: filter, stable
//! sort, skip/limit. Suitable for serving a seeded dataset and for
//! deterministic testing without an external store.

use std::cmp::Ordering;
use std::sync::RwLock;

use serde_json::Value;
use uuid::Uuid;

use crate::query::{QuerySpec, SortDirection};
use crate::schema::{Recipe, RecipeDraft};

use super::errors::{StoreError, StoreResult};
use super::{RecipeStore, SearchResult};

/// In-memory recipe store
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<Vec<Recipe>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, Vec<Recipe>>> {
        self.records
            .read()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, Vec<Recipe>>> {
        self.records
            .write()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))
    }

    /// Check a record against every predicate of the spec
    fn matches(recipe: &Recipe, spec: &QuerySpec) -> bool {
        if let Some(needle) = &spec.title {
            if !recipe
                .title
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }

        if let Some(cuisine) = &spec.cuisine {
            if recipe.cuisine.as_deref() != Some(cuisine.as_str()) {
                return false;
            }
        }

        if let Some(filter) = &spec.rating {
            match recipe.rating {
                Some(rating) if filter.matches(rating) => {}
                _ => return false,
            }
        }

        if let Some(filter) = &spec.total_time {
            match recipe.total_time {
                Some(minutes) if filter.matches(f64::from(minutes)) => {}
                _ => return false,
            }
        }

        if let Some(filter) = &spec.calories {
            // Derived predicate: records whose stored calories value
            // cannot be coerced to a number never match.
            match recipe.nutrients.get("calories").and_then(leading_number) {
                Some(calories) if filter.matches(calories) => {}
                _ => return false,
            }
        }

        true
    }

    /// Stable sort; ties keep insertion order, so results are
    /// deterministic across identical lookups.
    fn sort(recipes: &mut [Recipe], spec: &QuerySpec) {
        recipes.sort_by(|a, b| {
            let ordering = compare_field(a, b, &spec.sort.field);
            match spec.sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }
}

impl RecipeStore for MemoryStore {
    fn search(&self, spec: &QuerySpec) -> StoreResult<SearchResult> {
        let mut matches: Vec<Recipe> = {
            let records = self.read()?;
            records
                .iter()
                .filter(|r| Self::matches(r, spec))
                .cloned()
                .collect()
        };

        Self::sort(&mut matches, spec);

        let total = matches.len();
        let recipes = matches
            .into_iter()
            .skip(spec.skip())
            .take(spec.limit)
            .collect();

        Ok(SearchResult { total, recipes })
    }

    fn count(&self, spec: &QuerySpec) -> StoreResult<usize> {
        let records = self.read()?;
        Ok(records.iter().filter(|r| Self::matches(r, spec)).count())
    }

    fn get(&self, id: Uuid) -> StoreResult<Recipe> {
        let records = self.read()?;
        records
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    fn insert(&self, draft: RecipeDraft) -> StoreResult<Recipe> {
        let recipe = Recipe::from_draft(draft)?;

        let mut records = self.write()?;
        records.push(recipe.clone());

        Ok(recipe)
    }

    fn update(&self, id: Uuid, draft: RecipeDraft) -> StoreResult<Recipe> {
        let mut records = self.write()?;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound)?;

        record.apply_draft(draft)?;

        Ok(record.clone())
    }

    fn delete(&self, id: Uuid) -> StoreResult<()> {
        let mut records = self.write()?;
        let idx = records
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::NotFound)?;

        records.remove(idx);

        Ok(())
    }
}

/// Coerce a stored nutrient value to a number.
///
/// Plain numbers pass through; strings are split on the first whitespace
/// run and the leading token is parsed as a decimal (`"389 kcal"` → 389).
fn leading_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => s
            .split_whitespace()
            .next()?
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite()),
        _ => None,
    }
}

/// Compare two records on a named sort field.
///
/// Absent values sort before present ones; an unrecognized field name
/// compares equal, which leaves relative order unchanged.
fn compare_field(a: &Recipe, b: &Recipe, field: &str) -> Ordering {
    match field {
        "rating" => compare_optional_number(a.rating, b.rating),
        "title" => a.title.cmp(&b.title),
        "cuisine" => a.cuisine.cmp(&b.cuisine),
        "prep_time" => a.prep_time.cmp(&b.prep_time),
        "cook_time" => a.cook_time.cmp(&b.cook_time),
        "total_time" => a.total_time.cmp(&b.total_time),
        "created_at" => a.created_at.cmp(&b.created_at),
        _ => Ordering::Equal,
    }
}

fn compare_optional_number(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
    }
}
