//! Recipe document model.
//!
//! Numeric fields are either valid finite numbers or absent. Never a
//! non-numeric string, never NaN. `nutrients` is the one open-ended part
//! of the document: values there may be plain numbers or numeric strings
//! with a trailing unit token (e.g. `"389 kcal"`).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::errors::{SchemaError, SchemaResult};

/// A stored recipe document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Record identifier, assigned at insert, immutable
    pub id: Uuid,

    /// Required title
    pub title: String,

    #[serde(default)]
    pub cuisine: Option<String>,

    /// Decimal rating; finite when present
    #[serde(default)]
    pub rating: Option<f64>,

    /// Preparation time in minutes
    #[serde(default)]
    pub prep_time: Option<u32>,

    /// Cooking time in minutes
    #[serde(default)]
    pub cook_time: Option<u32>,

    /// Total time in minutes
    #[serde(default)]
    pub total_time: Option<u32>,

    #[serde(default)]
    pub description: Option<String>,

    /// Nutrient name to value; values may be numbers or unit-suffixed
    /// strings. Ordered map for stable serialization.
    #[serde(default)]
    pub nutrients: BTreeMap<String, Value>,

    #[serde(default)]
    pub serves: Option<String>,

    #[serde(default)]
    pub ingredients: Vec<String>,

    #[serde(default)]
    pub instructions: Vec<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-writable recipe fields, used as insert and update payloads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub title: String,

    #[serde(default)]
    pub cuisine: Option<String>,

    #[serde(default)]
    pub rating: Option<f64>,

    #[serde(default)]
    pub prep_time: Option<u32>,

    #[serde(default)]
    pub cook_time: Option<u32>,

    #[serde(default)]
    pub total_time: Option<u32>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub nutrients: BTreeMap<String, Value>,

    #[serde(default)]
    pub serves: Option<String>,

    #[serde(default)]
    pub ingredients: Vec<String>,

    #[serde(default)]
    pub instructions: Vec<String>,
}

impl RecipeDraft {
    /// Validate the draft against the document rules.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError` if the title is missing or blank, or a
    /// numeric field holds a non-finite value.
    pub fn validate(&self) -> SchemaResult<()> {
        if self.title.trim().is_empty() {
            return Err(SchemaError::MissingField("title"));
        }

        if let Some(rating) = self.rating {
            if !rating.is_finite() {
                return Err(SchemaError::NotFinite("rating"));
            }
        }

        Ok(())
    }
}

impl Recipe {
    /// Materialize a validated draft into a stored recipe.
    ///
    /// Assigns a fresh identifier and creation/update timestamps.
    pub fn from_draft(draft: RecipeDraft) -> SchemaResult<Self> {
        draft.validate()?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            title: draft.title,
            cuisine: draft.cuisine,
            rating: draft.rating,
            prep_time: draft.prep_time,
            cook_time: draft.cook_time,
            total_time: draft.total_time,
            description: draft.description,
            nutrients: draft.nutrients,
            serves: draft.serves,
            ingredients: draft.ingredients,
            instructions: draft.instructions,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace the writable fields with a validated draft.
    ///
    /// Keeps `id` and `created_at`; refreshes `updated_at`.
    pub fn apply_draft(&mut self, draft: RecipeDraft) -> SchemaResult<()> {
        draft.validate()?;

        self.title = draft.title;
        self.cuisine = draft.cuisine;
        self.rating = draft.rating;
        self.prep_time = draft.prep_time;
        self.cook_time = draft.cook_time;
        self.total_time = draft.total_time;
        self.description = draft.description;
        self.nutrients = draft.nutrients;
        self.serves = draft.serves;
        self.ingredients = draft.ingredients;
        self.instructions = draft.instructions;
        self.updated_at = Utc::now();

        Ok(())
    }
}
