//! Ingredient model
//!
//! Ingredients carry the compositional data the formulation analysis reads,
//! plus an optional preparation for ingredients that are themselves made
//! from other ingredients.

use std::collections::HashMap;
use std::fmt;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::RecipeIngredientSummary;

/// Categories an ingredient can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientCategory {
    Solids,
    Dairy,
    Other,
    /// Infused into the mix and strained out
    Steeping,
    /// Added after cooking, once the mix has cooled
    Finishing,
    /// Mixed in while churning
    Churning,
    /// Layered in while drawing from the machine
    Drawing,
}

/// Categories that never count toward the base mix analysis.
pub const EXCLUDED_CATEGORIES: [IngredientCategory; 3] = [
    IngredientCategory::Steeping,
    IngredientCategory::Churning,
    IngredientCategory::Drawing,
];

impl IngredientCategory {
    pub const ALL: [IngredientCategory; 7] = [
        IngredientCategory::Solids,
        IngredientCategory::Dairy,
        IngredientCategory::Other,
        IngredientCategory::Steeping,
        IngredientCategory::Finishing,
        IngredientCategory::Churning,
        IngredientCategory::Drawing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IngredientCategory::Solids => "solids",
            IngredientCategory::Dairy => "dairy",
            IngredientCategory::Other => "other",
            IngredientCategory::Steeping => "steeping",
            IngredientCategory::Finishing => "finishing",
            IngredientCategory::Churning => "churning",
            IngredientCategory::Drawing => "drawing",
        }
    }

    /// Whether ingredients of this category are left out of the analysis
    pub fn is_excluded_from_analysis(&self) -> bool {
        EXCLUDED_CATEGORIES.contains(self)
    }
}

impl fmt::Display for IngredientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-unit compositional data.
///
/// Every field is a ratio (or, for `pod`/`pac`, an index) applied per unit of
/// quantity. Absent fields contribute nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pac: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milk_fat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_fat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milk_solids_nonfat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_solids_nonfat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugars: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stabilizers: Option<f64>,
}

/// Instructions for making an ingredient (or recipe) from other ingredients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preparation {
    pub description: String,
    pub instructions: Vec<String>,
    pub ingredients: Vec<RecipeIngredientSummary>,
}

/// The parts of an ingredient the analysis needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzableIngredient {
    pub category: IngredientCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<IngredientData>,
}

/// Data for creating a new ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientPrototype {
    pub name: String,
    pub description: String,
    pub category: IngredientCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<IngredientData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preparation: Option<Preparation>,
}

/// A stored ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: IngredientCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<IngredientData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preparation: Option<Preparation>,
    pub created_at: String,
}

impl Ingredient {
    /// Stamp a prototype with a fresh id and creation time
    pub fn from_prototype(prototype: IngredientPrototype) -> Self {
        Self::with_identity(prototype, Uuid::now_v7().to_string(), now_timestamp())
    }

    pub fn with_identity(prototype: IngredientPrototype, id: String, created_at: String) -> Self {
        let IngredientPrototype {
            name,
            description,
            category,
            data,
            preparation,
        } = prototype;

        Self {
            id,
            name,
            description,
            category,
            data,
            preparation,
            created_at,
        }
    }
}

/// Ingredients keyed by name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientMap {
    ingredients: HashMap<String, Ingredient>,
}

impl IngredientMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from ingredients. A later ingredient with the same name
    /// replaces an earlier one; catalogs read from files reject duplicates
    /// instead (see `catalog::parse_catalog`).
    pub fn from_ingredients<I>(ingredients: I) -> Self
    where
        I: IntoIterator<Item = Ingredient>,
    {
        ingredients.into_iter().collect()
    }

    pub fn insert(&mut self, ingredient: Ingredient) -> Option<Ingredient> {
        self.ingredients.insert(ingredient.name.clone(), ingredient)
    }

    pub fn get(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ingredients.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Names not present in the map, in the order given. Duplicates are
    /// reported once.
    pub fn missing<'a, I>(&self, names: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut missing: Vec<String> = Vec::new();
        for name in names {
            if !self.contains(name) && !missing.iter().any(|m| m == name) {
                missing.push(name.to_string());
            }
        }
        missing
    }
}

impl FromIterator<Ingredient> for IngredientMap {
    fn from_iter<T: IntoIterator<Item = Ingredient>>(iter: T) -> Self {
        let mut map = IngredientMap::new();
        for ingredient in iter {
            map.insert(ingredient);
        }
        map
    }
}

/// Current UTC time in the `2025-03-16T03:06:22.133Z` form
pub(crate) fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
