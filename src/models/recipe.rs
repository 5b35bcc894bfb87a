//! Recipe model
//!
//! Recipes name their ingredients; a stored recipe additionally carries the
//! decorated ingredient list and its formulation analysis.

use serde::{Deserialize, Serialize};

use super::{Analysis, IngredientCategory, Preparation};

/// One line of a recipe: an ingredient referenced by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredientSummary {
    pub name: String,
    pub quantity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl RecipeIngredientSummary {
    pub fn new(name: impl Into<String>, quantity: f64, unit: Option<&str>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.map(str::to_string),
        }
    }
}

/// A recipe line decorated with the ingredient it refers to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredient {
    pub ingredient_id: String,
    pub name: String,
    pub quantity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub category: IngredientCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preparation: Option<Preparation>,
}

/// Data for creating a new recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipePrototype {
    pub name: String,
    pub subtitle: String,
    pub description: String,
    pub instructions: Vec<String>,
    pub ingredients: Vec<RecipeIngredientSummary>,
    pub estimated_mass: u32,
    pub base: String,
}

/// A fully assembled recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub canonical_name: String,
    pub version: u32,
    pub name: String,
    pub subtitle: String,
    pub description: String,
    pub instructions: Vec<String>,
    pub ingredients: Vec<RecipeIngredient>,
    pub estimated_mass: u32,
    pub base: String,
    pub analysis: Analysis,
    pub created_at: String,
}

/// Recipe summary for listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: String,
    pub name: String,
    pub subtitle: String,
    pub canonical_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeCollection {
    pub recipes: Vec<RecipeSummary>,
}

impl Recipe {
    pub fn summary(&self) -> RecipeSummary {
        RecipeSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            subtitle: self.subtitle.clone(),
            canonical_name: self.canonical_name.clone(),
        }
    }
}

impl RecipeCollection {
    pub fn from_recipes<'a, I>(recipes: I) -> Self
    where
        I: IntoIterator<Item = &'a Recipe>,
    {
        Self {
            recipes: recipes.into_iter().map(Recipe::summary).collect(),
        }
    }
}
