//! Data models
//!
//! Rust structs for ingredients, recipes and their analysis, serialized with
//! the camelCase field names the recipe API exposes.

mod analysis;
mod ingredient;
mod recipe;

pub use analysis::Analysis;
pub use ingredient::{
    AnalyzableIngredient, Ingredient, IngredientCategory, IngredientData, IngredientMap,
    IngredientPrototype, Preparation, EXCLUDED_CATEGORIES,
};
pub(crate) use ingredient::now_timestamp;
pub use recipe::{
    Recipe, RecipeCollection, RecipeIngredient, RecipeIngredientSummary, RecipePrototype,
    RecipeSummary,
};
