//! Shared fixtures for unit tests

use crate::catalog::{parse_catalog, parse_recipe_prototype};
use crate::models::{IngredientMap, RecipePrototype};

/// The sample ingredient catalog shipped under `data/`
pub fn catalog() -> IngredientMap {
    parse_catalog(include_str!("../data/ingredients.json")).expect("sample catalog")
}

/// A sample recipe by canonical name
pub fn recipe_prototype(canonical_name: &str) -> RecipePrototype {
    let json = match canonical_name {
        "vanilla" => include_str!("../data/recipes/vanilla.json"),
        "butter-pecan" => include_str!("../data/recipes/butter-pecan.json"),
        other => panic!("no sample recipe named {other}"),
    };
    parse_recipe_prototype(json).expect("sample recipe")
}
