//! Recipe assembly
//!
//! Turns a recipe prototype into a complete recipe: every ingredient is
//! resolved against the catalog, the base mix is analyzed, and the lines are
//! decorated with the catalog's ids, categories and preparations.

use thiserror::Error;
use tracing::{error, info};
use uuid::Uuid;

use crate::formulation::{analyze, AnalysisError};
use crate::models::{now_timestamp, IngredientMap, Recipe, RecipeIngredient, RecipePrototype};
use crate::naming::canonicalize_name;

/// Versioning is not implemented yet; every recipe is version 1.
pub const INITIAL_VERSION: u32 = 1;

/// Recipe assembly error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecipeError {
    #[error("Unknown ingredients: {}", .0.join(", "))]
    MissingIngredients(Vec<String>),

    #[error("Analysis failed: {0}")]
    Analysis(#[from] AnalysisError),
}

pub type RecipeResult<T> = Result<T, RecipeError>;

/// Assemble a new recipe from a prototype
pub fn assemble_recipe(prototype: RecipePrototype, catalog: &IngredientMap) -> RecipeResult<Recipe> {
    let canonical_name = canonicalize_name(&prototype.name);

    info!(recipe = %prototype.name, %canonical_name, "Assembling recipe");

    let missing = catalog.missing(prototype.ingredients.iter().map(|i| i.name.as_str()));
    if !missing.is_empty() {
        error!(
            recipe = %prototype.name,
            missing = %missing.join(", "),
            "Recipe references ingredients that do not exist"
        );
        return Err(RecipeError::MissingIngredients(missing));
    }

    info!(recipe = %prototype.name, "Analyzing recipe");
    let analysis = analyze(&prototype.ingredients, catalog)?;

    let RecipePrototype {
        name,
        subtitle,
        description,
        instructions,
        ingredients,
        estimated_mass,
        base,
    } = prototype;

    let ingredients = ingredients
        .into_iter()
        .map(|line| -> RecipeResult<RecipeIngredient> {
            let ingredient = catalog
                .get(&line.name)
                .ok_or_else(|| AnalysisError::UnknownIngredient {
                    name: line.name.clone(),
                })?;
            Ok(RecipeIngredient {
                ingredient_id: ingredient.id.clone(),
                name: line.name,
                quantity: line.quantity,
                unit: line.unit,
                category: ingredient.category,
                preparation: ingredient.preparation.clone(),
            })
        })
        .collect::<RecipeResult<Vec<_>>>()?;

    let recipe = Recipe {
        id: Uuid::now_v7().to_string(),
        canonical_name,
        version: INITIAL_VERSION,
        name,
        subtitle,
        description,
        instructions,
        ingredients,
        estimated_mass,
        base,
        analysis,
        created_at: now_timestamp(),
    };

    info!(
        recipe = %recipe.name,
        id = %recipe.id,
        total_mass = recipe.analysis.total_mass,
        "Assembled recipe"
    );

    Ok(recipe)
}
