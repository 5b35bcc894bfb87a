//! Ingredient catalog and recipe files
//!
//! Loads the JSON files the CLI works from. A catalog is a JSON array of
//! ingredients; entries without an `id` are treated as new and stamped.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::models::{now_timestamp, Ingredient, IngredientMap, IngredientPrototype, RecipePrototype};

/// Catalog loading error types
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Ingredient already exists with name: {name}")]
    DuplicateIngredient { name: String },
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// A catalog entry, either already stored or a bare prototype
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogEntry {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(flatten)]
    prototype: IngredientPrototype,
}

impl CatalogEntry {
    fn into_ingredient(self) -> Ingredient {
        match self.id {
            Some(id) => {
                let created_at = self.created_at.unwrap_or_else(now_timestamp);
                Ingredient::with_identity(self.prototype, id, created_at)
            }
            None => {
                debug!(ingredient = %self.prototype.name, "Assigning id to new ingredient");
                Ingredient::from_prototype(self.prototype)
            }
        }
    }
}

/// Parse a catalog from JSON text. Ingredient names must be unique.
pub fn parse_catalog(json: &str) -> CatalogResult<IngredientMap> {
    let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;

    let mut catalog = IngredientMap::new();
    for entry in entries {
        if catalog.contains(&entry.prototype.name) {
            error!(ingredient = %entry.prototype.name, "Duplicate ingredient in catalog");
            return Err(CatalogError::DuplicateIngredient {
                name: entry.prototype.name,
            });
        }
        catalog.insert(entry.into_ingredient());
    }

    Ok(catalog)
}

/// Parse a recipe prototype from JSON text
pub fn parse_recipe_prototype(json: &str) -> CatalogResult<RecipePrototype> {
    Ok(serde_json::from_str(json)?)
}

fn read(path: &Path) -> CatalogResult<String> {
    fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a catalog file
pub fn load_catalog(path: &Path) -> CatalogResult<IngredientMap> {
    let catalog = parse_catalog(&read(path)?)?;
    info!(path = %path.display(), count = catalog.len(), "Loaded ingredient catalog");
    Ok(catalog)
}

/// Load a recipe prototype file
pub fn load_recipe_prototype(path: &Path) -> CatalogResult<RecipePrototype> {
    let prototype = parse_recipe_prototype(&read(path)?)?;
    info!(path = %path.display(), recipe = %prototype.name, "Loaded recipe");
    Ok(prototype)
}
