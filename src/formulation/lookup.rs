//! Composition lookup
//!
//! The analyzer only needs a category and optional data for each ingredient
//! name, so it works against these traits rather than a concrete map.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::models::{
    AnalyzableIngredient, Ingredient, IngredientCategory, IngredientData, IngredientMap,
};

/// Anything that describes an ingredient's formulation
pub trait Composition {
    fn category(&self) -> IngredientCategory;
    fn data(&self) -> Option<&IngredientData>;
}

/// Name-keyed source of compositions
pub trait CompositionLookup {
    type Entry: Composition;

    fn composition(&self, name: &str) -> Option<&Self::Entry>;
}

impl Composition for AnalyzableIngredient {
    fn category(&self) -> IngredientCategory {
        self.category
    }

    fn data(&self) -> Option<&IngredientData> {
        self.data.as_ref()
    }
}

impl Composition for Ingredient {
    fn category(&self) -> IngredientCategory {
        self.category
    }

    fn data(&self) -> Option<&IngredientData> {
        self.data.as_ref()
    }
}

impl<C: Composition> Composition for &C {
    fn category(&self) -> IngredientCategory {
        (**self).category()
    }

    fn data(&self) -> Option<&IngredientData> {
        (**self).data()
    }
}

impl<C: Composition, S: BuildHasher> CompositionLookup for HashMap<String, C, S> {
    type Entry = C;

    fn composition(&self, name: &str) -> Option<&C> {
        self.get(name)
    }
}

impl<C: Composition> CompositionLookup for BTreeMap<String, C> {
    type Entry = C;

    fn composition(&self, name: &str) -> Option<&C> {
        self.get(name)
    }
}

impl CompositionLookup for IngredientMap {
    type Entry = Ingredient;

    fn composition(&self, name: &str) -> Option<&Ingredient> {
        self.get(name)
    }
}
