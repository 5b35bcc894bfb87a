//! Formulation analysis record
//!
//! Attached to every recipe and recomputed in full whenever a recipe is built.

use serde::{Deserialize, Serialize};

/// Aggregate composition of a recipe's base mix
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub total_fat: f64,
    pub milk_fat: f64,
    pub total_solids: f64,
    pub total_solids_nonfat: f64,
    pub milk_solids_nonfat: f64,
    pub water: f64,
    pub sugars: f64,
    pub total_mass: f64,
    pub pod: f64,
    pub pac: f64,
    pub stabilizers: f64,
}

impl Analysis {
    /// Create a new Analysis with all zeros
    pub fn zero() -> Self {
        Self::default()
    }
}
