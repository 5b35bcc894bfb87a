//! Formulation module
//!
//! Base mix analysis of ice cream recipes.

pub mod analyzer;
pub mod lookup;

pub use analyzer::{analyze, AnalysisError, AnalysisResult};
pub use lookup::{Composition, CompositionLookup};
