//! Scoops Library
//!
//! Ice cream recipe models and base mix formulation analysis.

pub mod build_info;
pub mod catalog;
pub mod config;
pub mod formulation;
pub mod models;
pub mod naming;
pub mod recipes;

#[cfg(test)]
mod test_support;
