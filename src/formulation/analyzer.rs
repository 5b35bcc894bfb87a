//! Recipe formulation analysis
//!
//! Reduces a recipe's ingredient lines and their compositions into a single
//! [`Analysis`] of the base mix.

use thiserror::Error;
use tracing::debug;

use super::{Composition, CompositionLookup};
use crate::models::{Analysis, RecipeIngredientSummary};

/// Analysis error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// The caller did not resolve every ingredient before analyzing
    #[error("No composition found for ingredient: {name}")]
    UnknownIngredient { name: String },
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Weighted contribution of an optional per-unit value
fn contribution(value: Option<f64>, quantity: f64) -> f64 {
    value.map_or(0.0, |v| v * quantity)
}

/// Analyze a recipe's base mix.
///
/// Lines whose ingredient has no data, or whose category is excluded from
/// analysis, contribute nothing (not even mass). Every name must resolve in
/// `compositions`; the first one that doesn't is returned as an error.
pub fn analyze<L>(usages: &[RecipeIngredientSummary], compositions: &L) -> AnalysisResult<Analysis>
where
    L: CompositionLookup + ?Sized,
{
    let mut analysis = Analysis::zero();

    // Only surfaced through the derived totals
    let mut other_fat = 0.0;
    let mut other_solids_nonfat = 0.0;

    for usage in usages {
        let composition = compositions
            .composition(&usage.name)
            .ok_or_else(|| AnalysisError::UnknownIngredient {
                name: usage.name.clone(),
            })?;

        let category = composition.category();
        let data = match composition.data() {
            Some(data) if !category.is_excluded_from_analysis() => data,
            _ => {
                debug!(
                    ingredient = %usage.name,
                    %category,
                    "Skipping ingredient as irrelevant to analysis"
                );
                continue;
            }
        };

        let quantity = usage.quantity;
        analysis.total_mass += quantity;

        analysis.pod += contribution(data.pod, quantity);
        analysis.pac += contribution(data.pac, quantity);
        analysis.milk_fat += contribution(data.milk_fat, quantity);
        analysis.milk_solids_nonfat += contribution(data.milk_solids_nonfat, quantity);
        analysis.water += contribution(data.water, quantity);
        analysis.sugars += contribution(data.sugars, quantity);
        analysis.stabilizers += contribution(data.stabilizers, quantity);

        other_fat += contribution(data.other_fat, quantity);
        other_solids_nonfat += contribution(data.other_solids_nonfat, quantity);
    }

    analysis.total_fat = other_fat + analysis.milk_fat;
    analysis.total_solids_nonfat = analysis.milk_solids_nonfat
        + other_solids_nonfat
        + analysis.sugars
        + analysis.stabilizers;
    analysis.total_solids = analysis.total_fat + analysis.total_solids_nonfat;

    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::models::{AnalyzableIngredient, IngredientCategory, IngredientData};
    use crate::test_support::{catalog, recipe_prototype};

    const EPSILON: f64 = 1e-5;

    fn line(name: &str, quantity: f64) -> RecipeIngredientSummary {
        RecipeIngredientSummary::new(name, quantity, Some("g"))
    }

    fn entry(category: IngredientCategory, data: Option<IngredientData>) -> AnalyzableIngredient {
        AnalyzableIngredient { category, data }
    }

    fn rich_data() -> IngredientData {
        IngredientData {
            pod: Some(0.5),
            pac: Some(0.7),
            milk_fat: Some(0.1),
            other_fat: Some(0.2),
            milk_solids_nonfat: Some(0.05),
            other_solids_nonfat: Some(0.15),
            water: Some(0.3),
            sugars: Some(0.12),
            stabilizers: Some(0.01),
        }
    }

    #[test]
    fn test_vanilla() {
        let recipe = recipe_prototype("vanilla");
        let analysis = analyze(&recipe.ingredients, &catalog()).unwrap();

        assert_abs_diff_eq!(analysis.total_fat, 139.68, epsilon = EPSILON);
        assert_abs_diff_eq!(analysis.milk_fat, 139.68, epsilon = EPSILON);
        assert_abs_diff_eq!(analysis.total_solids, 383.136, epsilon = EPSILON);
        assert_abs_diff_eq!(analysis.total_solids_nonfat, 243.456, epsilon = EPSILON);
        assert_abs_diff_eq!(analysis.milk_solids_nonfat, 120.456, epsilon = EPSILON);
        assert_abs_diff_eq!(analysis.water, 611.246, epsilon = EPSILON);
        assert_abs_diff_eq!(analysis.sugars, 120.0, epsilon = EPSILON);
        assert_abs_diff_eq!(analysis.total_mass, 1000.0, epsilon = EPSILON);
        assert_abs_diff_eq!(analysis.stabilizers, 1.5, epsilon = EPSILON);
        assert_eq!(analysis.pod.round(), 114.0);
        assert_eq!(analysis.pac.round(), 232.0);
    }

    // Butter Pecan includes a churned mix-in that must not count.
    #[test]
    fn test_butter_pecan() {
        let recipe = recipe_prototype("butter-pecan");
        let analysis = analyze(&recipe.ingredients, &catalog()).unwrap();

        assert_abs_diff_eq!(analysis.total_fat, 140.07, epsilon = EPSILON);
        assert_abs_diff_eq!(analysis.milk_fat, 136.62, epsilon = EPSILON);
        assert_abs_diff_eq!(analysis.total_solids, 386.688, epsilon = EPSILON);
        assert_abs_diff_eq!(analysis.total_solids_nonfat, 246.618, epsilon = EPSILON);
        assert_abs_diff_eq!(analysis.milk_solids_nonfat, 119.568, epsilon = EPSILON);
        assert_abs_diff_eq!(analysis.water, 608.689, epsilon = EPSILON);
        assert_abs_diff_eq!(analysis.sugars, 120.0, epsilon = EPSILON);
        assert_abs_diff_eq!(analysis.total_mass, 1000.0, epsilon = EPSILON);
        assert_abs_diff_eq!(analysis.stabilizers, 1.5, epsilon = EPSILON);
        assert_eq!(analysis.pod.round(), 114.0);
        assert_eq!(analysis.pac.round(), 232.0);
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        let compositions: HashMap<String, AnalyzableIngredient> = HashMap::new();
        let analysis = analyze(&[], &compositions).unwrap();
        assert_eq!(analysis, Analysis::zero());
    }

    #[test]
    fn test_unknown_ingredient_fails() {
        let mut compositions = HashMap::new();
        compositions.insert(
            "Sugar".to_string(),
            entry(IngredientCategory::Solids, Some(rich_data())),
        );

        let err = analyze(&[line("Sugar", 10.0), line("Saffron", 1.0)], &compositions).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::UnknownIngredient {
                name: "Saffron".to_string()
            }
        );
        assert_eq!(err.to_string(), "No composition found for ingredient: Saffron");
    }

    #[test]
    fn test_excluded_categories_contribute_nothing() {
        for category in [
            IngredientCategory::Steeping,
            IngredientCategory::Churning,
            IngredientCategory::Drawing,
        ] {
            let mut compositions = HashMap::new();
            compositions.insert("Mix-in".to_string(), entry(category, Some(rich_data())));

            let analysis = analyze(&[line("Mix-in", 250.0)], &compositions).unwrap();
            assert_eq!(analysis, Analysis::zero(), "category {category} was counted");
        }
    }

    #[test]
    fn test_ingredient_without_data_is_skipped() {
        let mut compositions = HashMap::new();
        compositions.insert("Mystery".to_string(), entry(IngredientCategory::Solids, None));
        compositions.insert(
            "Sugar".to_string(),
            entry(
                IngredientCategory::Solids,
                Some(IngredientData {
                    pod: Some(1.0),
                    pac: Some(1.0),
                    sugars: Some(1.0),
                    ..Default::default()
                }),
            ),
        );

        let analysis = analyze(&[line("Mystery", 40.0), line("Sugar", 60.0)], &compositions).unwrap();
        assert_eq!(analysis.total_mass, 60.0);
        assert_eq!(analysis.sugars, 60.0);
        assert_eq!(analysis.total_solids_nonfat, 60.0);
        assert_eq!(analysis.total_solids, 60.0);
        assert_eq!(analysis.total_fat, 0.0);
    }

    #[test]
    fn test_empty_data_still_counts_mass() {
        let mut compositions = HashMap::new();
        compositions.insert(
            "Ice".to_string(),
            entry(IngredientCategory::Other, Some(IngredientData::default())),
        );

        let analysis = analyze(&[line("Ice", 12.5)], &compositions).unwrap();
        assert_eq!(analysis.total_mass, 12.5);
        assert_eq!(analysis.total_solids, 0.0);
    }

    #[test]
    fn test_other_fat_and_solids_only_reach_derived_fields() {
        let mut compositions = HashMap::new();
        compositions.insert(
            "Egg Yolks".to_string(),
            entry(
                IngredientCategory::Other,
                Some(IngredientData {
                    other_fat: Some(0.23),
                    other_solids_nonfat: Some(0.27),
                    water: Some(0.5),
                    ..Default::default()
                }),
            ),
        );

        let analysis = analyze(&[line("Egg Yolks", 100.0)], &compositions).unwrap();
        assert_eq!(analysis.milk_fat, 0.0);
        assert_eq!(analysis.milk_solids_nonfat, 0.0);
        assert_abs_diff_eq!(analysis.total_fat, 23.0, epsilon = EPSILON);
        assert_abs_diff_eq!(analysis.total_solids_nonfat, 27.0, epsilon = EPSILON);
        assert_abs_diff_eq!(analysis.total_solids, 50.0, epsilon = EPSILON);
        assert_abs_diff_eq!(analysis.water, 50.0, epsilon = EPSILON);
    }

    #[test]
    fn test_finishing_ingredients_are_counted() {
        let mut compositions = HashMap::new();
        compositions.insert(
            "Vanilla Extract".to_string(),
            entry(
                IngredientCategory::Finishing,
                Some(IngredientData {
                    water: Some(0.526),
                    ..Default::default()
                }),
            ),
        );

        let analysis = analyze(&[line("Vanilla Extract", 6.0)], &compositions).unwrap();
        assert_eq!(analysis.total_mass, 6.0);
        assert_abs_diff_eq!(analysis.water, 3.156, epsilon = EPSILON);
    }

    #[test]
    fn test_repeated_lines_accumulate() {
        let mut compositions = HashMap::new();
        compositions.insert(
            "Sugar".to_string(),
            entry(
                IngredientCategory::Solids,
                Some(IngredientData {
                    sugars: Some(1.0),
                    ..Default::default()
                }),
            ),
        );

        let analysis = analyze(&[line("Sugar", 10.0), line("Sugar", 15.0)], &compositions).unwrap();
        assert_eq!(analysis.total_mass, 25.0);
        assert_eq!(analysis.sugars, 25.0);
    }

    #[test]
    fn test_is_deterministic() {
        let recipe = recipe_prototype("butter-pecan");
        let catalog = catalog();
        let first = analyze(&recipe.ingredients, &catalog).unwrap();
        for _ in 0..10 {
            assert_eq!(analyze(&recipe.ingredients, &catalog).unwrap(), first);
        }
    }

    fn arb_ratio() -> impl Strategy<Value = Option<f64>> {
        prop::option::of(0.0f64..=1.0)
    }

    fn arb_data() -> impl Strategy<Value = IngredientData> {
        (
            (prop::option::of(-2.0f64..=2.0), prop::option::of(-5.0f64..=5.0), arb_ratio()),
            (arb_ratio(), arb_ratio(), arb_ratio()),
            (arb_ratio(), arb_ratio(), arb_ratio()),
        )
            .prop_map(
                |(
                    (pod, pac, milk_fat),
                    (other_fat, milk_solids_nonfat, other_solids_nonfat),
                    (water, sugars, stabilizers),
                )| IngredientData {
                    pod,
                    pac,
                    milk_fat,
                    other_fat,
                    milk_solids_nonfat,
                    other_solids_nonfat,
                    water,
                    sugars,
                    stabilizers,
                },
            )
    }

    fn arb_category() -> impl Strategy<Value = IngredientCategory> {
        prop::sample::select(IngredientCategory::ALL.to_vec())
    }

    fn arb_entry() -> impl Strategy<Value = AnalyzableIngredient> {
        (arb_category(), prop::option::of(arb_data()))
            .prop_map(|(category, data)| AnalyzableIngredient { category, data })
    }

    /// A composition table plus recipe lines that only reference it
    fn arb_recipe() -> impl Strategy<Value = (HashMap<String, AnalyzableIngredient>, Vec<RecipeIngredientSummary>)> {
        prop::collection::vec(arb_entry(), 1..8).prop_flat_map(|entries| {
            let count = entries.len();
            let compositions: HashMap<String, AnalyzableIngredient> = entries
                .into_iter()
                .enumerate()
                .map(|(i, e)| (format!("ingredient-{i}"), e))
                .collect();
            let lines = prop::collection::vec((0..count, 0.001f64..=1000.0), 0..20).prop_map(
                |picks| {
                    picks
                        .into_iter()
                        .map(|(i, quantity)| line(&format!("ingredient-{i}"), quantity))
                        .collect::<Vec<_>>()
                },
            );
            (Just(compositions), lines)
        })
    }

    proptest! {
        #[test]
        fn proptest_derived_fields_are_exact_sums((compositions, lines) in arb_recipe()) {
            let analysis = analyze(&lines, &compositions).unwrap();

            let mut other_fat = 0.0;
            let mut other_solids_nonfat = 0.0;
            for l in &lines {
                let e = &compositions[&l.name];
                if e.category.is_excluded_from_analysis() {
                    continue;
                }
                if let Some(data) = &e.data {
                    other_fat += contribution(data.other_fat, l.quantity);
                    other_solids_nonfat += contribution(data.other_solids_nonfat, l.quantity);
                }
            }

            prop_assert_eq!(analysis.total_fat, other_fat + analysis.milk_fat);
            prop_assert_eq!(
                analysis.total_solids_nonfat,
                analysis.milk_solids_nonfat + other_solids_nonfat + analysis.sugars + analysis.stabilizers
            );
            prop_assert_eq!(analysis.total_solids, analysis.total_fat + analysis.total_solids_nonfat);
        }

        #[test]
        fn proptest_mass_counts_only_analyzable_lines((compositions, lines) in arb_recipe()) {
            let analysis = analyze(&lines, &compositions).unwrap();

            let mut expected = 0.0;
            for l in &lines {
                let e = &compositions[&l.name];
                if e.data.is_some() && !e.category.is_excluded_from_analysis() {
                    expected += l.quantity;
                }
            }
            prop_assert_eq!(analysis.total_mass, expected);
        }

        #[test]
        fn proptest_excluded_lines_change_nothing(
            (compositions, lines) in arb_recipe(),
            data in arb_data(),
            quantity in 0.001f64..=1000.0,
        ) {
            let base = analyze(&lines, &compositions).unwrap();

            let mut with_mix_in = compositions.clone();
            with_mix_in.insert(
                "Mix-in".to_string(),
                AnalyzableIngredient { category: IngredientCategory::Churning, data: Some(data) },
            );
            let mut extended = lines.clone();
            extended.push(line("Mix-in", quantity));

            prop_assert_eq!(analyze(&extended, &with_mix_in).unwrap(), base);
        }

        #[test]
        fn proptest_repeat_calls_agree((compositions, lines) in arb_recipe()) {
            let first = analyze(&lines, &compositions).unwrap();
            let second = analyze(&lines, &compositions).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
