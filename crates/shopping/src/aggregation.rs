use std::collections::HashMap;

use forkplan_shared::{
    normalize_name,
    recipe::RecipeIngredient,
    shopping::{RecipeRef, ShoppingItem},
};

use crate::{categorization::categorize, units};

/// A recipe as seen by the aggregator.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingRecipe {
    pub id: String,
    pub name: String,
    pub ingredients: Vec<RecipeIngredient>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AggregationError {
    #[error("invalid ingredient '{item}' in recipe '{recipe_name}': {reason}")]
    InvalidIngredientData {
        recipe_id: String,
        recipe_name: String,
        item: String,
        reason: String,
    },

    #[error("cannot add {unit} of '{ingredient}' from recipe '{recipe_name}' to {existing_unit}")]
    UnitMismatch {
        recipe_id: String,
        recipe_name: String,
        ingredient: String,
        unit: String,
        existing_unit: String,
    },
}

/// Result of a lenient run: the list plus every ingredient that was skipped.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Aggregation {
    pub items: Vec<ShoppingItem>,
    pub rejected: Vec<AggregationError>,
}

/// Merges the ingredients of `recipes` into one list keyed by normalized name.
///
/// Items keep first-insertion order. Ingredients whose key is in
/// `pantry_exclusions` leave no trace. Aborts on the first rejected ingredient.
pub fn generate(
    recipes: &[ShoppingRecipe],
    pantry_exclusions: &[String],
) -> Result<Vec<ShoppingItem>, AggregationError> {
    let mut aggregator = Aggregator::new(pantry_exclusions);

    for recipe in recipes {
        for ingredient in &recipe.ingredients {
            aggregator.add(recipe, ingredient)?;
        }
    }

    Ok(aggregator.items)
}

/// Same as [`generate`] but skips rejected ingredients instead of aborting.
pub fn generate_lenient(recipes: &[ShoppingRecipe], pantry_exclusions: &[String]) -> Aggregation {
    let mut aggregator = Aggregator::new(pantry_exclusions);
    let mut rejected = vec![];

    for recipe in recipes {
        for ingredient in &recipe.ingredients {
            if let Err(err) = aggregator.add(recipe, ingredient) {
                tracing::warn!(recipe_id = %recipe.id, "skipping ingredient: {err}");
                rejected.push(err);
            }
        }
    }

    Aggregation {
        items: aggregator.items,
        rejected,
    }
}

struct Aggregator {
    exclusions: Vec<String>,
    items: Vec<ShoppingItem>,
    index: HashMap<String, usize>,
}

impl Aggregator {
    fn new(pantry_exclusions: &[String]) -> Self {
        Self {
            exclusions: pantry_exclusions.iter().map(|e| normalize_name(e)).collect(),
            items: vec![],
            index: HashMap::new(),
        }
    }

    fn add(
        &mut self,
        recipe: &ShoppingRecipe,
        ingredient: &RecipeIngredient,
    ) -> Result<(), AggregationError> {
        let key = ingredient.key();
        if self.exclusions.contains(&key) {
            return Ok(());
        }

        if let Some(reason) = ingredient.defect() {
            return Err(AggregationError::InvalidIngredientData {
                recipe_id: recipe.id.to_owned(),
                recipe_name: recipe.name.to_owned(),
                item: ingredient.item.to_owned(),
                reason: reason.to_owned(),
            });
        }

        let reference = RecipeRef {
            recipe_id: recipe.id.to_owned(),
            recipe_name: recipe.name.to_owned(),
        };

        let Some(position) = self.index.get(&key).copied() else {
            self.index.insert(key.to_owned(), self.items.len());
            self.items.push(ShoppingItem {
                category: categorize(&key),
                ingredient: key,
                quantity: ingredient.quantity,
                unit: ingredient.unit.to_owned(),
                recipe_refs: vec![reference],
                notes: None,
                obtained: false,
            });

            return Ok(());
        };

        let item = &mut self.items[position];
        let Some(quantity) = units::convert(ingredient.quantity, &ingredient.unit, &item.unit)
        else {
            return Err(AggregationError::UnitMismatch {
                recipe_id: recipe.id.to_owned(),
                recipe_name: recipe.name.to_owned(),
                ingredient: key,
                unit: ingredient.unit.to_owned(),
                existing_unit: item.unit.to_owned(),
            });
        };

        item.quantity += quantity;
        item.recipe_refs.push(reference);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use forkplan_shared::shopping::Category;

    use super::*;

    fn recipe(id: &str, name: &str, ingredients: &[(&str, f64, &str)]) -> ShoppingRecipe {
        ShoppingRecipe {
            id: id.to_owned(),
            name: name.to_owned(),
            ingredients: ingredients
                .iter()
                .map(|(item, quantity, unit)| RecipeIngredient::new(*item, *quantity, *unit))
                .collect(),
        }
    }

    #[test]
    fn merges_by_normalized_name() {
        let recipes = vec![
            recipe("r1", "A", &[("Tomato", 2.0, "piece")]),
            recipe("r2", "B", &[("tomato ", 3.0, "piece")]),
        ];

        let items = generate(&recipes, &[]).unwrap();

        assert_eq!(
            items,
            vec![ShoppingItem {
                ingredient: "tomato".to_owned(),
                quantity: 5.0,
                unit: "piece".to_owned(),
                category: Category::Produce,
                recipe_refs: vec![
                    RecipeRef {
                        recipe_id: "r1".to_owned(),
                        recipe_name: "A".to_owned()
                    },
                    RecipeRef {
                        recipe_id: "r2".to_owned(),
                        recipe_name: "B".to_owned()
                    },
                ],
                notes: None,
                obtained: false,
            }]
        );
    }

    #[test]
    fn pantry_exclusions_leave_no_trace() {
        let recipes = vec![
            recipe("r1", "A", &[("Salt", 1.0, "tsp"), ("rice", 200.0, "g")]),
            recipe("r2", "B", &[("salt ", 2.0, "g"), ("Rice", 100.0, "g")]),
        ];

        let items = generate(&recipes, &["salt".to_owned()]).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].ingredient, "rice");
        assert_eq!(items[0].quantity, 300.0);
        assert!(items.iter().all(|i| i.ingredient != "salt"));
    }

    #[test]
    fn excluded_ingredients_are_never_validated() {
        let recipes = vec![recipe("r1", "A", &[("Salt", f64::NAN, "tsp"), ("rice", 200.0, "g")])];
        let exclusions = ["salt".to_owned()];

        let items = generate(&recipes, &exclusions).unwrap();
        assert_eq!(items.len(), 1);

        let lenient = generate_lenient(&recipes, &exclusions);
        assert!(lenient.rejected.is_empty());
        assert_eq!(lenient.items.len(), 1);
    }

    #[test]
    fn exclusions_are_normalized_too() {
        let recipes = vec![recipe("r1", "A", &[("salt", 1.0, "tsp")])];
        assert!(generate(&recipes, &[" SALT ".to_owned()]).unwrap().is_empty());
    }

    #[test]
    fn category_assigned_from_rules() {
        let recipes = vec![recipe("r1", "A", &[("chicken breast", 1.0, "piece")])];
        let items = generate(&recipes, &[]).unwrap();
        assert_eq!(items[0].category, Category::MeatAndFish);
    }

    #[test]
    fn empty_input() {
        assert!(generate(&[], &[]).unwrap().is_empty());
        assert!(generate(&[recipe("r1", "A", &[])], &[]).unwrap().is_empty());
    }

    #[test]
    fn keeps_first_insertion_order_and_ref_order() {
        let recipes = vec![
            recipe("r1", "A", &[("onion", 1.0, "piece"), ("pasta", 100.0, "g")]),
            recipe("r2", "B", &[("pasta", 200.0, "g"), ("cheese", 50.0, "g")]),
            recipe("r3", "C", &[("onion", 2.0, "piece")]),
        ];

        let items = generate(&recipes, &[]).unwrap();

        let keys = items.iter().map(|i| i.ingredient.as_str()).collect::<Vec<_>>();
        assert_eq!(keys, vec!["onion", "pasta", "cheese"]);
        let refs = items[0]
            .recipe_refs
            .iter()
            .map(|r| r.recipe_id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(refs, vec!["r1", "r3"]);
        assert_eq!(items[1].quantity, 300.0);
    }

    #[test]
    fn same_recipe_twice_adds_two_refs() {
        let recipes = vec![recipe("r1", "A", &[("garlic", 1.0, "clove"), ("garlic", 2.0, "clove")])];

        let items = generate(&recipes, &[]).unwrap();

        assert_eq!(items[0].quantity, 3.0);
        assert_eq!(items[0].recipe_refs.len(), 2);
    }

    #[test]
    fn first_seen_unit_and_conversion() {
        let recipes = vec![
            recipe("r1", "A", &[("flour", 1.0, "kg")]),
            recipe("r2", "B", &[("flour", 500.0, "g")]),
        ];

        let items = generate(&recipes, &[]).unwrap();

        assert_eq!(items[0].unit, "kg");
        assert_eq!(items[0].quantity, 1.5);
    }

    #[test]
    fn unit_mismatch_aborts_generate() {
        let recipes = vec![
            recipe("r1", "A", &[("garlic", 2.0, "clove")]),
            recipe("r2", "B", &[("garlic", 10.0, "g")]),
        ];

        let err = generate(&recipes, &[]).unwrap_err();

        assert!(matches!(err, AggregationError::UnitMismatch { ref recipe_id, .. } if recipe_id == "r2"));
    }

    #[test]
    fn lenient_skips_rejected_ingredients() {
        let recipes = vec![
            recipe("r1", "A", &[("garlic", 2.0, "clove"), ("", 1.0, "g")]),
            recipe("r2", "B", &[("garlic", 10.0, "g"), ("milk", -1.0, "ml"), ("milk", 1.0, "cup")]),
        ];

        let aggregation = generate_lenient(&recipes, &[]);

        assert_eq!(aggregation.items.len(), 2);
        assert_eq!(aggregation.items[0].quantity, 2.0);
        assert_eq!(aggregation.items[0].recipe_refs.len(), 1);
        assert_eq!(aggregation.items[1].ingredient, "milk");
        assert_eq!(aggregation.rejected.len(), 3);
        assert!(matches!(
            aggregation.rejected[0],
            AggregationError::InvalidIngredientData { .. }
        ));
        assert!(matches!(
            aggregation.rejected[1],
            AggregationError::UnitMismatch { .. }
        ));
    }

    #[test]
    fn invalid_ingredient_aborts_generate() {
        let recipes = vec![recipe("r1", "A", &[("rice", f64::NAN, "g")])];
        let err = generate(&recipes, &[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid ingredient 'rice' in recipe 'A': quantity must be a finite, non-negative number"
        );
    }
}
