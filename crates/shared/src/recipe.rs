use serde::{Deserialize, Serialize};

/// Unit vocabulary offered by the recipe form. Recipes may still carry any other unit.
pub const UNITS: &[&str] = &[
    "g", "kg", "ml", "l", "tsp", "tbsp", "cup", "piece", "pinch", "handful", "slice", "clove",
    "bunch", "can", "package",
];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredient {
    pub item: String,
    pub quantity: f64,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredient_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl RecipeIngredient {
    pub fn new(item: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            quantity,
            unit: unit.into(),
            ..Default::default()
        }
    }

    pub fn key(&self) -> String {
        crate::normalize_name(&self.item)
    }
}

impl RecipeIngredient {
    /// Describes what makes this ingredient unusable, if anything.
    pub fn defect(&self) -> Option<&'static str> {
        if self.item.trim().is_empty() {
            return Some("item name is blank");
        }

        if !self.quantity.is_finite() || self.quantity < 0.0 {
            return Some("quantity must be a finite, non-negative number");
        }

        if self.unit.trim().is_empty() {
            return Some("unit is blank");
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defects() {
        assert_eq!(RecipeIngredient::new("Tomato", 2.0, "piece").defect(), None);
        assert_eq!(RecipeIngredient::new("Salt", 0.0, "pinch").defect(), None);
        assert!(RecipeIngredient::new("  ", 1.0, "g").defect().is_some());
        assert!(RecipeIngredient::new("rice", -1.0, "g").defect().is_some());
        assert!(RecipeIngredient::new("rice", f64::NAN, "g").defect().is_some());
        assert!(RecipeIngredient::new("rice", f64::INFINITY, "g").defect().is_some());
        assert!(RecipeIngredient::new("rice", 1.0, "").defect().is_some());
    }

    #[test]
    fn key_is_normalized() {
        assert_eq!(
            RecipeIngredient::new("  Chicken Breast ", 1.0, "piece").key(),
            "chicken breast"
        );
    }
}
