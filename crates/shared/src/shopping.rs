use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Store sections, declared in the order a shopper walks through them.
#[derive(
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Serialize,
    Deserialize,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
pub enum Category {
    Produce,
    Bakery,
    Charcuterie,
    Dairy,
    #[strum(serialize = "Meat & Fish")]
    #[serde(rename = "Meat & Fish")]
    MeatAndFish,
    Frozen,
    #[default]
    Pantry,
    Beverages,
    Household,
    #[strum(serialize = "Personal Care")]
    #[serde(rename = "Personal Care")]
    PersonalCare,
    #[serde(other)]
    Other,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRef {
    pub recipe_id: String,
    pub recipe_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub ingredient: String,
    pub quantity: f64,
    pub unit: String,
    pub category: Category,
    pub recipe_refs: Vec<RecipeRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub obtained: bool,
}

impl ShoppingItem {
    pub fn references(&self, recipe_id: &str) -> bool {
        self.recipe_refs.iter().any(|r| r.recipe_id == recipe_id)
    }
}

#[derive(
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Serialize,
    Deserialize,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ShoppingListStatus {
    #[default]
    Active,
    Completed,
    Archived,
}

/// Drops every reference to `recipe_id`, then every item left without a reference.
///
/// Returns `None` when nothing changed so callers can skip the write.
pub fn remove_recipe(items: &[ShoppingItem], recipe_id: &str) -> Option<Vec<ShoppingItem>> {
    if !items.iter().any(|item| item.references(recipe_id)) {
        return None;
    }

    Some(
        items
            .iter()
            .cloned()
            .filter_map(|mut item| {
                item.recipe_refs.retain(|r| r.recipe_id != recipe_id);
                (!item.recipe_refs.is_empty()).then_some(item)
            })
            .collect(),
    )
}
