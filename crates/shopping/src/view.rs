use forkplan_shared::shopping::{Category, ShoppingItem};
use serde::Serialize;
use strum::VariantArray;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryGroup {
    pub category: Category,
    pub items: Vec<ShoppingItem>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeGroup {
    pub recipe_id: String,
    pub recipe_name: String,
    pub items: Vec<ShoppingItem>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub obtained: usize,
    pub total: usize,
}

/// Groups in store-walk order, empty categories omitted.
pub fn group_by_category(items: &[ShoppingItem]) -> Vec<CategoryGroup> {
    Category::VARIANTS
        .iter()
        .filter_map(|category| {
            let items = items
                .iter()
                .filter(|item| item.category == *category)
                .cloned()
                .collect::<Vec<_>>();

            (!items.is_empty()).then_some(CategoryGroup {
                category: *category,
                items,
            })
        })
        .collect()
}

/// One group per referenced recipe, first-seen order. Shared items show up in every group.
pub fn group_by_recipe(items: &[ShoppingItem]) -> Vec<RecipeGroup> {
    let mut groups: Vec<RecipeGroup> = vec![];

    for item in items {
        for reference in &item.recipe_refs {
            let position = match groups
                .iter()
                .position(|g| g.recipe_id == reference.recipe_id)
            {
                Some(position) => position,
                None => {
                    groups.push(RecipeGroup {
                        recipe_id: reference.recipe_id.to_owned(),
                        recipe_name: reference.recipe_name.to_owned(),
                        items: vec![],
                    });
                    groups.len() - 1
                }
            };

            let group = &mut groups[position];
            if !group.items.iter().any(|i| i.ingredient == item.ingredient) {
                group.items.push(item.clone());
            }
        }
    }

    groups
}

pub fn progress(items: &[ShoppingItem]) -> Progress {
    Progress {
        obtained: items.iter().filter(|i| i.obtained).count(),
        total: items.len(),
    }
}

pub fn export_text(items: &[ShoppingItem]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                "{} {} {} - {}",
                item.quantity, item.unit, item.ingredient, item.category
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use forkplan_shared::shopping::RecipeRef;

    use super::*;

    fn item(ingredient: &str, category: Category, refs: &[(&str, &str)]) -> ShoppingItem {
        ShoppingItem {
            ingredient: ingredient.to_owned(),
            quantity: 2.0,
            unit: "piece".to_owned(),
            category,
            recipe_refs: refs
                .iter()
                .map(|(id, name)| RecipeRef {
                    recipe_id: id.to_string(),
                    recipe_name: name.to_string(),
                })
                .collect(),
            notes: None,
            obtained: false,
        }
    }

    #[test]
    fn category_groups_follow_store_order() {
        let items = vec![
            item("salt", Category::Pantry, &[("r1", "A")]),
            item("chips", Category::Other, &[("r1", "A")]),
            item("tomato", Category::Produce, &[("r1", "A")]),
            item("onion", Category::Produce, &[("r2", "B")]),
        ];

        let groups = group_by_category(&items);

        let order = groups.iter().map(|g| g.category).collect::<Vec<_>>();
        assert_eq!(order, vec![Category::Produce, Category::Pantry, Category::Other]);
        assert_eq!(groups[0].items.len(), 2);
    }

    #[test]
    fn recipe_groups_share_items() {
        let items = vec![
            item("tomato", Category::Produce, &[("r1", "A"), ("r2", "B")]),
            item("pasta", Category::Pantry, &[("r2", "B"), ("r2", "B")]),
        ];

        let groups = group_by_recipe(&items);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].recipe_name, "A");
        assert_eq!(groups[0].items.len(), 1);
        assert_eq!(groups[1].items.len(), 2);
    }

    #[test]
    fn progress_counts_obtained() {
        let mut items = vec![
            item("tomato", Category::Produce, &[("r1", "A")]),
            item("pasta", Category::Pantry, &[("r1", "A")]),
        ];
        items[1].obtained = true;

        assert_eq!(progress(&items), Progress { obtained: 1, total: 2 });
        assert_eq!(progress(&[]), Progress::default());
    }

    #[test]
    fn export_one_line_per_item() {
        let mut items = vec![
            item("tomato", Category::Produce, &[("r1", "A")]),
            item("chicken", Category::MeatAndFish, &[("r1", "A")]),
        ];
        items[1].quantity = 1.5;
        items[1].unit = "kg".to_owned();

        assert_eq!(
            export_text(&items),
            "2 piece tomato - Produce\n1.5 kg chicken - Meat & Fish"
        );
    }
}
