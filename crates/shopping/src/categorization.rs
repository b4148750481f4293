use forkplan_shared::shopping::Category;

/// Keyword to category pairs. Scanned top to bottom, first substring match wins.
pub const CATEGORY_RULES: &[(&str, Category)] = &[
    ("tomato", Category::Produce),
    ("onion", Category::Produce),
    ("garlic", Category::Produce),
    ("potato", Category::Produce),
    ("carrot", Category::Produce),
    ("bread", Category::Bakery),
    ("flour", Category::Bakery),
    ("cheese", Category::Dairy),
    ("milk", Category::Dairy),
    ("butter", Category::Dairy),
    ("chicken", Category::MeatAndFish),
    ("beef", Category::MeatAndFish),
    ("fish", Category::MeatAndFish),
    ("pasta", Category::Pantry),
    ("rice", Category::Pantry),
    ("oil", Category::Pantry),
    ("salt", Category::Pantry),
    ("pepper", Category::Pantry),
];

pub fn categorize(ingredient: &str) -> Category {
    let name = ingredient.to_lowercase();

    CATEGORY_RULES
        .iter()
        .find(|(keyword, _)| name.contains(keyword))
        .map(|(_, category)| *category)
        .unwrap_or_default()
}
