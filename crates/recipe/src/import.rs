//! Recipe extraction placeholders. Both return a canned draft for the user to finish by hand.

use forkplan_shared::recipe::RecipeIngredient;

use crate::RecipeInput;

pub fn import_from_url(url: &str) -> forkplan_shared::Result<RecipeInput> {
    let url = url.trim();
    if url.is_empty() {
        forkplan_shared::user!("URL is required");
    }

    tracing::info!(url, "recipe extraction requested");

    Ok(RecipeInput {
        description: Some("Recipe imported from URL - automatic extraction coming soon".to_owned()),
        servings: 4,
        prep_time: Some(30),
        cook_time: Some(30),
        cuisine: Some("Unknown".to_owned()),
        tags: vec!["imported".to_owned()],
        ingredients: vec![
            RecipeIngredient::new("Ingredient 1", 1.0, "cup"),
            RecipeIngredient::new("Ingredient 2", 2.0, "tbsp"),
        ],
        steps: vec![
            "Step 1: automatic extraction coming in a next update".to_owned(),
            "Step 2: please add recipe details manually for now".to_owned(),
        ],
        source_url: Some(url.to_owned()),
        ..RecipeInput::new("Imported Recipe")
    })
}

pub fn import_from_image(image_data: &str) -> forkplan_shared::Result<RecipeInput> {
    if image_data.trim().is_empty() {
        forkplan_shared::user!("Image is required");
    }

    tracing::info!(size = image_data.len(), "image extraction requested");

    Ok(RecipeInput {
        description: Some(
            "Recipe extracted from image - automatic extraction coming soon".to_owned(),
        ),
        servings: 4,
        prep_time: Some(30),
        cook_time: Some(30),
        cuisine: Some("Unknown".to_owned()),
        tags: vec!["image-import".to_owned()],
        steps: vec!["Automatic extraction coming in a next update".to_owned()],
        image_url: Some(image_data.to_owned()),
        ..RecipeInput::new("Recipe from Image")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_required() {
        let err = import_from_url("  ").unwrap_err();
        assert_eq!(err.to_string(), "URL is required");
    }

    #[test]
    fn url_draft_is_canned() {
        let draft = import_from_url("https://example.com/soup").unwrap();
        assert_eq!(draft.title, "Imported Recipe");
        assert_eq!(draft.ingredients.len(), 2);
        assert_eq!(draft.source_url.as_deref(), Some("https://example.com/soup"));
        assert_eq!(draft.total_time(), Some(60));
    }

    #[test]
    fn image_draft_keeps_the_image() {
        let draft = import_from_image("data:image/png;base64,AAAA").unwrap();
        assert_eq!(draft.title, "Recipe from Image");
        assert!(draft.ingredients.is_empty());
        assert_eq!(draft.image_url.as_deref(), Some("data:image/png;base64,AAAA"));
    }
}
