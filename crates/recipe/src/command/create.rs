use forkplan_db::table::Recipe;
use sea_query::SqliteQueryBuilder;
use sea_query_sqlx::SqlxBinder;

use super::RecipeInput;

impl super::Command {
    /// Stores a recipe, registering each ingredient in the household registry.
    pub async fn create(
        &self,
        mut input: RecipeInput,
        household_id: impl Into<String>,
        request_by: impl Into<String>,
    ) -> forkplan_shared::Result<String> {
        input.check()?;

        let household_id: String = household_id.into();
        let request_by: String = request_by.into();
        let mut tx = self.write_db.begin().await?;

        for ingredient in input.ingredients.iter_mut() {
            let id = super::register_ingredient(&mut *tx, &household_id, ingredient).await?;
            ingredient.ingredient_id = Some(id);
        }

        let id = ulid::Ulid::new().to_string();
        let now = forkplan_shared::now();
        let total_time = input.total_time();

        let (sql, values) = sea_query::Query::insert()
            .into_table(Recipe::Table)
            .columns([
                Recipe::Id,
                Recipe::HouseholdId,
                Recipe::Title,
                Recipe::Description,
                Recipe::Servings,
                Recipe::PrepTime,
                Recipe::CookTime,
                Recipe::TotalTime,
                Recipe::Cuisine,
                Recipe::Tags,
                Recipe::Ingredients,
                Recipe::Steps,
                Recipe::ImageUrl,
                Recipe::SourceUrl,
                Recipe::CreatedBy,
                Recipe::CreatedAt,
                Recipe::UpdatedAt,
            ])
            .values_panic([
                id.to_owned().into(),
                household_id.into(),
                input.title.into(),
                input.description.into(),
                input.servings.into(),
                input.prep_time.into(),
                input.cook_time.into(),
                total_time.into(),
                input.cuisine.into(),
                serde_json::to_string(&input.tags)?.into(),
                serde_json::to_string(&input.ingredients)?.into(),
                serde_json::to_string(&input.steps)?.into(),
                input.image_url.into(),
                input.source_url.into(),
                request_by.into(),
                now.into(),
                now.into(),
            ])
            .build_sqlx(SqliteQueryBuilder);

        sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        tx.commit().await?;

        tracing::info!(recipe_id = %id, "recipe created");

        Ok(id)
    }
}
