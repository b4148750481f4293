use forkplan_db::table::Recipe;
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use super::RecipeInput;

impl super::Command {
    /// Replaces every editable field. Only the creator may do so.
    pub async fn update(
        &self,
        id: impl Into<String>,
        mut input: RecipeInput,
        household_id: impl Into<String>,
        request_by: impl Into<String>,
    ) -> forkplan_shared::Result<()> {
        let id: String = id.into();
        let Some(recipe) = crate::Query(self.0.clone())
            .find(&id, household_id)
            .await?
        else {
            forkplan_shared::not_found!("Recipe");
        };

        let request_by: String = request_by.into();
        if recipe.created_by != request_by {
            forkplan_shared::forbidden!("You can only edit recipes you created");
        }

        input.check()?;
        let total_time = input.total_time();

        let (sql, values) = sea_query::Query::update()
            .table(Recipe::Table)
            .values([
                (Recipe::Title, input.title.into()),
                (Recipe::Description, input.description.into()),
                (Recipe::Servings, input.servings.into()),
                (Recipe::PrepTime, input.prep_time.into()),
                (Recipe::CookTime, input.cook_time.into()),
                (Recipe::TotalTime, total_time.into()),
                (Recipe::Cuisine, input.cuisine.into()),
                (Recipe::Tags, serde_json::to_string(&input.tags)?.into()),
                (
                    Recipe::Ingredients,
                    serde_json::to_string(&input.ingredients)?.into(),
                ),
                (Recipe::Steps, serde_json::to_string(&input.steps)?.into()),
                (Recipe::ImageUrl, input.image_url.into()),
                (Recipe::SourceUrl, input.source_url.into()),
                (Recipe::UpdatedAt, forkplan_shared::now().into()),
            ])
            .and_where(Expr::col(Recipe::Id).eq(&id))
            .build_sqlx(SqliteQueryBuilder);

        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        Ok(())
    }
}
