use forkplan_db::table::{Plan, Recipe, ShoppingList};
use forkplan_shared::{mealplan::PlanDay, shopping::ShoppingItem};
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

impl super::Command {
    /// Deletes a recipe created by `request_by`.
    ///
    /// In the same transaction the recipe is unscheduled from every household
    /// plan and stripped from every household shopping list.
    pub async fn delete(
        &self,
        id: impl Into<String>,
        household_id: impl Into<String>,
        request_by: impl Into<String>,
    ) -> forkplan_shared::Result<()> {
        let id: String = id.into();
        let household_id: String = household_id.into();
        let Some(recipe) = crate::Query(self.0.clone())
            .find(&id, &household_id)
            .await?
        else {
            forkplan_shared::not_found!("Recipe");
        };

        let request_by: String = request_by.into();
        if recipe.created_by != request_by {
            forkplan_shared::forbidden!("You can only delete recipes you created");
        }

        let now = forkplan_shared::now();
        let mut tx = self.write_db.begin().await?;

        let (sql, values) = sea_query::Query::select()
            .columns([Plan::Id, Plan::Days])
            .from(Plan::Table)
            .and_where(Expr::col(Plan::HouseholdId).eq(&household_id))
            .build_sqlx(SqliteQueryBuilder);

        let plans = sqlx::query_as_with::<_, (String, sqlx::types::Json<Vec<PlanDay>>), _>(
            &sql, values,
        )
        .fetch_all(&mut *tx)
        .await?;

        for (plan_id, days) in plans {
            let Some(days) = forkplan_shared::mealplan::remove_recipe(&days.0, &id) else {
                continue;
            };

            let (sql, values) = sea_query::Query::update()
                .table(Plan::Table)
                .values([
                    (Plan::Days, serde_json::to_string(&days)?.into()),
                    (Plan::UpdatedAt, now.into()),
                ])
                .and_where(Expr::col(Plan::Id).eq(plan_id))
                .build_sqlx(SqliteQueryBuilder);

            sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        }

        let (sql, values) = sea_query::Query::select()
            .columns([ShoppingList::Id, ShoppingList::Items])
            .from(ShoppingList::Table)
            .and_where(Expr::col(ShoppingList::HouseholdId).eq(&household_id))
            .build_sqlx(SqliteQueryBuilder);

        let lists = sqlx::query_as_with::<_, (String, sqlx::types::Json<Vec<ShoppingItem>>), _>(
            &sql, values,
        )
        .fetch_all(&mut *tx)
        .await?;

        for (list_id, items) in lists {
            let Some(items) = forkplan_shared::shopping::remove_recipe(&items.0, &id) else {
                continue;
            };

            let (sql, values) = sea_query::Query::update()
                .table(ShoppingList::Table)
                .values([
                    (ShoppingList::Items, serde_json::to_string(&items)?.into()),
                    (ShoppingList::UpdatedAt, now.into()),
                ])
                .and_where(Expr::col(ShoppingList::Id).eq(list_id))
                .build_sqlx(SqliteQueryBuilder);

            sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        }

        let (sql, values) = sea_query::Query::delete()
            .from_table(Recipe::Table)
            .and_where(Expr::col(Recipe::Id).eq(&id))
            .build_sqlx(SqliteQueryBuilder);

        sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        tx.commit().await?;

        tracing::info!(recipe_id = %id, "recipe deleted");

        Ok(())
    }
}
