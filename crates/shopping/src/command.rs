use forkplan_db::table::ShoppingList;
use forkplan_shared::{
    mealplan::{PlanDay, planned_recipe_ids},
    normalize_name,
    shopping::{ShoppingItem, ShoppingListStatus},
};
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use std::ops::Deref;

use crate::{AggregationError, ShoppingListRow, ShoppingRecipe};

#[derive(Clone)]
pub struct Command(pub forkplan_shared::State);

impl Deref for Command {
    type Target = forkplan_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Either a saved plan or the days of an unsaved one.
#[derive(Deserialize, Default, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GenerateInput {
    #[serde(default)]
    pub plan_id: Option<String>,
    #[serde(default, alias = "plan")]
    pub days: Option<Vec<PlanDay>>,
}

#[derive(Debug, Clone)]
pub struct Generated {
    pub id: String,
    pub rejected: Vec<AggregationError>,
}

impl Command {
    /// Builds a new active list from the recipes scheduled in a plan.
    ///
    /// Pantry items are left out. Ingredients the aggregator rejects are skipped
    /// and reported back.
    pub async fn generate(
        &self,
        input: GenerateInput,
        household_id: impl Into<String>,
    ) -> forkplan_shared::Result<Generated> {
        let household_id: String = household_id.into();

        let days = match (input.plan_id.as_deref(), input.days) {
            (Some(plan_id), _) => {
                let Some(plan) = forkplan_mealplan::Query(self.0.clone())
                    .find(plan_id, &household_id)
                    .await?
                else {
                    forkplan_shared::not_found!("Plan");
                };
                plan.days.0
            }
            (None, Some(days)) => days,
            (None, None) => vec![],
        };

        let recipe_ids = planned_recipe_ids(&days);
        if recipe_ids.is_empty() {
            forkplan_shared::user!("No recipes in plan");
        }

        let recipes = forkplan_recipe::Query(self.0.clone())
            .find_many(&recipe_ids, &household_id)
            .await?
            .into_iter()
            .map(|row| ShoppingRecipe {
                id: row.id,
                name: row.title,
                ingredients: row.ingredients.0,
            })
            .collect::<Vec<_>>();

        let exclusions = forkplan_household::Query(self.0.clone())
            .exclusions(&household_id)
            .await?;

        let aggregation = crate::generate_lenient(&recipes, &exclusions);

        let id = ulid::Ulid::new().to_string();
        let now = forkplan_shared::now();

        let (sql, values) = sea_query::Query::insert()
            .into_table(ShoppingList::Table)
            .columns([
                ShoppingList::Id,
                ShoppingList::HouseholdId,
                ShoppingList::PlanId,
                ShoppingList::Items,
                ShoppingList::Status,
                ShoppingList::CreatedAt,
                ShoppingList::UpdatedAt,
            ])
            .values_panic([
                id.to_owned().into(),
                household_id.into(),
                input.plan_id.into(),
                serde_json::to_string(&aggregation.items)?.into(),
                ShoppingListStatus::Active.to_string().into(),
                now.into(),
                now.into(),
            ])
            .build_sqlx(SqliteQueryBuilder);

        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        tracing::info!(
            shopping_list_id = %id,
            items = aggregation.items.len(),
            rejected = aggregation.rejected.len(),
            "shopping list generated"
        );

        Ok(Generated {
            id,
            rejected: aggregation.rejected,
        })
    }

    async fn load(&self, id: &str, household_id: &str) -> forkplan_shared::Result<ShoppingListRow> {
        match crate::Query(self.0.clone()).find(id, household_id).await? {
            Some(list) => Ok(list),
            None => forkplan_shared::not_found!("Shopping list"),
        }
    }

    async fn write_items(&self, id: &str, items: &[ShoppingItem]) -> forkplan_shared::Result<()> {
        let (sql, values) = sea_query::Query::update()
            .table(ShoppingList::Table)
            .values([
                (ShoppingList::Items, serde_json::to_string(items)?.into()),
                (ShoppingList::UpdatedAt, forkplan_shared::now().into()),
            ])
            .and_where(Expr::col(ShoppingList::Id).eq(id))
            .build_sqlx(SqliteQueryBuilder);

        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        Ok(())
    }

    /// Overwrites the items of a list, as edited by the client.
    pub async fn replace_items(
        &self,
        id: impl Into<String>,
        household_id: impl Into<String>,
        mut items: Vec<ShoppingItem>,
    ) -> forkplan_shared::Result<()> {
        let id: String = id.into();
        let household_id: String = household_id.into();
        self.load(&id, &household_id).await?;

        if let Some(item) = items.iter().find(|i| !i.quantity.is_finite() || i.quantity < 0.0) {
            forkplan_shared::user!("invalid quantity for '{}'", item.ingredient);
        }

        let mut keys: Vec<String> = Vec::with_capacity(items.len());
        for item in items.iter_mut() {
            item.ingredient = normalize_name(&item.ingredient);
            if item.ingredient.is_empty() {
                forkplan_shared::user!("ingredient name is required");
            }
            if keys.contains(&item.ingredient) {
                forkplan_shared::user!("duplicate ingredient '{}'", item.ingredient);
            }
            keys.push(item.ingredient.to_owned());
        }

        self.write_items(&id, &items).await
    }

    /// Flips `obtained` on the item keyed by `ingredient`. Returns the new state.
    pub async fn toggle(
        &self,
        id: impl Into<String>,
        household_id: impl Into<String>,
        ingredient: &str,
    ) -> forkplan_shared::Result<bool> {
        let id: String = id.into();
        let household_id: String = household_id.into();
        let mut items = self.load(&id, &household_id).await?.items.0;
        let key = normalize_name(ingredient);

        let Some(item) = items.iter_mut().find(|i| i.ingredient == key) else {
            forkplan_shared::user!("ingredient not found");
        };

        item.obtained = !item.obtained;
        let obtained = item.obtained;

        self.write_items(&id, &items).await?;

        Ok(obtained)
    }

    pub async fn clear(
        &self,
        id: impl Into<String>,
        household_id: impl Into<String>,
    ) -> forkplan_shared::Result<()> {
        let id: String = id.into();
        let household_id: String = household_id.into();
        self.load(&id, &household_id).await?;

        self.write_items(&id, &[]).await
    }

    pub async fn set_status(
        &self,
        id: impl Into<String>,
        household_id: impl Into<String>,
        status: ShoppingListStatus,
    ) -> forkplan_shared::Result<()> {
        let id: String = id.into();
        let household_id: String = household_id.into();
        self.load(&id, &household_id).await?;

        let (sql, values) = sea_query::Query::update()
            .table(ShoppingList::Table)
            .values([
                (ShoppingList::Status, status.to_string().into()),
                (ShoppingList::UpdatedAt, forkplan_shared::now().into()),
            ])
            .and_where(Expr::col(ShoppingList::Id).eq(id.as_str()))
            .build_sqlx(SqliteQueryBuilder);

        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        Ok(())
    }

    pub async fn delete(
        &self,
        id: impl Into<String>,
        household_id: impl Into<String>,
    ) -> forkplan_shared::Result<()> {
        let id: String = id.into();
        let household_id: String = household_id.into();
        self.load(&id, &household_id).await?;

        let (sql, values) = sea_query::Query::delete()
            .from_table(ShoppingList::Table)
            .and_where(Expr::col(ShoppingList::Id).eq(id.as_str()))
            .build_sqlx(SqliteQueryBuilder);

        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        Ok(())
    }
}
