use forkplan_db::table::Pantry;
use sea_query::{Expr, ExprTrait, OnConflict, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

#[derive(Validate, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PantryInput {
    #[validate(length(min = 1, max = 100))]
    pub item: String,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl PantryInput {
    pub fn new(item: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            quantity: None,
            unit: None,
            category: None,
        }
    }
}

#[derive(Debug, Clone, FromRow, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PantryRow {
    pub id: String,
    pub household_id: String,
    pub item: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub category: Option<String>,
    pub last_updated: i64,
}

impl crate::Command {
    /// Stores an item by its normalized name. Adding a known item refreshes it.
    pub async fn add_pantry_item(
        &self,
        mut input: PantryInput,
        household_id: impl Into<String>,
    ) -> forkplan_shared::Result<()> {
        input.item = forkplan_shared::normalize_name(&input.item);
        input.validate()?;

        if input.quantity.is_some_and(|q| !q.is_finite() || q < 0.0) {
            forkplan_shared::user!("quantity must be a finite, non-negative number");
        }

        let household_id: String = household_id.into();
        let (sql, values) = sea_query::Query::insert()
            .into_table(Pantry::Table)
            .columns([
                Pantry::Id,
                Pantry::HouseholdId,
                Pantry::Item,
                Pantry::Quantity,
                Pantry::Unit,
                Pantry::Category,
                Pantry::LastUpdated,
            ])
            .values_panic([
                ulid::Ulid::new().to_string().into(),
                household_id.into(),
                input.item.into(),
                input.quantity.into(),
                input.unit.into(),
                input.category.into(),
                forkplan_shared::now().into(),
            ])
            .on_conflict(
                OnConflict::columns([Pantry::HouseholdId, Pantry::Item])
                    .update_columns([
                        Pantry::Quantity,
                        Pantry::Unit,
                        Pantry::Category,
                        Pantry::LastUpdated,
                    ])
                    .to_owned(),
            )
            .build_sqlx(SqliteQueryBuilder);

        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        Ok(())
    }

    pub async fn remove_pantry_item(
        &self,
        id: impl Into<String>,
        household_id: impl Into<String>,
    ) -> forkplan_shared::Result<()> {
        let id: String = id.into();
        let household_id: String = household_id.into();
        let (sql, values) = sea_query::Query::delete()
            .from_table(Pantry::Table)
            .and_where(Expr::col(Pantry::Id).eq(id))
            .and_where(Expr::col(Pantry::HouseholdId).eq(household_id))
            .build_sqlx(SqliteQueryBuilder);

        let result = sqlx::query_with(&sql, values).execute(&self.write_db).await?;
        if result.rows_affected() == 0 {
            forkplan_shared::not_found!("Pantry item");
        }

        Ok(())
    }
}

impl crate::Query {
    pub async fn pantry(&self, household_id: impl Into<String>) -> anyhow::Result<Vec<PantryRow>> {
        let household_id: String = household_id.into();
        let (sql, values) = sea_query::Query::select()
            .columns([
                Pantry::Id,
                Pantry::HouseholdId,
                Pantry::Item,
                Pantry::Quantity,
                Pantry::Unit,
                Pantry::Category,
                Pantry::LastUpdated,
            ])
            .from(Pantry::Table)
            .and_where(Expr::col(Pantry::HouseholdId).eq(household_id))
            .order_by(Pantry::Item, Order::Asc)
            .build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, PantryRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?)
    }

    /// Normalized names of everything in the pantry, skipped when building shopping lists.
    pub async fn exclusions(&self, household_id: impl Into<String>) -> anyhow::Result<Vec<String>> {
        Ok(self
            .pantry(household_id)
            .await?
            .into_iter()
            .map(|row| row.item)
            .collect())
    }
}
