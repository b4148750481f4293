use forkplan_db::table::ShoppingList;
use forkplan_shared::shopping::{ShoppingItem, ShoppingListStatus};
use sea_query::{Expr, ExprTrait, Order, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::{
    prelude::FromRow,
    types::{Json, Text},
};
use std::ops::Deref;

#[derive(Clone)]
pub struct Query(pub forkplan_shared::State);

impl Deref for Query {
    type Target = forkplan_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListRow {
    pub id: String,
    pub household_id: String,
    pub plan_id: Option<String>,
    pub items: Json<Vec<ShoppingItem>>,
    #[serde(serialize_with = "forkplan_shared::serialize_text")]
    pub status: Text<ShoppingListStatus>,
    pub created_at: i64,
    pub updated_at: i64,
}

fn select() -> SelectStatement {
    sea_query::Query::select()
        .columns([
            ShoppingList::Id,
            ShoppingList::HouseholdId,
            ShoppingList::PlanId,
            ShoppingList::Items,
            ShoppingList::Status,
            ShoppingList::CreatedAt,
            ShoppingList::UpdatedAt,
        ])
        .from(ShoppingList::Table)
        .to_owned()
}

impl Query {
    pub async fn find(
        &self,
        id: impl Into<String>,
        household_id: impl Into<String>,
    ) -> anyhow::Result<Option<ShoppingListRow>> {
        let id: String = id.into();
        let household_id: String = household_id.into();
        let (sql, values) = select()
            .and_where(Expr::col(ShoppingList::Id).eq(id))
            .and_where(Expr::col(ShoppingList::HouseholdId).eq(household_id))
            .build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, ShoppingListRow, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?)
    }

    /// Most recently generated list of the household.
    pub async fn latest(
        &self,
        household_id: impl Into<String>,
    ) -> anyhow::Result<Option<ShoppingListRow>> {
        let household_id: String = household_id.into();
        let (sql, values) = select()
            .and_where(Expr::col(ShoppingList::HouseholdId).eq(household_id))
            .order_by(ShoppingList::CreatedAt, Order::Desc)
            .order_by_expr(Expr::cust("rowid"), Order::Desc)
            .limit(1)
            .build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, ShoppingListRow, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?)
    }
}
