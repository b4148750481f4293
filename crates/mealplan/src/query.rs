use forkplan_db::table::Plan;
use forkplan_shared::mealplan::{PlanDay, PlanStatus};
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
pub struct PlanRow {
    pub id: String,
    pub household_id: String,
    pub week_start: String,
    pub week_end: String,
    pub days: Json<Vec<PlanDay>>,
    #[serde(serialize_with = "forkplan_shared::serialize_text")]
    pub status: Text<PlanStatus>,
    pub created_at: i64,
    pub updated_at: i64,
}

fn select() -> SelectStatement {
    sea_query::Query::select()
        .columns([
            Plan::Id,
            Plan::HouseholdId,
            Plan::WeekStart,
            Plan::WeekEnd,
            Plan::Days,
            Plan::Status,
            Plan::CreatedAt,
            Plan::UpdatedAt,
        ])
        .from(Plan::Table)
        .to_owned()
}

impl Query {
    /// Most recently saved plan of the household.
    pub async fn latest(&self, household_id: impl Into<String>) -> anyhow::Result<Option<PlanRow>> {
        let (sql, values) = select()
            .and_where(Expr::col(Plan::HouseholdId).eq(household_id.into()))
            .order_by(Plan::CreatedAt, Order::Desc)
            .order_by_expr(Expr::cust("rowid"), Order::Desc)
            .limit(1)
            .build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, PlanRow, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?)
    }

    pub async fn find(
        &self,
        id: impl Into<String>,
        household_id: impl Into<String>,
    ) -> anyhow::Result<Option<PlanRow>> {
        let (sql, values) = select()
            .and_where(Expr::col(Plan::Id).eq(id.into()))
            .and_where(Expr::col(Plan::HouseholdId).eq(household_id.into()))
            .build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, PlanRow, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?)
    }
}
