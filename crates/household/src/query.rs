use forkplan_db::table::{Household, User};
use forkplan_shared::household::{HouseholdSettings, Role};
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
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
pub struct HouseholdRow {
    pub id: String,
    pub name: String,
    pub settings: Json<HouseholdSettings>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRow {
    pub id: String,
    pub name: Option<String>,
    pub email: String,
    pub household_id: Option<String>,
    #[serde(serialize_with = "forkplan_shared::serialize_text")]
    pub role: Text<Role>,
}

impl Query {
    pub async fn find(&self, id: impl Into<String>) -> anyhow::Result<Option<HouseholdRow>> {
        let id: String = id.into();
        let (sql, values) = sea_query::Query::select()
            .columns([
                Household::Id,
                Household::Name,
                Household::Settings,
                Household::CreatedAt,
                Household::UpdatedAt,
            ])
            .from(Household::Table)
            .and_where(Expr::col(Household::Id).eq(id))
            .build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, HouseholdRow, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?)
    }

    pub async fn user(&self, id: impl Into<String>) -> anyhow::Result<Option<UserRow>> {
        let id: String = id.into();
        let (sql, values) = sea_query::Query::select()
            .columns([
                User::Id,
                User::Name,
                User::Email,
                User::HouseholdId,
                User::Role,
            ])
            .from(User::Table)
            .and_where(Expr::col(User::Id).eq(id))
            .build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, UserRow, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?)
    }
}
