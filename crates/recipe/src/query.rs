use forkplan_db::table::Recipe;
use forkplan_shared::recipe::RecipeIngredient;
use sea_query::{Expr, ExprTrait, Func, Order, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::{prelude::FromRow, types::Json};
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
pub struct RecipeRow {
    pub id: String,
    pub household_id: String,
    pub title: String,
    pub description: Option<String>,
    pub servings: u32,
    pub prep_time: Option<u32>,
    pub cook_time: Option<u32>,
    pub total_time: Option<u32>,
    pub cuisine: Option<String>,
    pub tags: Json<Vec<String>>,
    pub ingredients: Json<Vec<RecipeIngredient>>,
    pub steps: Json<Vec<String>>,
    pub image_url: Option<String>,
    pub source_url: Option<String>,
    pub created_by: String,
    pub created_at: i64,
    pub updated_at: i64,
}

fn select() -> SelectStatement {
    sea_query::Query::select()
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
        .from(Recipe::Table)
        .to_owned()
}

impl Query {
    /// Household recipes, newest first.
    pub async fn list(&self, household_id: impl Into<String>) -> anyhow::Result<Vec<RecipeRow>> {
        self.recent(household_id, None).await
    }

    pub async fn recent(
        &self,
        household_id: impl Into<String>,
        limit: impl Into<Option<u64>>,
    ) -> anyhow::Result<Vec<RecipeRow>> {
        let mut statement = select()
            .and_where(Expr::col(Recipe::HouseholdId).eq(household_id.into()))
            .order_by(Recipe::CreatedAt, Order::Desc)
            .order_by_expr(Expr::cust("rowid"), Order::Desc)
            .to_owned();

        if let Some(limit) = limit.into() {
            statement.limit(limit);
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?)
    }

    pub async fn find(
        &self,
        id: impl Into<String>,
        household_id: impl Into<String>,
    ) -> anyhow::Result<Option<RecipeRow>> {
        let (sql, values) = select()
            .and_where(Expr::col(Recipe::Id).eq(id.into()))
            .and_where(Expr::col(Recipe::HouseholdId).eq(household_id.into()))
            .build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?)
    }

    /// Household recipes among `ids`, returned in the order of `ids`. Unknown ids are skipped.
    pub async fn find_many(
        &self,
        ids: &[String],
        household_id: impl Into<String>,
    ) -> anyhow::Result<Vec<RecipeRow>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let (sql, values) = select()
            .and_where(Expr::col(Recipe::HouseholdId).eq(household_id.into()))
            .and_where(Expr::col(Recipe::Id).is_in(ids.iter().map(|id| id.as_str())))
            .build_sqlx(SqliteQueryBuilder);

        let rows = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        Ok(ids
            .iter()
            .filter_map(|id| rows.iter().find(|row| &row.id == id).cloned())
            .collect())
    }

    /// Ids of every household recipe, used as the pool for plan spinning.
    pub async fn ids(&self, household_id: impl Into<String>) -> anyhow::Result<Vec<String>> {
        let (sql, values) = sea_query::Query::select()
            .column(Recipe::Id)
            .from(Recipe::Table)
            .and_where(Expr::col(Recipe::HouseholdId).eq(household_id.into()))
            .order_by(Recipe::CreatedAt, Order::Asc)
            .order_by_expr(Expr::cust("rowid"), Order::Asc)
            .build_sqlx(SqliteQueryBuilder);

        let rows = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    pub async fn count(&self, household_id: impl Into<String>) -> anyhow::Result<i64> {
        let (sql, values) = sea_query::Query::select()
            .expr(Func::count(Expr::col(Recipe::Id)))
            .from(Recipe::Table)
            .and_where(Expr::col(Recipe::HouseholdId).eq(household_id.into()))
            .build_sqlx(SqliteQueryBuilder);

        let (count,) = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
            .fetch_one(&self.read_db)
            .await?;

        Ok(count)
    }
}
