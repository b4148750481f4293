use forkplan_db::table::MasterIngredient;
use forkplan_shared::{household::Language, shopping::Category};
use sea_query::{Cond, Expr, ExprTrait, Order, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::{
    prelude::FromRow,
    types::{Json, Text},
};
use std::ops::Deref;

use crate::Synonyms;

/// Result cap for a text search.
pub const SEARCH_LIMIT: u64 = 20;
/// Result cap when browsing without a query.
pub const BROWSE_LIMIT: u64 = 100;

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
pub struct IngredientRow {
    pub id: String,
    pub canonical_key: String,
    pub name_en: String,
    pub name_nl: String,
    pub synonyms: Json<Synonyms>,
    #[serde(serialize_with = "forkplan_shared::serialize_text")]
    pub category: Text<Category>,
    pub default_unit: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl IngredientRow {
    pub fn name(&self, language: Language) -> &str {
        match language {
            Language::En => &self.name_en,
            Language::Nl => &self.name_nl,
        }
    }
}

fn select() -> SelectStatement {
    sea_query::Query::select()
        .columns([
            MasterIngredient::Id,
            MasterIngredient::CanonicalKey,
            MasterIngredient::NameEn,
            MasterIngredient::NameNl,
            MasterIngredient::Synonyms,
            MasterIngredient::Category,
            MasterIngredient::DefaultUnit,
            MasterIngredient::CreatedAt,
            MasterIngredient::UpdatedAt,
        ])
        .from(MasterIngredient::Table)
        .to_owned()
}

impl Query {
    /// Case-insensitive substring search over key, both names and both synonym lists.
    ///
    /// A blank query browses the catalog instead.
    pub async fn search(&self, q: Option<&str>) -> anyhow::Result<Vec<IngredientRow>> {
        let q = q.map(str::trim).filter(|q| !q.is_empty());
        let mut statement = select();

        match q {
            Some(q) => {
                let term = format!("%{}%", q.to_lowercase());
                statement
                    .cond_where(
                        Cond::any()
                            .add(Expr::cust_with_values(
                                "lower(canonical_key) LIKE ?",
                                [term.to_owned()],
                            ))
                            .add(Expr::cust_with_values(
                                "lower(name_en) LIKE ?",
                                [term.to_owned()],
                            ))
                            .add(Expr::cust_with_values(
                                "lower(name_nl) LIKE ?",
                                [term.to_owned()],
                            ))
                            .add(Expr::cust_with_values(
                                "EXISTS (SELECT 1 FROM json_each(synonyms, '$.en') WHERE lower(value) LIKE ?)",
                                [term.to_owned()],
                            ))
                            .add(Expr::cust_with_values(
                                "EXISTS (SELECT 1 FROM json_each(synonyms, '$.nl') WHERE lower(value) LIKE ?)",
                                [term],
                            )),
                    )
                    .limit(SEARCH_LIMIT);
            }
            None => {
                statement.limit(BROWSE_LIMIT);
            }
        }

        let (sql, values) = statement
            .order_by(MasterIngredient::CanonicalKey, Order::Asc)
            .build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, IngredientRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?)
    }

    pub async fn find(&self, id: impl Into<String>) -> anyhow::Result<Option<IngredientRow>> {
        let id: String = id.into();
        let (sql, values) = select()
            .and_where(Expr::col(MasterIngredient::Id).eq(id))
            .build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, IngredientRow, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?)
    }

    pub async fn find_by_key(&self, key: &str) -> anyhow::Result<Option<IngredientRow>> {
        let (sql, values) = select()
            .and_where(Expr::col(MasterIngredient::CanonicalKey).eq(key))
            .build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, IngredientRow, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?)
    }
}
