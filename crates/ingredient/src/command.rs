use forkplan_db::table::MasterIngredient;
use forkplan_shared::shopping::Category;
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use std::ops::Deref;
use validator::Validate;

use crate::{Names, Synonyms};

#[derive(Clone)]
pub struct Command(pub forkplan_shared::State);

impl Deref for Command {
    type Target = forkplan_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Validate, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateInput {
    #[validate(length(max = 100))]
    pub canonical_key: String,
    pub names: Names,
    #[serde(default)]
    pub synonyms: Synonyms,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub default_unit: Option<String>,
}

#[derive(Deserialize, Default, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInput {
    #[serde(default)]
    pub names: Option<Names>,
    #[serde(default)]
    pub synonyms: Option<Synonyms>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub default_unit: Option<String>,
}

impl Command {
    pub async fn create(&self, mut input: CreateInput) -> forkplan_shared::Result<String> {
        input.canonical_key = input.canonical_key.trim().to_lowercase();
        input.names.en = input.names.en.trim().to_owned();
        input.validate()?;

        if input.canonical_key.is_empty() || input.names.en.is_empty() {
            forkplan_shared::user!("Canonical key and English name are required");
        }

        let exists = crate::Query(self.0.clone())
            .find_by_key(&input.canonical_key)
            .await?
            .is_some();

        if exists {
            forkplan_shared::conflict!("Ingredient already exists");
        }

        let id = ulid::Ulid::new().to_string();
        let now = forkplan_shared::now();
        let name_nl = input
            .names
            .nl
            .filter(|nl| !nl.trim().is_empty())
            .unwrap_or_else(|| input.names.en.to_owned());

        let (sql, values) = sea_query::Query::insert()
            .into_table(MasterIngredient::Table)
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
            .values_panic([
                id.to_owned().into(),
                input.canonical_key.into(),
                input.names.en.into(),
                name_nl.into(),
                serde_json::to_string(&input.synonyms)?.into(),
                input.category.to_string().into(),
                input.default_unit.into(),
                now.into(),
                now.into(),
            ])
            .build_sqlx(SqliteQueryBuilder);

        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        Ok(id)
    }

    /// Applies the fields present in `input`.
    pub async fn update(
        &self,
        id: impl Into<String>,
        input: UpdateInput,
    ) -> forkplan_shared::Result<()> {
        let id: String = id.into();
        let Some(current) = crate::Query(self.0.clone()).find(&id).await? else {
            forkplan_shared::not_found!("Ingredient");
        };

        let (name_en, name_nl) = match input.names {
            Some(names) if !names.en.trim().is_empty() => {
                let en = names.en.trim().to_owned();
                let nl = names
                    .nl
                    .filter(|nl| !nl.trim().is_empty())
                    .unwrap_or_else(|| en.to_owned());
                (en, nl)
            }
            Some(_) => forkplan_shared::user!("English name is required"),
            None => (current.name_en, current.name_nl),
        };

        let synonyms = input.synonyms.unwrap_or(current.synonyms.0);
        let category = input.category.unwrap_or(current.category.0);
        let default_unit = input.default_unit.or(current.default_unit);

        let (sql, values) = sea_query::Query::update()
            .table(MasterIngredient::Table)
            .values([
                (MasterIngredient::NameEn, name_en.into()),
                (MasterIngredient::NameNl, name_nl.into()),
                (
                    MasterIngredient::Synonyms,
                    serde_json::to_string(&synonyms)?.into(),
                ),
                (MasterIngredient::Category, category.to_string().into()),
                (MasterIngredient::DefaultUnit, default_unit.into()),
                (MasterIngredient::UpdatedAt, forkplan_shared::now().into()),
            ])
            .and_where(Expr::col(MasterIngredient::Id).eq(&id))
            .build_sqlx(SqliteQueryBuilder);

        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        Ok(())
    }

    pub async fn delete(&self, id: impl Into<String>) -> forkplan_shared::Result<()> {
        let id: String = id.into();
        let (sql, values) = sea_query::Query::delete()
            .from_table(MasterIngredient::Table)
            .and_where(Expr::col(MasterIngredient::Id).eq(id))
            .build_sqlx(SqliteQueryBuilder);

        let result = sqlx::query_with(&sql, values).execute(&self.write_db).await?;
        if result.rows_affected() == 0 {
            forkplan_shared::not_found!("Ingredient");
        }

        Ok(())
    }
}
