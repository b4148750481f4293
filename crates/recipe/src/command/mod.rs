mod create;
mod delete;
mod update;

use forkplan_db::table::Ingredient;
use forkplan_shared::recipe::RecipeIngredient;
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use validator::Validate;

#[derive(Clone)]
pub struct Command(pub forkplan_shared::State);

impl Deref for Command {
    type Target = forkplan_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn default_servings() -> u32 {
    2
}

/// Full recipe payload used by create and update.
#[derive(Validate, Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RecipeInput {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[validate(range(min = 1))]
    #[serde(default = "default_servings")]
    pub servings: u32,
    #[validate(range(max = 10080))]
    #[serde(default)]
    pub prep_time: Option<u32>,
    #[validate(range(max = 10080))]
    #[serde(default)]
    pub cook_time: Option<u32>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
}

impl RecipeInput {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            servings: default_servings(),
            prep_time: None,
            cook_time: None,
            cuisine: None,
            tags: vec![],
            ingredients: vec![],
            steps: vec![],
            image_url: None,
            source_url: None,
        }
    }

    /// Trims the title, then runs field and ingredient validation.
    fn check(&mut self) -> forkplan_shared::Result<()> {
        self.title = self.title.trim().to_owned();
        self.validate()?;

        for (position, ingredient) in self.ingredients.iter().enumerate() {
            if let Some(reason) = ingredient.defect() {
                forkplan_shared::user!("ingredient #{}: {reason}", position + 1);
            }
        }

        Ok(())
    }

    pub fn total_time(&self) -> Option<u32> {
        match (self.prep_time, self.cook_time) {
            (None, None) => None,
            (prep, cook) => Some(prep.unwrap_or(0).saturating_add(cook.unwrap_or(0))),
        }
    }
}

/// Looks up the household registry entry for `name`, creating it when missing.
async fn register_ingredient(
    conn: &mut sqlx::SqliteConnection,
    household_id: &str,
    ingredient: &RecipeIngredient,
) -> anyhow::Result<String> {
    let name = ingredient.key();

    let (sql, values) = sea_query::Query::select()
        .column(Ingredient::Id)
        .from(Ingredient::Table)
        .and_where(Expr::col(Ingredient::HouseholdId).eq(household_id))
        .and_where(Expr::col(Ingredient::Name).eq(&name))
        .build_sqlx(SqliteQueryBuilder);

    if let Some((id,)) = sqlx::query_as_with::<_, (String,), _>(&sql, values)
        .fetch_optional(&mut *conn)
        .await?
    {
        return Ok(id);
    }

    let id = ulid::Ulid::new().to_string();
    let (sql, values) = sea_query::Query::insert()
        .into_table(Ingredient::Table)
        .columns([
            Ingredient::Id,
            Ingredient::HouseholdId,
            Ingredient::Name,
            Ingredient::DefaultUnit,
            Ingredient::CreatedAt,
        ])
        .values_panic([
            id.to_owned().into(),
            household_id.into(),
            name.into(),
            ingredient.unit.to_owned().into(),
            forkplan_shared::now().into(),
        ])
        .build_sqlx(SqliteQueryBuilder);

    sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    Ok(id)
}
