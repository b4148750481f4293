use forkplan_shared::State;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use std::{path::PathBuf, str::FromStr};

#[allow(dead_code)]
pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    forkplan_db::migrate(&pool).await?;

    Ok(State::single(pool))
}

#[allow(dead_code)]
pub fn input(title: &str, ingredients: &[(&str, f64, &str)]) -> forkplan_recipe::RecipeInput {
    forkplan_recipe::RecipeInput {
        ingredients: ingredients
            .iter()
            .map(|(item, quantity, unit)| {
                forkplan_shared::recipe::RecipeIngredient::new(*item, *quantity, *unit)
            })
            .collect(),
        ..forkplan_recipe::RecipeInput::new(title)
    }
}
