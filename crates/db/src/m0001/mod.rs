macro_rules! operation {
    ($name:ident, $up:ident, $down:ident) => {
        pub struct $name;

        #[async_trait::async_trait]
        impl sqlx_migrator::Operation<sqlx::Sqlite> for $name {
            async fn up(
                &self,
                connection: &mut sqlx::SqliteConnection,
            ) -> Result<(), sqlx_migrator::Error> {
                let statement = $up().to_string(sea_query::SqliteQueryBuilder);
                sqlx::query(&statement).execute(connection).await?;

                Ok(())
            }

            async fn down(
                &self,
                connection: &mut sqlx::SqliteConnection,
            ) -> Result<(), sqlx_migrator::Error> {
                let statement = $down().to_string(sea_query::SqliteQueryBuilder);
                sqlx::query(&statement).execute(connection).await?;

                Ok(())
            }
        }
    };
}

mod household;
mod ingredient;
mod invite;
mod master_ingredient;
mod pantry;
mod plan;
mod recipe;
mod shopping_list;
mod user;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "forkplan",
    "m0001",
    vec_box![],
    vec_box![
        household::CreateTable,
        user::CreateTable,
        user::CreateUk1,
        user::CreateIdx1,
        recipe::CreateTable,
        recipe::CreateIdx1,
        plan::CreateTable,
        plan::CreateIdx1,
        pantry::CreateTable,
        pantry::CreateUk1,
        ingredient::CreateTable,
        ingredient::CreateUk1,
        master_ingredient::CreateTable,
        master_ingredient::CreateUk1,
        shopping_list::CreateTable,
        shopping_list::CreateIdx1,
        invite::CreateTable,
        invite::CreateUk1,
    ]
);
