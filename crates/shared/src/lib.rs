mod command;
mod date;
pub mod household;
pub mod mealplan;
pub mod recipe;
pub mod shopping;

pub use command::*;
pub use date::*;

#[derive(Clone)]
pub struct State {
    pub read_db: sqlx::SqlitePool,
    pub write_db: sqlx::SqlitePool,
}

impl State {
    /// Single pool used for both reads and writes, handy for CLI commands and tests.
    pub fn single(pool: sqlx::SqlitePool) -> Self {
        Self {
            read_db: pool.clone(),
            write_db: pool,
        }
    }
}

/// Lowercase, trimmed ingredient name used as merge key everywhere.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Serializes a `sqlx::types::Text` column through its `Display` form.
pub fn serialize_text<T: std::fmt::Display, S: serde::Serializer>(
    value: &sqlx::types::Text<T>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(&value.0)
}
