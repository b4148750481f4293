use forkplan_db::table::MasterIngredient;
use forkplan_shared::shopping::Category;
use sea_query::{OnConflict, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;

use crate::{Names, Synonyms};

const CATALOG: &str = include_str!("../data/catalog.json");

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub canonical_key: String,
    pub names: Names,
    pub synonyms: Synonyms,
    pub category: Category,
    pub default_unit: Option<String>,
}

pub fn catalog() -> serde_json::Result<Vec<CatalogEntry>> {
    serde_json::from_str(CATALOG)
}

impl crate::Command {
    /// Inserts the built-in catalog, leaving existing keys untouched. Returns how many rows were added.
    pub async fn seed(&self) -> forkplan_shared::Result<u64> {
        let now = forkplan_shared::now();
        let mut added = 0;
        let mut tx = self.write_db.begin().await?;

        for entry in catalog()? {
            let name_nl = entry.names.nl.unwrap_or_else(|| entry.names.en.to_owned());
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
                    ulid::Ulid::new().to_string().into(),
                    entry.canonical_key.into(),
                    entry.names.en.into(),
                    name_nl.into(),
                    serde_json::to_string(&entry.synonyms)?.into(),
                    entry.category.to_string().into(),
                    entry.default_unit.into(),
                    now.into(),
                    now.into(),
                ])
                .on_conflict(
                    OnConflict::column(MasterIngredient::CanonicalKey)
                        .do_nothing()
                        .to_owned(),
                )
                .build_sqlx(SqliteQueryBuilder);

            added += sqlx::query_with(&sql, values)
                .execute(&mut *tx)
                .await?
                .rows_affected();
        }

        tx.commit().await?;

        tracing::info!(added, "ingredient catalog seeded");

        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_parses() {
        let catalog = catalog().unwrap();
        assert!(catalog.len() > 50);

        let tomato = catalog.iter().find(|e| e.canonical_key == "tomato").unwrap();
        assert_eq!(tomato.names.nl.as_deref(), Some("tomaat"));
        assert_eq!(tomato.category, Category::Produce);

        let mut keys = catalog.iter().map(|e| e.canonical_key.as_str()).collect::<Vec<_>>();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), catalog.len());
    }
}
