use forkplan_shared::{household::Language, shopping::Category};
use serde::Deserialize;

use crate::routes::AppState;

#[derive(Deserialize, Default, Debug)]
pub struct LocaleQuery {
    #[serde(default)]
    pub locale: Option<Language>,
}

/// `locale` query parameter first, then the household setting, then English.
pub async fn language(
    app: &AppState,
    household_id: &str,
    query: &LocaleQuery,
) -> anyhow::Result<Language> {
    if let Some(language) = query.locale {
        return Ok(language);
    }

    Ok(forkplan_household::Query(app.db.clone())
        .find(household_id)
        .await?
        .map(|household| household.settings.0.language())
        .unwrap_or_default())
}

pub fn category_label(category: Category, language: Language) -> String {
    rust_i18n::t!(format!("category.{category:?}"), locale = language.as_ref()).to_string()
}

pub fn unit_label(unit: &str, language: Language) -> String {
    rust_i18n::t!(format!("unit.{unit}"), locale = language.as_ref()).to_string()
}

pub fn progress_label(obtained: usize, total: usize, language: Language) -> String {
    rust_i18n::t!(
        "progress",
        locale = language.as_ref(),
        obtained = obtained,
        total = total
    )
    .to_string()
}
