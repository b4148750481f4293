use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use forkplan_ingredient::{CreateInput, IngredientRow, UpdateInput};
use serde::Deserialize;
use serde_json::json;

use crate::{
    error::AppResult,
    i18n::{self, LocaleQuery},
    routes::AppState,
    session::Session,
};

#[derive(Deserialize, Default)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(flatten)]
    pub locale: LocaleQuery,
}

fn ingredient(row: &IngredientRow, language: forkplan_shared::household::Language) -> serde_json::Value {
    json!({
        "id": row.id,
        "canonicalKey": row.canonical_key,
        "name": row.name(language),
        "nameEn": row.name_en,
        "nameNl": row.name_nl,
        "synonyms": row.synonyms,
        "category": row.category.0,
        "categoryLabel": i18n::category_label(row.category.0, language),
        "defaultUnit": row.default_unit,
    })
}

/// GET /api/ingredients?q= - catalog search, names in the household language
pub async fn search(
    session: Session,
    Query(query): Query<SearchQuery>,
    State(app): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let language = i18n::language(&app, &session.household_id, &query.locale).await?;
    let rows = forkplan_ingredient::Query(app.db.clone())
        .search(query.q.as_deref())
        .await?;

    let ingredients = rows
        .iter()
        .map(|row| ingredient(row, language))
        .collect::<Vec<_>>();

    Ok(Json(json!({ "ingredients": ingredients })))
}

pub async fn show(
    session: Session,
    Path((id,)): Path<(String,)>,
    Query(query): Query<LocaleQuery>,
    State(app): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let language = i18n::language(&app, &session.household_id, &query).await?;
    let Some(row) = forkplan_ingredient::Query(app.db.clone()).find(&id).await? else {
        return Err(forkplan_shared::Error::NotFound("Ingredient".to_owned()).into());
    };

    Ok(Json(json!({ "ingredient": ingredient(&row, language) })))
}

pub async fn create(
    _session: Session,
    State(app): State<AppState>,
    Json(input): Json<CreateInput>,
) -> AppResult<impl IntoResponse> {
    let id = forkplan_ingredient::Command(app.db.clone())
        .create(input)
        .await?;

    let row = forkplan_ingredient::Query(app.db.clone()).find(&id).await?;

    Ok(Json(json!({ "ingredient": row })))
}

pub async fn update(
    _session: Session,
    Path((id,)): Path<(String,)>,
    State(app): State<AppState>,
    Json(input): Json<UpdateInput>,
) -> AppResult<impl IntoResponse> {
    forkplan_ingredient::Command(app.db.clone())
        .update(&id, input)
        .await?;

    let row = forkplan_ingredient::Query(app.db.clone()).find(&id).await?;

    Ok(Json(json!({ "ingredient": row })))
}

pub async fn delete(
    _session: Session,
    Path((id,)): Path<(String,)>,
    State(app): State<AppState>,
) -> AppResult<impl IntoResponse> {
    forkplan_ingredient::Command(app.db.clone())
        .delete(&id)
        .await?;

    Ok(Json(json!({ "success": true })))
}
