use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use forkplan_recipe::RecipeInput;
use serde::Deserialize;
use serde_json::json;

use crate::{error::AppResult, routes::AppState, session::Session};

pub async fn list(session: Session, State(app): State<AppState>) -> AppResult<impl IntoResponse> {
    let recipes = forkplan_recipe::Query(app.db.clone())
        .list(&session.household_id)
        .await?;

    Ok(Json(json!({ "recipes": recipes })))
}

pub async fn show(
    session: Session,
    Path((id,)): Path<(String,)>,
    State(app): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let Some(recipe) = forkplan_recipe::Query(app.db.clone())
        .find(&id, &session.household_id)
        .await?
    else {
        return Err(forkplan_shared::Error::NotFound("Recipe".to_owned()).into());
    };

    Ok(Json(json!({ "recipe": recipe })))
}

pub async fn create(
    session: Session,
    State(app): State<AppState>,
    Json(input): Json<RecipeInput>,
) -> AppResult<impl IntoResponse> {
    let id = forkplan_recipe::Command(app.db.clone())
        .create(input, &session.household_id, &session.user_id)
        .await?;

    let recipe = forkplan_recipe::Query(app.db.clone())
        .find(&id, &session.household_id)
        .await?;

    Ok(Json(json!({ "recipe": recipe })))
}

pub async fn update(
    session: Session,
    Path((id,)): Path<(String,)>,
    State(app): State<AppState>,
    Json(input): Json<RecipeInput>,
) -> AppResult<impl IntoResponse> {
    forkplan_recipe::Command(app.db.clone())
        .update(&id, input, &session.household_id, &session.user_id)
        .await?;

    let recipe = forkplan_recipe::Query(app.db.clone())
        .find(&id, &session.household_id)
        .await?;

    Ok(Json(json!({ "recipe": recipe })))
}

pub async fn delete(
    session: Session,
    Path((id,)): Path<(String,)>,
    State(app): State<AppState>,
) -> AppResult<impl IntoResponse> {
    forkplan_recipe::Command(app.db.clone())
        .delete(&id, &session.household_id, &session.user_id)
        .await?;

    Ok(Json(json!({ "success": true })))
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ImportInput {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image_data: Option<String>,
}

pub async fn import(
    _session: Session,
    Json(input): Json<ImportInput>,
) -> AppResult<impl IntoResponse> {
    let recipe = match (input.url, input.image_data) {
        (None, Some(image)) => forkplan_recipe::import_from_image(&image)?,
        (url, _) => forkplan_recipe::import_from_url(url.as_deref().unwrap_or_default())?,
    };

    Ok(Json(json!({ "recipe": recipe })))
}
