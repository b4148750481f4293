use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use forkplan_household::PantryInput;
use serde_json::json;

use crate::{error::AppResult, routes::AppState, session::Session};

pub async fn list(session: Session, State(app): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = forkplan_household::Query(app.db.clone())
        .pantry(&session.household_id)
        .await?;

    Ok(Json(json!({ "items": items })))
}

pub async fn add(
    session: Session,
    State(app): State<AppState>,
    Json(input): Json<PantryInput>,
) -> AppResult<impl IntoResponse> {
    forkplan_household::Command(app.db.clone())
        .add_pantry_item(input, &session.household_id)
        .await?;

    let items = forkplan_household::Query(app.db.clone())
        .pantry(&session.household_id)
        .await?;

    Ok(Json(json!({ "items": items })))
}

pub async fn remove(
    session: Session,
    Path((id,)): Path<(String,)>,
    State(app): State<AppState>,
) -> AppResult<impl IntoResponse> {
    forkplan_household::Command(app.db.clone())
        .remove_pantry_item(&id, &session.household_id)
        .await?;

    Ok(Json(json!({ "success": true })))
}
