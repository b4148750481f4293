use axum::{Json, extract::State, response::IntoResponse};
use forkplan_household::{CreateInput, InviteInput};
use forkplan_shared::household::HouseholdSettings;
use serde::Deserialize;
use serde_json::json;

use crate::{
    error::AppResult,
    routes::AppState,
    session::{Session, SessionUser},
};

/// POST /api/household - the session user becomes owner of a new household
pub async fn create(
    user: SessionUser,
    State(app): State<AppState>,
    Json(input): Json<CreateInput>,
) -> AppResult<impl IntoResponse> {
    let id = forkplan_household::Command(app.db.clone())
        .create(input, &user.id)
        .await?;

    let household = forkplan_household::Query(app.db.clone()).find(&id).await?;

    Ok(Json(json!({ "household": household })))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInput {
    pub household_id: String,
    pub settings: HouseholdSettings,
}

pub async fn update(
    session: Session,
    State(app): State<AppState>,
    Json(input): Json<UpdateInput>,
) -> AppResult<impl IntoResponse> {
    forkplan_household::Command(app.db.clone())
        .update_settings(input.household_id, input.settings, &session.household_id)
        .await?;

    Ok(Json(json!({ "success": true })))
}

pub async fn invite(
    session: Session,
    State(app): State<AppState>,
    Json(input): Json<InviteInput>,
) -> AppResult<impl IntoResponse> {
    let invitation = forkplan_household::Command(app.db.clone())
        .invite(input, &session.household_id, &session.user_id)
        .await?;

    Ok(Json(json!({ "success": true, "invitation": invitation })))
}
