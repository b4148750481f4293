use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use forkplan_shared::recipe::UNITS;
use serde_json::json;

use crate::{
    error::AppResult,
    i18n::{self, LocaleQuery},
    routes::AppState,
    session::Session,
};

/// GET /api/units - unit vocabulary with labels in the household language
pub async fn list(
    session: Session,
    Query(query): Query<LocaleQuery>,
    State(app): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let language = i18n::language(&app, &session.household_id, &query).await?;
    let units = UNITS
        .iter()
        .map(|unit| json!({ "value": unit, "label": i18n::unit_label(unit, language) }))
        .collect::<Vec<_>>();

    Ok(Json(json!({ "units": units })))
}
