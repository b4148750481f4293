use axum::{Json, extract::State, response::IntoResponse};
use forkplan_mealplan::PlanInput;
use forkplan_shared::mealplan::PlanDay;
use serde::Deserialize;
use serde_json::json;
use time::Date;

use crate::{error::AppResult, routes::AppState, session::Session};

pub async fn save(
    session: Session,
    State(app): State<AppState>,
    Json(input): Json<PlanInput>,
) -> AppResult<impl IntoResponse> {
    let id = forkplan_mealplan::Command(app.db.clone())
        .save(input, &session.household_id)
        .await?;

    let plan = forkplan_mealplan::Query(app.db.clone())
        .find(&id, &session.household_id)
        .await?;

    Ok(Json(json!({ "plan": plan })))
}

/// GET /api/planner/current - latest saved plan and the bounds of the current week
pub async fn current(
    session: Session,
    State(app): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let (week_start, week_end) = forkplan_mealplan::week_bounds(forkplan_shared::today())?;
    let plan = forkplan_mealplan::Query(app.db.clone())
        .latest(&session.household_id)
        .await?;

    Ok(Json(json!({
        "plan": plan,
        "weekStart": forkplan_shared::format_date(week_start),
        "weekEnd": forkplan_shared::format_date(week_end),
    })))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpinWeekInput {
    #[serde(with = "forkplan_shared::iso_date")]
    pub week_start: Date,
    #[serde(default)]
    pub days: Vec<PlanDay>,
}

async fn recipe_pool(app: &AppState, household_id: &str) -> AppResult<Vec<String>> {
    let ids = forkplan_recipe::Query(app.db.clone())
        .ids(household_id)
        .await?;

    if ids.is_empty() {
        return Err(forkplan_shared::Error::User(
            "No recipes available. Add some recipes first.".to_owned(),
        )
        .into());
    }

    Ok(ids)
}

/// POST /api/planner/spin-week - draft week, not persisted
pub async fn spin_week(
    session: Session,
    State(app): State<AppState>,
    Json(input): Json<SpinWeekInput>,
) -> AppResult<impl IntoResponse> {
    let ids = recipe_pool(&app, &session.household_id).await?;
    let days = forkplan_mealplan::spin_week(&mut rand::rng(), &ids, input.week_start, &input.days)?;

    Ok(Json(json!({ "days": days })))
}

/// POST /api/planner/spin-day - one random recipe id
pub async fn spin_day(
    session: Session,
    State(app): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let ids = recipe_pool(&app, &session.household_id).await?;
    let recipe_id = forkplan_mealplan::spin_day(&mut rand::rng(), &ids);

    Ok(Json(json!({ "recipeId": recipe_id })))
}
