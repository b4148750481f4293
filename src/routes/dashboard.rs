use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;

use crate::{error::AppResult, routes::AppState, session::Session};

const RECENT_RECIPES: u64 = 3;

/// GET /api/dashboard - recipe count, latest recipes and this week's planned days
pub async fn show(session: Session, State(app): State<AppState>) -> AppResult<impl IntoResponse> {
    let recipes = forkplan_recipe::Query(app.db.clone());
    let count = recipes.count(&session.household_id).await?;
    let recent = recipes.recent(&session.household_id, RECENT_RECIPES).await?;

    let planned_days = forkplan_mealplan::Query(app.db.clone())
        .latest(&session.household_id)
        .await?
        .map(|plan| {
            plan.days
                .0
                .into_iter()
                .filter(|day| day.recipe_id.is_some())
                .count()
        })
        .unwrap_or_default();

    Ok(Json(json!({
        "recipeCount": count,
        "recentRecipes": recent,
        "plannedDays": planned_days,
    })))
}
