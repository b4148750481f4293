use axum::{
    Router,
    routing::{get, post},
};

mod dashboard;
mod health;
mod household;
mod ingredients;
mod pantry;
mod planner;
mod recipes;
mod shopping;
mod units;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub db: forkplan_shared::State,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints (no session required)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.db.read_db.clone())
        .route("/api/dashboard", get(dashboard::show))
        .route("/api/recipes", get(recipes::list).post(recipes::create))
        .route("/api/recipes/import", post(recipes::import))
        .route(
            "/api/recipes/{id}",
            get(recipes::show)
                .patch(recipes::update)
                .delete(recipes::delete),
        )
        .route("/api/planner", post(planner::save))
        .route("/api/planner/current", get(planner::current))
        .route("/api/planner/spin-week", post(planner::spin_week))
        .route("/api/planner/spin-day", post(planner::spin_day))
        .route("/api/shopping/generate", post(shopping::generate))
        .route("/api/shopping/latest", get(shopping::latest))
        .route(
            "/api/shopping/{id}",
            get(shopping::show)
                .patch(shopping::update)
                .delete(shopping::delete),
        )
        .route("/api/shopping/{id}/grouped", get(shopping::grouped))
        .route("/api/shopping/{id}/export", get(shopping::export))
        .route("/api/shopping/{id}/clear", post(shopping::clear))
        .route("/api/shopping/{id}/toggle", post(shopping::toggle))
        .route(
            "/api/household",
            post(household::create).patch(household::update),
        )
        .route("/api/household/invite", post(household::invite))
        .route("/api/pantry", get(pantry::list).post(pantry::add))
        .route("/api/pantry/{id}", axum::routing::delete(pantry::remove))
        .route(
            "/api/ingredients",
            get(ingredients::search).post(ingredients::create),
        )
        .route(
            "/api/ingredients/{id}",
            get(ingredients::show)
                .patch(ingredients::update)
                .delete(ingredients::delete),
        )
        .route("/api/units", get(units::list))
        .with_state(app_state)
}
