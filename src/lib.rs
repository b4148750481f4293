pub mod config;
pub mod db;
pub mod error;
pub mod i18n;
pub mod observability;
pub mod routes;
pub mod server;
pub mod session;

pub use config::Config;
pub use routes::AppState;

rust_i18n::i18n!("locales", fallback = "en");

/// Router with every route and its state, without transport layers.
pub fn create_app(state: AppState) -> axum::Router {
    routes::router(state)
}
