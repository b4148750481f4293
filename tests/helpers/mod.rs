#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use forkplan::{
    AppState,
    config::{Config, DatabaseConfig, ObservabilityConfig, ServerConfig, SessionConfig},
};
use http_body_util::BodyExt;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use std::{path::PathBuf, str::FromStr};
use tower::ServiceExt;

pub const USER_ID: &str = "test-user";

pub fn config(path: &PathBuf) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        database: DatabaseConfig {
            url: format!("sqlite:{}", path.to_str().unwrap()),
            max_connections: 1,
        },
        session: SessionConfig {
            user_id: USER_ID.to_owned(),
            name: "Test User".to_owned(),
            email: "test@forkplan.local".to_owned(),
        },
        observability: ObservabilityConfig::default(),
    }
}

/// Migrated database with the session user stored, not yet in a household.
pub async fn setup_app(path: PathBuf) -> anyhow::Result<(Router, forkplan_shared::State)> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    forkplan_db::migrate(&pool).await?;

    let db = forkplan_shared::State::single(pool);
    forkplan_household::Command(db.clone())
        .ensure_user(USER_ID, "Test User", "test@forkplan.local")
        .await?;

    let app = forkplan::create_app(AppState {
        config: config(&path),
        db: db.clone(),
    });

    Ok((app, db))
}

/// Same as [`setup_app`] with the session user owning a household.
pub async fn setup_household(path: PathBuf) -> anyhow::Result<(Router, forkplan_shared::State, String)> {
    let (app, db) = setup_app(path).await?;
    let household_id = forkplan_household::Command(db.clone())
        .create(
            forkplan_household::CreateInput {
                name: "Test household".to_owned(),
            },
            USER_ID,
        )
        .await?;

    Ok((app, db, household_id))
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> anyhow::Result<(StatusCode, serde_json::Value)> {
    let (status, bytes) = send_raw(app, method, uri, body).await?;
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };

    Ok((status, json))
}

pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> anyhow::Result<(StatusCode, Vec<u8>)> {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&json)?)
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(request.body(body)?).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes().to_vec();

    Ok((status, bytes))
}
