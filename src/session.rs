use axum::{extract::FromRequestParts, http::request::Parts};

use crate::{error::AppError, routes::AppState};

/// The configured user, as currently stored.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub id: String,
    pub name: Option<String>,
    pub email: String,
    pub household_id: Option<String>,
}

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(user) = forkplan_household::Query(state.db.clone())
            .user(&state.config.session.user_id)
            .await?
        else {
            tracing::warn!(user_id = %state.config.session.user_id, "session user missing");
            return Err(AppError(forkplan_shared::Error::Unauthorized));
        };

        Ok(SessionUser {
            id: user.id,
            name: user.name,
            email: user.email,
            household_id: user.household_id,
        })
    }
}

/// Session of a user that belongs to a household. Rejects with 401 otherwise.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: String,
    pub household_id: String,
}

impl FromRequestParts<AppState> for Session {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = SessionUser::from_request_parts(parts, state).await?;

        let Some(household_id) = user.household_id else {
            return Err(AppError(forkplan_shared::Error::Unauthorized));
        };

        Ok(Session {
            user_id: user.id,
            household_id,
        })
    }
}
