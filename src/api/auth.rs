use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Redirect},
};
use std::sync::Arc;
use tower_sessions::Session;

use super::extract::ApiJson;
use super::session::{self, LOGIN_PATH};
use super::validation::{validate_password, validate_username};
use super::{ApiError, AppState, CredentialsRequest, StatusResponse};
use crate::services::AuthError;

/// POST /register
/// Create an account. A taken username is rejected with 400.
pub async fn register(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<CredentialsRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    let username = validate_username(&payload.username)?;
    let password = validate_password(&payload.password)?;

    state.auth().register(username, password).await?;

    Ok(Json(StatusResponse::new("registered")))
}

/// POST /login
/// Verify credentials and bind the session to the user
pub async fn login(
    State(state): State<Arc<AppState>>,
    session: Session,
    ApiJson(payload): ApiJson<CredentialsRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    let username = validate_username(&payload.username)?;
    if payload.password.is_empty() {
        return Err(AuthError::InvalidCredentials.into());
    }

    let user = state.auth().login(username, &payload.password).await?;

    session::bind_user(&session, user.id).await?;
    tracing::Span::current().record("user_id", user.id);
    tracing::info!("User logged in: {}", user.username);

    Ok(Json(StatusResponse::new("logged_in")))
}

/// GET /logout
/// Drop the user binding and send the browser back to the login page
pub async fn logout(session: Session) -> Result<impl IntoResponse, ApiError> {
    session::clear_user(&session).await?;
    Ok(Redirect::to(LOGIN_PATH))
}
