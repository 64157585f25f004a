//! Binding between a browser session and an authenticated user.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use super::ApiError;

pub const USER_ID_KEY: &str = "user_id";

pub const LOGIN_PATH: &str = "/login";

/// The authenticated user of the current request, inserted by [`require_login`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i32,
}

pub async fn current_user(session: &Session) -> Result<Option<CurrentUser>, ApiError> {
    Ok(session
        .get::<i32>(USER_ID_KEY)
        .await?
        .map(|id| CurrentUser { id }))
}

/// Binds the session to `user_id`, issuing a fresh session id first.
pub async fn bind_user(session: &Session, user_id: i32) -> Result<(), ApiError> {
    session.cycle_id().await?;
    session.insert(USER_ID_KEY, user_id).await?;
    Ok(())
}

/// Removes the user binding. A session without one is left as is.
pub async fn clear_user(session: &Session) -> Result<(), ApiError> {
    session.remove::<i32>(USER_ID_KEY).await?;
    Ok(())
}

/// Redirects to the login page unless the session is bound to a user.
pub async fn require_login(
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(user) = current_user(&session).await? else {
        return Ok(Redirect::to(LOGIN_PATH).into_response());
    };

    tracing::Span::current().record("user_id", user.id);
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}
