//! Server-rendered pages. The HTML is embedded at build time; the only
//! dynamic value is the username on the profile page.

use axum::{
    Extension,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use rust_embed::RustEmbed;
use std::sync::Arc;
use tower_sessions::Session;

use super::session::{CurrentUser, LOGIN_PATH};
use super::{ApiError, AppState};

#[derive(RustEmbed)]
#[folder = "templates"]
struct Templates;

const USERNAME_PLACEHOLDER: &str = "{{ username }}";

fn template(name: &str) -> Result<String, ApiError> {
    let file = Templates::get(name)
        .ok_or_else(|| ApiError::internal(format!("Missing template: {name}")))?;

    String::from_utf8(file.data.into_owned())
        .map_err(|e| ApiError::internal(format!("Template {name} is not UTF-8: {e}")))
}

fn page(name: &str) -> Result<Html<String>, ApiError> {
    template(name).map(Html)
}

#[must_use]
pub fn render_profile(template: &str, username: &str) -> String {
    template.replace(
        USERNAME_PLACEHOLDER,
        &html_escape::encode_text(username),
    )
}

/// GET / (login required)
pub async fn index() -> Result<Html<String>, ApiError> {
    page("index.html")
}

/// GET /login
pub async fn login_page() -> Result<Html<String>, ApiError> {
    page("login.html")
}

/// GET /profile (login required)
///
/// A session pointing at a user that no longer exists is discarded.
pub async fn profile(
    State(state): State<Arc<AppState>>,
    Extension(current): Extension<CurrentUser>,
    session: Session,
) -> Result<Response, ApiError> {
    let Some(user) = state.auth().get_user(current.id).await? else {
        tracing::warn!("Session bound to unknown user {}", current.id);
        session.flush().await?;
        return Ok(Redirect::to(LOGIN_PATH).into_response());
    };

    let html = render_profile(&template("profile.html")?, &user.username);
    Ok(Html(html).into_response())
}

/// GET /cleaning
pub async fn cleaning() -> Result<Html<String>, ApiError> {
    page("cleaning.html")
}

/// GET /polls
pub async fn polls() -> Result<Html<String>, ApiError> {
    page("polls.html")
}

/// GET /todo
pub async fn todo() -> Result<Html<String>, ApiError> {
    page("todo.html")
}
