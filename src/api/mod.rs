use anyhow::Context;
use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer, cookie::Key};
use tracing::warn;

use crate::config::Config;
use crate::services::{AuthService, EventService};
use crate::state::SharedState;

mod assets;
pub mod auth;
pub mod events;
mod error;
mod extract;
mod observability;
pub mod pages;
pub mod session;
mod system;
mod types;
mod validation;

pub use error::ApiError;
pub use session::CurrentUser;
pub use types::*;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.shared.config
    }

    #[must_use]
    pub fn store(&self) -> &crate::db::Store {
        &self.shared.store
    }

    #[must_use]
    pub fn auth(&self) -> &Arc<dyn AuthService> {
        &self.shared.auth_service
    }

    #[must_use]
    pub fn events(&self) -> &Arc<dyn EventService> {
        &self.shared.event_service
    }
}

#[must_use]
pub fn create_app_state(shared: Arc<SharedState>) -> Arc<AppState> {
    Arc::new(AppState { shared })
}

pub async fn create_app_state_from_config(config: Config) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    Ok(create_app_state(shared))
}

fn session_key(config: &Config) -> anyhow::Result<Key> {
    match &config.server.secret_key {
        Some(secret) => Key::try_from(secret.as_bytes())
            .map_err(|e| anyhow::anyhow!("{e}"))
            .context("Invalid session secret key"),
        None => {
            warn!("No secret key configured; sessions will not survive a restart");
            Ok(Key::generate())
        }
    }
}

pub fn router(state: Arc<AppState>) -> anyhow::Result<Router> {
    let server = &state.config().server;

    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(server.secure_cookies)
        .with_http_only(true)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::minutes(
            server.session_inactivity_minutes,
        )))
        .with_signed(session_key(state.config())?);

    let protected_routes = Router::new()
        .route("/", get(pages::index))
        .route("/profile", get(pages::profile))
        .route_layer(middleware::from_fn(session::require_login));

    // Event routes are open to anonymous requests.
    let router = Router::new()
        .merge(protected_routes)
        .route("/login", get(pages::login_page).post(auth::login))
        .route("/register", post(auth::register))
        .route("/logout", get(auth::logout))
        .route("/events", get(events::list_events))
        .route("/add_event", post(events::add_event))
        .route("/delete_event/{id}", delete(events::delete_event))
        .route("/cleaning", get(pages::cleaning))
        .route("/polls", get(pages::polls))
        .route("/todo", get(pages::todo))
        .route("/health", get(system::health))
        .fallback(assets::serve_asset)
        .layer(session_layer)
        .layer(middleware::from_fn(observability::security_headers_middleware))
        .layer(middleware::from_fn(observability::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(router)
}
