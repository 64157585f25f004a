use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use std::sync::Arc;

use super::extract::ApiJson;
use super::validation::validate_event_id;
use super::{AddEventRequest, ApiError, AppState, StatusResponse};
use crate::models::event::Event;
use crate::services::EventDraft;

/// GET /events
pub async fn list_events(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Event>>, ApiError> {
    let events = state.events().list_events().await?;
    Ok(Json(events))
}

/// POST /add_event
pub async fn add_event(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<AddEventRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    let draft = EventDraft {
        title: payload.title,
        start: payload.start,
        end_date: payload.end_date,
        persons: payload.persons,
    };

    state.events().add_event(draft).await?;

    Ok(Json(StatusResponse::new("success")))
}

/// DELETE /delete_event/{id}
/// Ids that are not integers cannot name an event, so they are reported as missing.
pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<StatusResponse>, ApiError> {
    let Ok(Path(id)) = id else {
        return Err(ApiError::NotFound("Event not found".to_string()));
    };
    let id = validate_event_id(id)?;

    state.events().delete_event(id).await?;

    Ok(Json(StatusResponse::new("deleted")))
}
