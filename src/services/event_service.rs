//! Domain service for calendar events.

use thiserror::Error;

use crate::models::event::Event;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("Event {0} not found")]
    NotFound(i32),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for EventError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for EventError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Unvalidated event input as submitted by the calendar widget.
#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    pub title: String,
    pub start: String,
    /// Inclusive last day; empty or `None` means a single-day event.
    pub end_date: Option<String>,
    pub persons: Vec<String>,
}

#[async_trait::async_trait]
pub trait EventService: Send + Sync {
    /// All events, persons expanded into a list.
    async fn list_events(&self) -> Result<Vec<Event>, EventError>;

    /// Validates and stores a new event. A supplied end date is stored
    /// shifted by one day so the calendar can treat it as exclusive.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::Validation`] for a missing title/start, a
    /// malformed date, an end before the start, or a person name containing
    /// the storage delimiter.
    async fn add_event(&self, draft: EventDraft) -> Result<Event, EventError>;

    /// # Errors
    ///
    /// Returns [`EventError::NotFound`] if no event has this id.
    async fn delete_event(&self, id: i32) -> Result<(), EventError>;
}
