//! `SeaORM` implementation of the `EventService` trait.

use async_trait::async_trait;
use tracing::info;

use crate::db::Store;
use crate::models::event::{Event, NewEvent, PERSONS_DELIMITER, parse_date};
use crate::services::event_service::{EventDraft, EventError, EventService};

const MAX_TITLE_LEN: usize = 100;

pub struct SeaOrmEventService {
    store: Store,
}

impl SeaOrmEventService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    fn validate(draft: EventDraft) -> Result<NewEvent, EventError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(EventError::Validation("Title is required".to_string()));
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(EventError::Validation(format!(
                "Title must be {MAX_TITLE_LEN} characters or less"
            )));
        }

        if draft.start.trim().is_empty() {
            return Err(EventError::Validation("Start date is required".to_string()));
        }
        let start = parse_date(&draft.start).map_err(|_| {
            EventError::Validation(format!(
                "Invalid start date: {}. Expected YYYY-MM-DD",
                draft.start
            ))
        })?;

        let end = match draft.end_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_date(raw).map_err(|_| {
                EventError::Validation(format!("Invalid end date: {raw}. Expected YYYY-MM-DD"))
            })?),
        };

        if let Some(end) = end {
            if end < start {
                return Err(EventError::Validation(
                    "End date must not be before start date".to_string(),
                ));
            }
            if end.succ_opt().is_none() {
                return Err(EventError::Validation("End date is out of range".to_string()));
            }
        }

        let mut persons = Vec::with_capacity(draft.persons.len());
        for name in &draft.persons {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            if name.contains(PERSONS_DELIMITER) {
                return Err(EventError::Validation(format!(
                    "Person name must not contain '{PERSONS_DELIMITER}': {name}"
                )));
            }
            persons.push(name.to_string());
        }

        Ok(NewEvent {
            title: title.to_string(),
            start,
            end,
            persons,
        })
    }
}

#[async_trait]
impl EventService for SeaOrmEventService {
    async fn list_events(&self) -> Result<Vec<Event>, EventError> {
        Ok(self.store.list_events().await?)
    }

    async fn add_event(&self, draft: EventDraft) -> Result<Event, EventError> {
        let event = Self::validate(draft)?;
        Ok(self.store.add_event(&event).await?)
    }

    async fn delete_event(&self, id: i32) -> Result<(), EventError> {
        if !self.store.remove_event(id).await? {
            return Err(EventError::NotFound(id));
        }

        info!("Deleted event {id}");
        Ok(())
    }
}
