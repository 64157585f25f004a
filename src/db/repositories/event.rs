use anyhow::{Context, Result};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::info;

use crate::entities::{events, prelude::*};
use crate::models::event::{Event, NewEvent, decode_persons, encode_persons, format_date};

/// Repository for calendar events
pub struct EventRepository {
    conn: DatabaseConnection,
}

impl EventRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(m: events::Model) -> Event {
        Event {
            id: m.id,
            title: m.title,
            start: m.start,
            end: m.end_date,
            persons: decode_persons(&m.persons),
        }
    }

    pub async fn list(&self) -> Result<Vec<Event>> {
        let rows = Events::find()
            .order_by_asc(events::Column::Start)
            .order_by_asc(events::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list events")?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn insert(&self, event: &NewEvent) -> Result<Event> {
        let active = events::ActiveModel {
            title: Set(event.title.clone()),
            start: Set(format_date(event.start)),
            end_date: Set(event.stored_end().map(format_date)),
            persons: Set(encode_persons(&event.persons)),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };

        let model = active
            .insert(&self.conn)
            .await
            .context("Failed to insert event")?;

        info!("Added event {} '{}'", model.id, model.title);
        Ok(Self::map_model(model))
    }

    /// Returns `false` when no event with this id exists.
    pub async fn delete(&self, id: i32) -> Result<bool> {
        let result = Events::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("Failed to delete event")?;

        Ok(result.rows_affected > 0)
    }
}
