// In memory implementation of the EventStore port.
//
// Responsibilities
// - Keep events in a map keyed by id, for the lifetime of the process.
// - Assign ids on insert through the configured IdGenerator.
// - Guard the map with a readers/writer lock: reads share it, writes own it.

use crate::modules::calendar_events::core::event::Event;
use crate::modules::calendar_events::core::ports::{EventStore, EventStoreError};
use crate::shared::infrastructure::id_generator::IdGenerator;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct InMemoryEventStore {
    events: RwLock<HashMap<String, Event>>,
    id_generator: Arc<dyn IdGenerator>,
}

impl InMemoryEventStore {
    pub fn new(id_generator: Arc<dyn IdGenerator>) -> Self {
        Self {
            events: RwLock::new(HashMap::new()),
            id_generator,
        }
    }

    pub async fn len(&self) -> usize {
        self.events.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.events.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl EventStore for InMemoryEventStore {
    async fn insert(&self, event: Event) -> Event {
        let event = event.with_id(self.id_generator.next_id());
        // Same-second ids overwrite the earlier entry.
        self.events
            .write()
            .await
            .insert(event.id.clone(), event.clone());
        event
    }

    async fn get_all(&self) -> Vec<Event> {
        self.events.read().await.values().cloned().collect()
    }

    async fn get(&self, id: &str) -> Result<Event, EventStoreError> {
        self.events
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| EventStoreError::NotFound { id: id.to_string() })
    }

    async fn update(&self, id: &str, event: Event) -> Result<Event, EventStoreError> {
        let mut guard = self.events.write().await;
        let Some(stored) = guard.get_mut(id) else {
            return Err(EventStoreError::NotFound { id: id.to_string() });
        };
        *stored = event.with_id(id);
        Ok(stored.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), EventStoreError> {
        self.events
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| EventStoreError::NotFound { id: id.to_string() })
    }
}
