// Ports define what the HTTP adapters need from the event store, without implementing it.
//
// Purpose
// - Describe the store operations as a trait so handlers code against `dyn EventStore`.
//
// Boundaries
// - No concrete storage here. The in memory adapter lives in the adapters layer.

use crate::modules::calendar_events::core::event::Event;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventStoreError {
    #[error("event not found: {id}")]
    NotFound { id: String },
}

#[async_trait]
pub trait EventStore: Send + Sync {
    /// Stores `event` under a freshly assigned id. Any caller supplied id is discarded.
    async fn insert(&self, event: Event) -> Event;

    /// Snapshot of every stored event, in no particular order.
    async fn get_all(&self) -> Vec<Event>;

    async fn get(&self, id: &str) -> Result<Event, EventStoreError>;

    /// Replaces the event stored under `id` wholesale. The stored id is always `id`.
    async fn update(&self, id: &str, event: Event) -> Result<Event, EventStoreError>;

    async fn delete(&self, id: &str) -> Result<(), EventStoreError>;
}
