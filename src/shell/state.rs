use crate::modules::calendar_events::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use crate::modules::calendar_events::core::ports::EventStore;
use crate::shared::infrastructure::id_generator::IdGenerator;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub event_store: Arc<dyn EventStore>,
    pub index_path: PathBuf,
}

impl AppState {
    pub fn in_memory(id_generator: Arc<dyn IdGenerator>, index_path: impl Into<PathBuf>) -> Self {
        Self {
            event_store: Arc::new(InMemoryEventStore::new(id_generator)),
            index_path: index_path.into(),
        }
    }
}
