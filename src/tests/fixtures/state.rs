// Application state backed by a fresh in memory store with sequential ids.

use crate::modules::calendar_events::core::event::Event;
use crate::shell::state::AppState;
use crate::tests::fixtures::events::event_builder::EventBuilder;
use crate::tests::fixtures::id_generators::sequence::SequenceIdGenerator;
use axum::body::Body;
use axum::response::Response;
use http_body_util::BodyExt;
use std::sync::Arc;

pub fn make_test_state() -> AppState {
    AppState::in_memory(Arc::new(SequenceIdGenerator::new()), "index.html")
}

pub async fn seed_lunch(state: &AppState) -> Event {
    state.event_store.insert(EventBuilder::new().build()).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}
