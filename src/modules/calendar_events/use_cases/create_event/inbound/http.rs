use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::modules::calendar_events::core::event::Event;
use crate::shared::infrastructure::http::json_body::JsonBody;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    JsonBody(event): JsonBody<Event>,
) -> impl IntoResponse {
    let event = state.event_store.insert(event).await;
    tracing::debug!(id = %event.id, "event created");
    (StatusCode::CREATED, Json(event))
}
