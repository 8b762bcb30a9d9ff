use axum::{
    Json,
    extract::{Path, State},
};

use crate::modules::calendar_events::core::event::Event;
use crate::shared::infrastructure::http::error::ApiError;
use crate::shared::infrastructure::http::json_body::JsonBody;
use crate::shell::state::AppState;

// The body is decoded before the store is consulted, so a malformed body
// answers 400 even for an unknown id.
pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(event): JsonBody<Event>,
) -> Result<Json<Event>, ApiError> {
    let event = state.event_store.update(&id, event).await?;
    tracing::debug!(id = %event.id, "event replaced");
    Ok(Json(event))
}
