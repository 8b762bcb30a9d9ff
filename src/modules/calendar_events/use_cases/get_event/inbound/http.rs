use axum::{
    Json,
    extract::{Path, State},
};

use crate::modules::calendar_events::core::event::Event;
use crate::shared::infrastructure::http::error::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Event>, ApiError> {
    Ok(Json(state.event_store.get(&id).await?))
}
