use axum::{
    Router,
    http::StatusCode,
    middleware,
    response::Response,
    routing::{get, get_service},
};
use tower_http::{services::ServeFile, trace::TraceLayer};

use crate::modules::calendar_events::use_cases::create_event::inbound::http as create_http;
use crate::modules::calendar_events::use_cases::delete_event::inbound::http as delete_http;
use crate::modules::calendar_events::use_cases::get_event::inbound::http as get_http;
use crate::modules::calendar_events::use_cases::list_events::inbound::http as list_http;
use crate::modules::calendar_events::use_cases::update_event::inbound::http as update_http;
use crate::shared::infrastructure::http::error::plain_text_error;
use crate::shell::cors::cors;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let index = ServeFile::new(&state.index_path);

    Router::new()
        .route(
            "/api/events",
            get(list_http::handle).post(create_http::handle),
        )
        .route(
            "/api/events/{id}",
            get(get_http::handle)
                .put(update_http::handle)
                .delete(delete_http::handle),
        )
        .route("/", get_service(index))
        .fallback(page_not_found)
        .layer(middleware::from_fn(cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn page_not_found() -> Response {
    plain_text_error(StatusCode::NOT_FOUND, "404 page not found")
}
