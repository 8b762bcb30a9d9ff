use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::shared::infrastructure::http::error::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.event_store.delete(&id).await?;
    tracing::debug!(%id, "event deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod delete_event_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::delete,
    };
    use tower::ServiceExt;

    use crate::shell::state::AppState;
    use crate::tests::fixtures::state::{body_bytes, make_test_state, seed_lunch};

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/api/events/{id}", delete(handle))
            .with_state(state)
    }

    #[tokio::test]
    async fn it_should_return_204_with_an_empty_body() {
        let state = make_test_state();
        let lunch = seed_lunch(&state).await;

        let response = app(state.clone())
            .oneshot(
                Request::delete(format!("/api/events/{}", lunch.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(body_bytes(response).await.is_empty());
        assert!(state.event_store.get(&lunch.id).await.is_err());
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_id() {
        let response = app(make_test_state())
            .oneshot(
                Request::delete("/api/events/does-not-exist")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_bytes(response).await, b"Event not found\n");
    }
}
