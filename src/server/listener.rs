use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::constants::{ACTIONS_PATH, DELIVERY_HEADER, EVENT_HEADER, SMOKE_TEST_PATH, WEBHOOK_PATH};
use crate::dispatch::{Ack, DispatchError, Dispatcher};

#[derive(Debug, Clone)]
struct AppState {
    dispatcher: Dispatcher,
}

impl IntoResponse for Ack {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(json!({ "message": self.to_string() }))).into_response()
    }
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        let status = match self {
            DispatchError::Decode(_) => StatusCode::BAD_REQUEST,
            DispatchError::Render(_) => {
                tracing::error!("{self}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Ack, DispatchError> {
    // A missing event header is treated like any other event type we do not know.
    let event_type = header(&headers, EVENT_HEADER).unwrap_or_default();
    let delivery_id = header(&headers, DELIVERY_HEADER);
    state
        .dispatcher
        .dispatch(event_type, delivery_id, &body)
        .await
}

async fn handle_action(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Ack, DispatchError> {
    let delivery_id = header(&headers, DELIVERY_HEADER);
    state.dispatcher.dispatch_action(delivery_id, &body).await
}

async fn smoke_test() -> Json<serde_json::Value> {
    Json(json!({ "message": "relay is up" }))
}

pub(crate) fn listen(dispatcher: Dispatcher) -> Router {
    Router::new()
        .route(WEBHOOK_PATH, post(handle))
        .route(ACTIONS_PATH, post(handle_action))
        .route(SMOKE_TEST_PATH, get(smoke_test))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { dispatcher })
}
