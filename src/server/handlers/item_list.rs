use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;

use crate::metrics::OperationTimer;
use crate::server::response::json_response;
use crate::server::AppState;

/// `GET /items`
pub async fn list_items(State(state): State<AppState>) -> Response {
    let _timer = OperationTimer::new("list_items");
    let items = state.store.list().await;
    json_response(StatusCode::OK, &items)
}
