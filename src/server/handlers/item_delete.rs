use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::info;

use crate::metrics::OperationTimer;
use crate::server::AppState;

/// `DELETE /items/:id`
///
/// Always 204, whether or not the id existed.
pub async fn delete_item(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    let _timer = OperationTimer::new("delete_item");
    let removed = state.store.remove(&id).await;
    if state.store.is_empty().await {
        info!(item_id = %id, removed, "Deleted item, list is now empty");
    } else {
        let item_count = state.store.len().await;
        info!(item_id = %id, removed, item_count, "Deleted item");
    }
    StatusCode::NO_CONTENT
}
