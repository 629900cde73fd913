use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;

use crate::metrics::OperationTimer;
use crate::server::error_mapping::ApiError;
use crate::server::response::json_response;
use crate::server::AppState;

/// `GET /items/:id`
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let _timer = OperationTimer::new("get_item");
    let item = state.store.find_by_id(&id).await?;
    Ok(json_response(StatusCode::OK, &item))
}
