use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use tracing::info;

use crate::metrics::OperationTimer;
use crate::server::error_mapping::ApiError;
use crate::server::helpers::decode_payload;
use crate::server::response::json_response;
use crate::server::AppState;

/// `POST /items`
///
/// Any `Id` in the body is ignored; the store assigns one.
pub async fn create_item(State(state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    let _timer = OperationTimer::new("create_item");
    let payload = decode_payload(&body)?;
    let item = state.store.add(payload.name, payload.quantity).await?;
    let item_count = state.store.len().await;
    info!(item_id = %item.id, item_count, "Created item");
    Ok(json_response(StatusCode::OK, &item))
}
