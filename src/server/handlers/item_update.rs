use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use tracing::{debug, info};

use crate::metrics::OperationTimer;
use crate::server::error_mapping::ApiError;
use crate::server::helpers::{decode_payload, nonempty, nonzero};
use crate::server::response::json_response;
use crate::server::AppState;
use crate::store::ItemPatch;

/// `PUT /items/:id`
///
/// An empty `Name` or a zero `Quantity` leaves that field unchanged.
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let _timer = OperationTimer::new("update_item");

    // Unknown ids answer 404 before the body is looked at.
    if !state.store.contains(&id).await {
        return Err(ApiError::NotFound);
    }

    let payload = decode_payload(&body)?;
    let patch = ItemPatch {
        name: nonempty(payload.name),
        quantity: nonzero(payload.quantity),
    };
    if patch.is_empty() {
        debug!(item_id = %id, "Update carries no fields to change");
    }

    let item = state.store.update_fields(&id, patch).await?;
    info!(item_id = %item.id, "Updated item");
    Ok(json_response(StatusCode::OK, &item))
}
