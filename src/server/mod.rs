//! HTTP surface: routing table, shared state and request handlers.
pub mod error_mapping;
pub mod handlers;
pub mod helpers;
pub mod response;

use axum::routing::get;
use axum::Router;

use crate::http_logging::HttpLoggingLayer;
use crate::store::ItemStore;

/// State shared by every handler.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub store: ItemStore,
}

impl AppState {
    #[must_use]
    pub fn new(store: ItemStore) -> Self {
        Self { store }
    }
}

/// Build the item routes with request logging applied.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/items",
            get(handlers::list_items).post(handlers::create_item),
        )
        .route(
            "/items/:id",
            get(handlers::get_item)
                .put(handlers::update_item)
                .delete(handlers::delete_item),
        )
        .layer(HttpLoggingLayer)
        .with_state(state)
}
