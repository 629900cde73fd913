//! In-memory grocery list served as a JSON CRUD API.
//!
//! The [`store`] holds the items, [`server`] maps HTTP routes onto it, and
//! the remaining modules carry logging and CORS for the daemon binary.
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

pub mod cors;
pub mod http_logging;
pub mod logging;
pub mod metrics;
pub mod server;
pub mod store;

// Re-export commonly used types
pub use server::{build_router, AppState};
pub use store::{Item, ItemPatch, ItemStore, StoreError};
