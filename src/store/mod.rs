//! In-memory grocery item store.
//!
//! The store is an explicitly constructed handle shared by every request
//! handler. All reads and writes go through one lock, and the identifier
//! sequence lives under the same lock as the items it numbers.
mod error;
mod item_store;
mod types;

pub use error::StoreError;
pub use item_store::ItemStore;
pub use types::{Item, ItemPatch};
