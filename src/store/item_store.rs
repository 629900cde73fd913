use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use super::error::StoreError;
use super::types::{Item, ItemPatch};

/// Prefix of every generated item id (`item-1`, `item-2`, ...).
const ITEM_ID_PREFIX: &str = "item-";

#[derive(Debug, Default)]
struct StoreState {
    items: Vec<Item>,
    /// Last sequence number handed out. Never decreases.
    last_seq: u64,
}

impl StoreState {
    fn find_mut(&mut self, id: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }
}

/// Shared handle to the process-lifetime list of grocery items.
///
/// Cloning the handle is cheap; all clones see the same items.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    state: Arc<RwLock<StoreState>>,
}

impl ItemStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All items in insertion order.
    pub async fn list(&self) -> Vec<Item> {
        self.state.read().await.items.clone()
    }

    /// First item whose id equals `id`.
    pub async fn find_by_id(&self, id: &str) -> Result<Item, StoreError> {
        let state = self.state.read().await;
        state
            .items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id))
    }

    pub async fn contains(&self, id: &str) -> bool {
        self.state.read().await.items.iter().any(|item| item.id == id)
    }

    /// Append a new item with the next sequence id.
    ///
    /// Ids are never reused, even after the item they named is removed.
    pub async fn add(&self, name: String, quantity: i64) -> Result<Item, StoreError> {
        let mut state = self.state.write().await;
        let seq = state
            .last_seq
            .checked_add(1)
            .ok_or(StoreError::SequenceExhausted)?;
        state.last_seq = seq;

        let item = Item {
            id: format!("{ITEM_ID_PREFIX}{seq}"),
            name,
            quantity,
        };
        state.items.push(item.clone());
        debug!(item_id = %item.id, "Item added");
        Ok(item)
    }

    /// Overwrite the fields set in `patch` on the item with the given id.
    pub async fn update_fields(&self, id: &str, patch: ItemPatch) -> Result<Item, StoreError> {
        let mut state = self.state.write().await;
        let item = state.find_mut(id).ok_or_else(|| StoreError::not_found(id))?;
        patch.apply(item);
        Ok(item.clone())
    }

    /// Remove every item with the given id. Returns how many were removed.
    pub async fn remove(&self, id: &str) -> usize {
        let mut state = self.state.write().await;
        let before = state.items.len();
        state.items.retain(|item| item.id != id);
        before.saturating_sub(state.items.len())
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.items.is_empty()
    }
}

#[cfg(test)]
#[path = "item_store_tests.rs"]
mod item_store_tests;
