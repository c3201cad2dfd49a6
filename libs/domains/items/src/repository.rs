use async_trait::async_trait;

use crate::error::ItemResult;
use crate::models::{Item, ItemDetails, ItemKind};

/// Repository trait for Item persistence
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Persist a new item; the id is already assigned
    async fn create(&self, item: Item) -> ItemResult<Item>;

    async fn get_by_id(&self, id: &str) -> ItemResult<Option<Item>>;

    /// All items, optionally of one kind, oldest first
    async fn list(&self, kind: Option<ItemKind>) -> ItemResult<Vec<Item>>;

    /// Replace name and specialization fields; `None` if the item is gone
    async fn update(&self, id: &str, name: String, details: ItemDetails) -> ItemResult<Option<Item>>;

    /// Delete an item and, through the foreign key, its favorites.
    /// Returns whether a row was removed.
    async fn delete(&self, id: &str) -> ItemResult<bool>;
}
