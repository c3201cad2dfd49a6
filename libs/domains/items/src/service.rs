use std::sync::Arc;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, DeleteItem, Item, ItemFilter, ItemKind, UpdateItem};
use crate::repository::ItemRepository;

/// Service layer for the item catalog
#[derive(Clone)]
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

/// Presence check shared by every mutation: absent and blank are the same.
fn required(value: Option<String>, message: &str) -> ItemResult<String> {
    value
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| ItemError::Validation(message.to_string()))
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List items, optionally restricted by `?type=`; an empty `type` is no filter
    pub async fn list_items(&self, filter: ItemFilter) -> ItemResult<Vec<Item>> {
        let kind = filter
            .kind
            .as_deref()
            .map(str::trim)
            .filter(|kind| !kind.is_empty())
            .map(ItemKind::parse)
            .transpose()?;
        self.repository.list(kind).await
    }

    pub async fn list_kind(&self, kind: ItemKind) -> ItemResult<Vec<Item>> {
        self.repository.list(Some(kind)).await
    }

    pub async fn get_item(&self, id: &str) -> ItemResult<Item> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ItemError::NotFound(id.to_string()))
    }

    /// Get an item through a typed path; an item of another kind is not found
    pub async fn get_kind(&self, kind: ItemKind, id: &str) -> ItemResult<Item> {
        self.repository
            .get_by_id(id)
            .await?
            .filter(|item| item.kind() == kind)
            .ok_or_else(|| ItemError::KindNotFound {
                kind,
                id: id.to_string(),
            })
    }

    /// Validate and persist a new item under a fresh UUIDv7 id.
    ///
    /// Nothing is written when validation fails.
    pub async fn create_item(&self, input: CreateItem) -> ItemResult<Item> {
        let name = required(input.name, "Name and type are required")?;
        let kind = required(input.kind, "Name and type are required")?;
        let kind = ItemKind::parse(&kind)?;
        let details = input.fields.into_details(kind)?;

        let item = Item {
            id: uuid::Uuid::now_v7().to_string(),
            name,
            details,
        };

        self.repository.create(item).await
    }

    /// Rename an item and replace its specialization fields.
    ///
    /// Required fields follow the stored type; a `type` in the body must
    /// match it.
    pub async fn update_item(&self, input: UpdateItem) -> ItemResult<Item> {
        let id = required(input.id, "ID and name are required")?;
        let name = required(input.name, "ID and name are required")?;

        let existing = self.get_item(&id).await?;
        let stored = existing.kind();

        if let Some(requested) = input.kind.as_deref() {
            let requested = ItemKind::parse(requested)?;
            if requested != stored {
                return Err(ItemError::TypeChange { stored, requested });
            }
        }

        let details = input.fields.into_details(stored)?;

        self.repository
            .update(&id, name, details)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    pub async fn delete_item(&self, input: DeleteItem) -> ItemResult<String> {
        let id = required(input.id, "ID is required")?;

        if self.repository.delete(&id).await? {
            Ok(id)
        } else {
            Err(ItemError::NotFound(id))
        }
    }
}
