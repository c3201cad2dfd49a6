//! Items Domain
//!
//! The catalog of characters, vehicles and planets. All three share one id
//! space and one table; the `type` discriminator decides which fields an
//! item carries.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← /items, /people, /vehicles, /planets
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Presence checks, type rules, id generation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + sea-orm implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Item, ItemDetails, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_items::{handlers, ItemService, SqlItemRepository};
//! # fn example(db: sea_orm::DatabaseConnection) {
//! let service = ItemService::new(SqlItemRepository::new(db));
//! let router: axum::Router = handlers::router(service);
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod sql;

// Re-export commonly used types
pub use error::{ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use models::{
    Character, CreateItem, DeleteItem, Item, ItemDetails, ItemFields, ItemFilter, ItemKind,
    Planet, UpdateItem, Vehicle,
};
#[cfg(any(test, feature = "mock"))]
pub use repository::MockItemRepository;
pub use repository::ItemRepository;
pub use service::ItemService;
pub use sql::SqlItemRepository;
