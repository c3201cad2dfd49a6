//! Users Domain
//!
//! Registered users and the items they mark as favorites. Users are
//! read-only over HTTP; provisioning (with Argon2 password hashing) is a
//! service call used for seeding and tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← /users, /users/favorites, audit events
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  Services   │  ← UserService, FavoriteService (checks user and item exist)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← UserRepository, FavoriteRepository (+ sea-orm impls)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← User, FavoriteEntry, request DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_items::SqlItemRepository;
//! use domain_users::{handlers, FavoriteService, SqlFavoriteRepository, SqlUserRepository, UserService};
//! # fn example(db: sea_orm::DatabaseConnection) {
//! let users: axum::Router = handlers::router(UserService::new(SqlUserRepository::new(db.clone())));
//! let favorites: axum::Router = handlers::favorites_router(FavoriteService::new(
//!     SqlUserRepository::new(db.clone()),
//!     SqlItemRepository::new(db.clone()),
//!     SqlFavoriteRepository::new(db),
//! ));
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
pub use error::{FavoriteError, FavoriteResult, UserError, UserResult};
pub use handlers::ApiDoc;
pub use models::{
    FavoriteEntry, FavoriteRequest, FavoriteUserRequest, FavoritesQuery, NewUser, User,
    UserFavorites,
};
pub use repository::{FavoriteRepository, UserRepository};
pub use service::{FavoriteService, UserService};
pub use sql::{SqlFavoriteRepository, SqlUserRepository};
