use async_trait::async_trait;

use crate::error::{FavoriteResult, UserResult};
use crate::models::{FavoriteEntry, NewUser, User};

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user whose password has already been hashed
    async fn create(&self, input: NewUser, password_hash: String) -> UserResult<User>;

    async fn get_by_id(&self, id: i32) -> UserResult<Option<User>>;

    /// All users with their favorite ids, by id
    async fn list(&self) -> UserResult<Vec<User>>;

    async fn exists(&self, id: i32) -> UserResult<bool>;

    async fn exists_by_email(&self, email: &str) -> UserResult<bool>;
}

/// Repository trait for the user/item favorites join
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Favorites of one user joined with item type and name
    async fn list_for_user(&self, user_id: i32) -> FavoriteResult<Vec<FavoriteEntry>>;

    async fn exists(&self, user_id: i32, item_id: &str) -> FavoriteResult<bool>;

    /// Fails with `AlreadyFavorite` if the pair exists
    async fn add(&self, user_id: i32, item_id: &str) -> FavoriteResult<()>;

    /// Returns whether a row was removed
    async fn remove(&self, user_id: i32, item_id: &str) -> FavoriteResult<bool>;
}
