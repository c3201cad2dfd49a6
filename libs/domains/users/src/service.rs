use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use domain_items::ItemRepository;
use std::sync::Arc;
use validator::Validate;

use crate::error::{FavoriteError, FavoriteResult, UserError, UserResult};
use crate::models::{FavoriteRequest, FavoritesQuery, NewUser, User, UserFavorites};
use crate::repository::{FavoriteRepository, UserRepository};

/// Service layer for reading and provisioning users
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.list().await
    }

    pub async fn get_user(&self, id: i32) -> UserResult<User> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    /// Provision a user with an argon2 password hash
    pub async fn create_user(&self, input: NewUser) -> UserResult<User> {
        input
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        if self.repository.exists_by_email(&input.email).await? {
            return Err(UserError::DuplicateEmail(input.email));
        }

        let password_hash = hash_password(&input.password)?;
        self.repository.create(input, password_hash).await
    }
}

fn hash_password(password: &str) -> UserResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| UserError::PasswordHash(e.to_string()))
}

/// Service layer for user favorites.
///
/// Needs users and items to check that both ends of a favorite exist.
pub struct FavoriteService<U, I, F>
where
    U: UserRepository,
    I: ItemRepository,
    F: FavoriteRepository,
{
    users: Arc<U>,
    items: Arc<I>,
    favorites: Arc<F>,
}

impl<U, I, F> Clone for FavoriteService<U, I, F>
where
    U: UserRepository,
    I: ItemRepository,
    F: FavoriteRepository,
{
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            items: Arc::clone(&self.items),
            favorites: Arc::clone(&self.favorites),
        }
    }
}

const PAIR_REQUIRED: &str = "user_id and item_id are required";

impl<U, I, F> FavoriteService<U, I, F>
where
    U: UserRepository,
    I: ItemRepository,
    F: FavoriteRepository,
{
    pub fn new(users: U, items: I, favorites: F) -> Self {
        Self {
            users: Arc::new(users),
            items: Arc::new(items),
            favorites: Arc::new(favorites),
        }
    }

    /// A user's favorites with item type and name
    pub async fn list_favorites(&self, query: FavoritesQuery) -> FavoriteResult<UserFavorites> {
        let user_id = query
            .user_id
            .ok_or_else(|| FavoriteError::Validation("user_id is required".to_string()))?;

        let user = self
            .users
            .get_by_id(user_id)
            .await?
            .ok_or(FavoriteError::UserNotFound(user_id))?;

        let favorites = self.favorites.list_for_user(user_id).await?;

        Ok(UserFavorites {
            user_id,
            first_name: user.first_name,
            favorites,
        })
    }

    /// Mark an item as a favorite; adding an existing pair is an error
    pub async fn add_favorite(&self, input: FavoriteRequest) -> FavoriteResult<(i32, String)> {
        let (user_id, item_id) = self.existing_pair(input).await?;

        if self.favorites.exists(user_id, &item_id).await? {
            return Err(FavoriteError::AlreadyFavorite { user_id, item_id });
        }

        self.favorites.add(user_id, &item_id).await?;
        Ok((user_id, item_id))
    }

    pub async fn remove_favorite(&self, input: FavoriteRequest) -> FavoriteResult<(i32, String)> {
        let (user_id, item_id) = self.existing_pair(input).await?;

        if !self.favorites.remove(user_id, &item_id).await? {
            return Err(FavoriteError::NotFound { user_id, item_id });
        }

        Ok((user_id, item_id))
    }

    /// Both ids present and both rows stored
    async fn existing_pair(&self, input: FavoriteRequest) -> FavoriteResult<(i32, String)> {
        let user_id = input
            .user_id
            .ok_or_else(|| FavoriteError::Validation(PAIR_REQUIRED.to_string()))?;
        let item_id = input
            .item_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| FavoriteError::Validation(PAIR_REQUIRED.to_string()))?;

        let user_exists = self.users.exists(user_id).await?;
        let item_exists = self.items.get_by_id(&item_id).await?.is_some();

        if !user_exists || !item_exists {
            return Err(FavoriteError::UserOrItemNotFound { user_id, item_id });
        }

        Ok((user_id, item_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FavoriteEntry;
    use crate::repository::{MockFavoriteRepository, MockUserRepository};
    use chrono::Utc;
    use domain_items::{Item, ItemDetails, ItemKind, MockItemRepository, Planet};

    fn leia() -> User {
        User {
            id: 1,
            email: "leia@rebellion.org".to_string(),
            password_hash: String::new(),
            sub_date: Utc::now(),
            first_name: "Leia".to_string(),
            last_name: "Organa".to_string(),
            favorites: vec![],
        }
    }

    fn alderaan() -> Item {
        Item {
            id: "p1".to_string(),
            name: "Alderaan".to_string(),
            details: ItemDetails::Planet(Planet {
                climate: "temperate".to_string(),
                terrain: "grasslands".to_string(),
                population: 2_000_000_000,
                orbital_period: 364,
                rotation_period: 24,
            }),
        }
    }

    fn request(user_id: Option<i32>, item_id: Option<&str>) -> FavoriteRequest {
        FavoriteRequest {
            user_id,
            item_id: item_id.map(str::to_string),
        }
    }

    fn items_with_alderaan() -> MockItemRepository {
        let mut items = MockItemRepository::new();
        items
            .expect_get_by_id()
            .returning(|id| Ok((id == "p1").then(alderaan)));
        items
    }

    fn existing_user() -> MockUserRepository {
        let mut users = MockUserRepository::new();
        users.expect_exists().returning(|id| Ok(id == 1));
        users
    }

    #[tokio::test]
    async fn test_create_user_hashes_password() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_exists_by_email().returning(|_| Ok(false));
        mock_repo
            .expect_create()
            .withf(|input, hash| hash.starts_with("$argon2") && !hash.contains(&input.password))
            .times(1)
            .returning(|input, hash| {
                Ok(User {
                    email: input.email,
                    password_hash: hash,
                    ..leia()
                })
            });

        let service = UserService::new(mock_repo);
        let user = service
            .create_user(NewUser {
                email: "leia@rebellion.org".to_string(),
                password: "help-me-obi-wan".to_string(),
                first_name: "Leia".to_string(),
                last_name: "Organa".to_string(),
            })
            .await
            .unwrap();

        assert!(user.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_create_user_rejects_duplicate_email() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_exists_by_email().returning(|_| Ok(true));
        mock_repo.expect_create().never();

        let service = UserService::new(mock_repo);
        let err = service
            .create_user(NewUser {
                email: "leia@rebellion.org".to_string(),
                password: "help-me-obi-wan".to_string(),
                first_name: "Leia".to_string(),
                last_name: "Organa".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, UserError::DuplicateEmail(_)));
    }

    #[tokio::test]
    async fn test_get_missing_user_is_not_found() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));

        let service = UserService::new(mock_repo);
        let err = service.get_user(42).await.unwrap_err();

        assert!(matches!(err, UserError::NotFound(42)));
    }

    #[tokio::test]
    async fn test_list_favorites_requires_user_id() {
        let service = FavoriteService::new(
            MockUserRepository::new(),
            MockItemRepository::new(),
            MockFavoriteRepository::new(),
        );

        let err = service
            .list_favorites(FavoritesQuery { user_id: None })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "user_id is required");
    }

    #[tokio::test]
    async fn test_list_favorites_of_unknown_user() {
        let mut users = MockUserRepository::new();
        users.expect_get_by_id().returning(|_| Ok(None));
        let mut favorites = MockFavoriteRepository::new();
        favorites.expect_list_for_user().never();

        let service = FavoriteService::new(users, MockItemRepository::new(), favorites);
        let err = service
            .list_favorites(FavoritesQuery { user_id: Some(7) })
            .await
            .unwrap_err();

        assert!(matches!(err, FavoriteError::UserNotFound(7)));
    }

    #[tokio::test]
    async fn test_list_favorites_includes_first_name() {
        let mut users = MockUserRepository::new();
        users.expect_get_by_id().returning(|_| Ok(Some(leia())));
        let mut favorites = MockFavoriteRepository::new();
        favorites.expect_list_for_user().returning(|_| {
            Ok(vec![FavoriteEntry {
                item_id: "p1".to_string(),
                kind: ItemKind::Planet,
                name: "Alderaan".to_string(),
            }])
        });

        let service = FavoriteService::new(users, MockItemRepository::new(), favorites);
        let listed = service
            .list_favorites(FavoritesQuery { user_id: Some(1) })
            .await
            .unwrap();

        assert_eq!(listed.first_name, "Leia");
        assert_eq!(listed.favorites.len(), 1);
    }

    #[tokio::test]
    async fn test_add_favorite_requires_both_ids() {
        let service = FavoriteService::new(
            MockUserRepository::new(),
            MockItemRepository::new(),
            MockFavoriteRepository::new(),
        );

        for input in [request(None, Some("p1")), request(Some(1), None), request(Some(1), Some(" "))] {
            let err = service.add_favorite(input).await.unwrap_err();
            assert_eq!(err.to_string(), "user_id and item_id are required");
        }
    }

    #[tokio::test]
    async fn test_add_favorite_for_missing_item() {
        let mut favorites = MockFavoriteRepository::new();
        favorites.expect_add().never();

        let service = FavoriteService::new(existing_user(), items_with_alderaan(), favorites);
        let err = service
            .add_favorite(request(Some(1), Some("nope")))
            .await
            .unwrap_err();

        assert!(matches!(err, FavoriteError::UserOrItemNotFound { .. }));
    }

    #[tokio::test]
    async fn test_add_favorite_for_missing_user() {
        let service = FavoriteService::new(
            existing_user(),
            items_with_alderaan(),
            MockFavoriteRepository::new(),
        );

        let err = service
            .add_favorite(request(Some(2), Some("p1")))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "User or item not found");
    }

    #[tokio::test]
    async fn test_add_existing_favorite_is_rejected() {
        let mut favorites = MockFavoriteRepository::new();
        favorites.expect_exists().returning(|_, _| Ok(true));
        favorites.expect_add().never();

        let service = FavoriteService::new(existing_user(), items_with_alderaan(), favorites);
        let err = service
            .add_favorite(request(Some(1), Some("p1")))
            .await
            .unwrap_err();

        assert!(matches!(err, FavoriteError::AlreadyFavorite { .. }));
    }

    #[tokio::test]
    async fn test_add_favorite_inserts_pair() {
        let mut favorites = MockFavoriteRepository::new();
        favorites.expect_exists().returning(|_, _| Ok(false));
        favorites
            .expect_add()
            .withf(|user_id, item_id| *user_id == 1 && item_id == "p1")
            .times(1)
            .returning(|_, _| Ok(()));

        let service = FavoriteService::new(existing_user(), items_with_alderaan(), favorites);
        let added = service
            .add_favorite(request(Some(1), Some("p1")))
            .await
            .unwrap();

        assert_eq!(added, (1, "p1".to_string()));
    }

    #[tokio::test]
    async fn test_remove_missing_favorite_is_not_found() {
        let mut favorites = MockFavoriteRepository::new();
        favorites.expect_remove().returning(|_, _| Ok(false));

        let service = FavoriteService::new(existing_user(), items_with_alderaan(), favorites);
        let err = service
            .remove_favorite(request(Some(1), Some("p1")))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Favorite not found");
    }

    #[tokio::test]
    async fn test_remove_favorite() {
        let mut favorites = MockFavoriteRepository::new();
        favorites.expect_remove().times(1).returning(|_, _| Ok(true));

        let service = FavoriteService::new(existing_user(), items_with_alderaan(), favorites);
        let removed = service
            .remove_favorite(request(Some(1), Some("p1")))
            .await
            .unwrap();

        assert_eq!(removed.1, "p1");
    }
}
