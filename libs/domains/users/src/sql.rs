use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, SqlErr,
};

use crate::entity::{favorite, user};
use crate::error::{FavoriteError, FavoriteResult, UserResult};
use crate::models::{FavoriteEntry, NewUser, User};
use crate::repository::{FavoriteRepository, UserRepository};

/// sea-orm backed user repository
#[derive(Clone)]
pub struct SqlUserRepository {
    base: BaseRepository<user::Entity>,
}

impl SqlUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn create(&self, input: NewUser, password_hash: String) -> UserResult<User> {
        let active_model = user::ActiveModel {
            email: Set(input.email),
            password_hash: Set(password_hash),
            sub_date: Set(chrono::Utc::now().into()),
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            ..Default::default()
        };

        let model = self.base.insert(active_model).await?;

        tracing::info!(user_id = model.id, "Created user");
        Ok(model.into_user(Vec::new()))
    }

    async fn get_by_id(&self, id: i32) -> UserResult<Option<User>> {
        let rows = user::Entity::find_by_id(id)
            .find_with_related(favorite::Entity)
            .all(self.base.db())
            .await?;

        Ok(rows
            .into_iter()
            .next()
            .map(|(model, favorites)| model.into_user(favorites)))
    }

    async fn list(&self) -> UserResult<Vec<User>> {
        let rows = user::Entity::find()
            .order_by_asc(user::Column::Id)
            .find_with_related(favorite::Entity)
            .all(self.base.db())
            .await?;

        Ok(rows
            .into_iter()
            .map(|(model, favorites)| model.into_user(favorites))
            .collect())
    }

    async fn exists(&self, id: i32) -> UserResult<bool> {
        Ok(self.base.find_by_id(id).await?.is_some())
    }

    async fn exists_by_email(&self, email: &str) -> UserResult<bool> {
        let count = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .count(self.base.db())
            .await?;

        Ok(count > 0)
    }
}

/// sea-orm backed favorites repository
#[derive(Clone)]
pub struct SqlFavoriteRepository {
    base: BaseRepository<favorite::Entity>,
}

impl SqlFavoriteRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl FavoriteRepository for SqlFavoriteRepository {
    async fn list_for_user(&self, user_id: i32) -> FavoriteResult<Vec<FavoriteEntry>> {
        let rows = favorite::Entity::find()
            .filter(favorite::Column::UserId.eq(user_id))
            .order_by_asc(favorite::Column::ItemId)
            .find_also_related(domain_items::entity::Entity)
            .all(self.base.db())
            .await?;

        // The item FK cascades, so every favorite has its item
        Ok(rows
            .into_iter()
            .filter_map(|(favorite, item)| {
                item.map(|item| FavoriteEntry {
                    item_id: favorite.item_id,
                    kind: item.kind,
                    name: item.name,
                })
            })
            .collect())
    }

    async fn exists(&self, user_id: i32, item_id: &str) -> FavoriteResult<bool> {
        let found = self.base.find_by_id((user_id, item_id.to_string())).await?;
        Ok(found.is_some())
    }

    async fn add(&self, user_id: i32, item_id: &str) -> FavoriteResult<()> {
        let active_model = favorite::ActiveModel {
            user_id: Set(user_id),
            item_id: Set(item_id.to_string()),
        };

        self.base
            .insert(active_model)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => FavoriteError::AlreadyFavorite {
                    user_id,
                    item_id: item_id.to_string(),
                },
                _ => e.into(),
            })?;

        tracing::info!(user_id, item_id = %item_id, "Added favorite");
        Ok(())
    }

    async fn remove(&self, user_id: i32, item_id: &str) -> FavoriteResult<bool> {
        let rows = self.base.delete_by_id((user_id, item_id.to_string())).await?;

        if rows > 0 {
            tracing::info!(user_id, item_id = %item_id, "Removed favorite");
        }
        Ok(rows > 0)
    }
}
