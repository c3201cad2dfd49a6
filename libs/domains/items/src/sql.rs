use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    entity,
    error::ItemResult,
    models::{Item, ItemDetails, ItemKind},
    repository::ItemRepository,
};

/// sea-orm backed repository; works on PostgreSQL and SQLite alike
#[derive(Clone)]
pub struct SqlItemRepository {
    base: BaseRepository<entity::Entity>,
}

impl SqlItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl ItemRepository for SqlItemRepository {
    async fn create(&self, item: Item) -> ItemResult<Item> {
        let active_model: entity::ActiveModel = item.into();

        let model = self.base.insert(active_model).await?;

        tracing::info!(item_id = %model.id, item_type = %model.kind, "Created item");
        model.try_into()
    }

    async fn get_by_id(&self, id: &str) -> ItemResult<Option<Item>> {
        let model = self.base.find_by_id(id.to_string()).await?;
        model.map(Item::try_from).transpose()
    }

    async fn list(&self, kind: Option<ItemKind>) -> ItemResult<Vec<Item>> {
        let mut query = entity::Entity::find();

        if let Some(kind) = kind {
            query = query.filter(entity::Column::Kind.eq(kind));
        }

        let models = query
            .order_by_asc(entity::Column::CreatedAt)
            .order_by_asc(entity::Column::Id)
            .all(self.base.db())
            .await?;

        models.into_iter().map(Item::try_from).collect()
    }

    async fn update(&self, id: &str, name: String, details: ItemDetails) -> ItemResult<Option<Item>> {
        let Some(model) = self.base.find_by_id(id.to_string()).await? else {
            return Ok(None);
        };

        let mut active_model = model.into_active_model();
        active_model.name = Set(name);
        active_model.set_details(details);
        active_model.updated_at = Set(chrono::Utc::now().into());

        let updated = self.base.update(active_model).await?;

        tracing::info!(item_id = %updated.id, "Updated item");
        updated.try_into().map(Some)
    }

    async fn delete(&self, id: &str) -> ItemResult<bool> {
        let rows = self.base.delete_by_id(id.to_string()).await?;

        if rows > 0 {
            tracing::info!(item_id = %id, "Deleted item");
        }
        Ok(rows > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Character, Planet, Vehicle};
    use test_utils::TestDatabase;

    fn planet(id: &str, name: &str) -> Item {
        Item {
            id: id.to_string(),
            name: name.to_string(),
            details: ItemDetails::Planet(Planet {
                population: 7_000_000_000,
                climate: "temperate".to_string(),
                terrain: "grasslands".to_string(),
                orbital_period: 364,
                rotation_period: 24,
            }),
        }
    }

    fn speeder(id: &str) -> Item {
        Item {
            id: id.to_string(),
            name: "T-16 skyhopper".to_string(),
            details: ItemDetails::Vehicle(Vehicle {
                passengers: 1,
                cost_in_credits: 14500,
                max_atmosphering_speed: 1200,
                crew: 1,
            }),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_round_trip() {
        let db = TestDatabase::sqlite().await;
        let repo = SqlItemRepository::new(db.connection());

        let created = repo.create(planet("p1", "Alderaan")).await.unwrap();
        let fetched = repo.get_by_id("p1").await.unwrap().unwrap();

        assert_eq!(created, fetched);
        // Populations beyond 32 bits survive storage
        assert!(matches!(
            fetched.details,
            ItemDetails::Planet(Planet { population: 7_000_000_000, .. })
        ));
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let db = TestDatabase::sqlite().await;
        let repo = SqlItemRepository::new(db.connection());

        assert!(repo.get_by_id("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_filters_by_kind() {
        let db = TestDatabase::sqlite().await;
        let repo = SqlItemRepository::new(db.connection());

        repo.create(planet("p1", "Hoth")).await.unwrap();
        repo.create(speeder("v1")).await.unwrap();
        repo.create(planet("p2", "Dagobah")).await.unwrap();

        let all = repo.list(None).await.unwrap();
        assert_eq!(all.len(), 3);

        let planets = repo.list(Some(ItemKind::Planet)).await.unwrap();
        assert_eq!(planets.len(), 2);
        assert!(planets.iter().all(|i| i.kind() == ItemKind::Planet));

        assert!(repo.list(Some(ItemKind::Character)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_name_and_fields() {
        let db = TestDatabase::sqlite().await;
        let repo = SqlItemRepository::new(db.connection());
        repo.create(speeder("v1")).await.unwrap();

        let details = ItemDetails::Vehicle(Vehicle {
            passengers: 2,
            cost_in_credits: 10,
            max_atmosphering_speed: 800,
            crew: 1,
        });
        let updated = repo
            .update("v1", "Snowspeeder".to_string(), details.clone())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "Snowspeeder");
        assert_eq!(updated.details, details);
        assert_eq!(repo.get_by_id("v1").await.unwrap().unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_missing_is_none() {
        let db = TestDatabase::sqlite().await;
        let repo = SqlItemRepository::new(db.connection());

        let result = repo
            .update("nope", "X".to_string(), speeder("nope").details)
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_reports_whether_row_existed() {
        let db = TestDatabase::sqlite().await;
        let repo = SqlItemRepository::new(db.connection());
        repo.create(speeder("v1")).await.unwrap();

        assert!(repo.delete("v1").await.unwrap());
        assert!(!repo.delete("v1").await.unwrap());
        assert_eq!(db.count_rows("items").await, 0);
    }

    #[tokio::test]
    async fn test_duplicate_id_is_internal_error() {
        let db = TestDatabase::sqlite().await;
        let repo = SqlItemRepository::new(db.connection());
        repo.create(speeder("v1")).await.unwrap();

        let err = repo.create(speeder("v1")).await.unwrap_err();
        assert!(matches!(err, crate::error::ItemError::Internal(_)));
    }

    #[tokio::test]
    async fn test_storage_rejects_rows_missing_specialization_columns() {
        let db = TestDatabase::sqlite().await;

        let missing_columns = db
            .execute("INSERT INTO items (id, type, name, gender) VALUES ('c1', 'character', 'Luke', 'male')")
            .await;
        assert!(missing_columns.is_err());

        let unknown_type = db
            .execute("INSERT INTO items (id, type, name) VALUES ('d1', 'droid', 'R2-D2')")
            .await;
        assert!(unknown_type.is_err());

        assert_eq!(db.count_rows("items").await, 0);
    }

    #[tokio::test]
    async fn test_character_round_trip() {
        let db = TestDatabase::sqlite().await;
        let repo = SqlItemRepository::new(db.connection());

        let luke = Item {
            id: "c1".to_string(),
            name: "Luke Skywalker".to_string(),
            details: ItemDetails::Character(Character {
                gender: "male".to_string(),
                birth_year: "19BBY".to_string(),
                hair_color: "blond".to_string(),
                eye_color: "blue".to_string(),
            }),
        };

        repo.create(luke.clone()).await.unwrap();
        assert_eq!(repo.get_by_id("c1").await.unwrap(), Some(luke));
    }
}
