use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// Single-table inheritance: every specialization column is nullable and the
// CHECK constraints require the columns belonging to the row's `type`.
// Written as plain SQL because the statement must be identical on PostgreSQL
// and SQLite, and SQLite cannot add constraints after CREATE TABLE.
const CREATE_ITEMS: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id VARCHAR(36) NOT NULL PRIMARY KEY,
    type VARCHAR(16) NOT NULL,
    name TEXT NOT NULL,

    gender TEXT,
    birth_year TEXT,
    hair_color TEXT,
    eye_color TEXT,

    passengers BIGINT,
    cost_in_credits BIGINT,
    max_atmosphering_speed BIGINT,
    crew BIGINT,

    population BIGINT,
    climate TEXT,
    terrain TEXT,
    orbital_period BIGINT,
    rotation_period BIGINT,

    created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT CURRENT_TIMESTAMP,

    CONSTRAINT chk_items_type
        CHECK (type IN ('character', 'vehicle', 'planet')),
    CONSTRAINT chk_items_character
        CHECK (type <> 'character' OR (
            gender IS NOT NULL AND birth_year IS NOT NULL
            AND hair_color IS NOT NULL AND eye_color IS NOT NULL)),
    CONSTRAINT chk_items_vehicle
        CHECK (type <> 'vehicle' OR (
            passengers IS NOT NULL AND cost_in_credits IS NOT NULL
            AND max_atmosphering_speed IS NOT NULL AND crew IS NOT NULL)),
    CONSTRAINT chk_items_planet
        CHECK (type <> 'planet' OR (
            population IS NOT NULL AND climate IS NOT NULL AND terrain IS NOT NULL
            AND orbital_period IS NOT NULL AND rotation_period IS NOT NULL))
)
"#;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.get_connection().execute_unprepared(CREATE_ITEMS).await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_items_type")
                    .table(Items::Table)
                    .col(Items::Type)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_items_created_at")
                    .table(Items::Table)
                    .col(Items::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Items::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Items {
    Table,
    Type,
    CreatedAt,
}
