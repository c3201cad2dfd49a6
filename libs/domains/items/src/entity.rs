use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::ItemError;
use crate::models::{Character, Item, ItemDetails, ItemKind, Planet, Vehicle};

/// Sea-ORM Entity for the single `items` table.
///
/// Every specialization column is nullable; which ones are set follows `type`
/// (enforced by CHECK constraints in the migration).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(column_name = "type")]
    pub kind: ItemKind,
    pub name: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub gender: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub birth_year: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub hair_color: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub eye_color: Option<String>,

    pub passengers: Option<i64>,
    pub cost_in_credits: Option<i64>,
    pub max_atmosphering_speed: Option<i64>,
    pub crew: Option<i64>,

    pub population: Option<i64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub climate: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub terrain: Option<String>,
    pub orbital_period: Option<i64>,
    pub rotation_period: Option<i64>,

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn column<T>(value: Option<T>, id: &str, name: &str) -> Result<T, ItemError> {
    value.ok_or_else(|| ItemError::Internal(format!("item {} has no {}", id, name)))
}

// Conversion from Sea-ORM Model to domain Item
impl TryFrom<Model> for Item {
    type Error = ItemError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let id = model.id.as_str();
        let details = match model.kind {
            ItemKind::Character => ItemDetails::Character(Character {
                gender: column(model.gender, id, "gender")?,
                birth_year: column(model.birth_year, id, "birth_year")?,
                hair_color: column(model.hair_color, id, "hair_color")?,
                eye_color: column(model.eye_color, id, "eye_color")?,
            }),
            ItemKind::Vehicle => ItemDetails::Vehicle(Vehicle {
                passengers: column(model.passengers, id, "passengers")?,
                cost_in_credits: column(model.cost_in_credits, id, "cost_in_credits")?,
                max_atmosphering_speed: column(
                    model.max_atmosphering_speed,
                    id,
                    "max_atmosphering_speed",
                )?,
                crew: column(model.crew, id, "crew")?,
            }),
            ItemKind::Planet => ItemDetails::Planet(Planet {
                population: column(model.population, id, "population")?,
                climate: column(model.climate, id, "climate")?,
                terrain: column(model.terrain, id, "terrain")?,
                orbital_period: column(model.orbital_period, id, "orbital_period")?,
                rotation_period: column(model.rotation_period, id, "rotation_period")?,
            }),
        };

        Ok(Self {
            id: model.id,
            name: model.name,
            details,
        })
    }
}

impl ActiveModel {
    /// Write the specialization columns, clearing those of the other kinds
    pub fn set_details(&mut self, details: ItemDetails) {
        self.kind = Set(details.kind());

        let (character, vehicle, planet) = match details {
            ItemDetails::Character(c) => (Some(c), None, None),
            ItemDetails::Vehicle(v) => (None, Some(v), None),
            ItemDetails::Planet(p) => (None, None, Some(p)),
        };

        self.gender = Set(character.as_ref().map(|c| c.gender.clone()));
        self.birth_year = Set(character.as_ref().map(|c| c.birth_year.clone()));
        self.hair_color = Set(character.as_ref().map(|c| c.hair_color.clone()));
        self.eye_color = Set(character.map(|c| c.eye_color));

        self.passengers = Set(vehicle.as_ref().map(|v| v.passengers));
        self.cost_in_credits = Set(vehicle.as_ref().map(|v| v.cost_in_credits));
        self.max_atmosphering_speed = Set(vehicle.as_ref().map(|v| v.max_atmosphering_speed));
        self.crew = Set(vehicle.map(|v| v.crew));

        self.population = Set(planet.as_ref().map(|p| p.population));
        self.climate = Set(planet.as_ref().map(|p| p.climate.clone()));
        self.terrain = Set(planet.as_ref().map(|p| p.terrain.clone()));
        self.orbital_period = Set(planet.as_ref().map(|p| p.orbital_period));
        self.rotation_period = Set(planet.map(|p| p.rotation_period));
    }
}

// Conversion from a new domain Item to Sea-ORM ActiveModel
impl From<Item> for ActiveModel {
    fn from(item: Item) -> Self {
        let now: DateTimeWithTimeZone = chrono::Utc::now().into();

        let mut active = ActiveModel {
            id: Set(item.id),
            name: Set(item.name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        active.set_details(item.details);
        active
    }
}
