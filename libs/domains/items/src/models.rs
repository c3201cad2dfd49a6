use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::error::{ItemError, ItemResult};

/// Item specialization, stored in the `type` column
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ItemKind {
    #[sea_orm(string_value = "character")]
    Character,
    #[sea_orm(string_value = "vehicle")]
    Vehicle,
    #[sea_orm(string_value = "planet")]
    Planet,
}

impl ItemKind {
    /// Parse a request-supplied discriminator
    pub fn parse(value: &str) -> ItemResult<Self> {
        value
            .parse()
            .map_err(|_| ItemError::InvalidType(value.to_string()))
    }

    /// Capitalised name used in messages ("Character not found")
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Character => "Character",
            ItemKind::Vehicle => "Vehicle",
            ItemKind::Planet => "Planet",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Character {
    #[schema(example = "male")]
    pub gender: String,
    #[schema(example = "19BBY")]
    pub birth_year: String,
    #[schema(example = "blond")]
    pub hair_color: String,
    #[schema(example = "blue")]
    pub eye_color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Vehicle {
    #[schema(example = 1)]
    pub passengers: i64,
    #[schema(example = 14750)]
    pub cost_in_credits: i64,
    #[schema(example = 650)]
    pub max_atmosphering_speed: i64,
    #[schema(example = 2)]
    pub crew: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Planet {
    #[schema(example = 200000)]
    pub population: i64,
    #[schema(example = "arid")]
    pub climate: String,
    #[schema(example = "desert")]
    pub terrain: String,
    #[schema(example = 304)]
    pub orbital_period: i64,
    #[schema(example = 23)]
    pub rotation_period: i64,
}

/// Specialization data; the `type` tag selects the variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemDetails {
    Character(Character),
    Vehicle(Vehicle),
    Planet(Planet),
}

impl ItemDetails {
    pub fn kind(&self) -> ItemKind {
        match self {
            ItemDetails::Character(_) => ItemKind::Character,
            ItemDetails::Vehicle(_) => ItemKind::Vehicle,
            ItemDetails::Planet(_) => ItemKind::Planet,
        }
    }
}

/// Catalog item as returned by the API.
///
/// Serializes flat: `id`, `name`, `type` and the specialization's own fields,
/// nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    #[schema(example = "0199f0c2-6d3a-7c41-9a40-2b1f6f0e8d11")]
    pub id: String,
    #[schema(example = "Luke Skywalker")]
    pub name: String,
    #[serde(flatten)]
    pub details: ItemDetails,
}

impl Item {
    pub fn kind(&self) -> ItemKind {
        self.details.kind()
    }
}

/// Specialization fields as they arrive in a request body.
///
/// All optional here; [`ItemFields::into_details`] enforces the set the item
/// type requires. Fields of other types are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ItemFields {
    pub gender: Option<String>,
    pub birth_year: Option<String>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,

    pub passengers: Option<i64>,
    pub cost_in_credits: Option<i64>,
    pub max_atmosphering_speed: Option<i64>,
    pub crew: Option<i64>,

    pub population: Option<i64>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub orbital_period: Option<i64>,
    pub rotation_period: Option<i64>,
}

const CHARACTER_FIELDS_REQUIRED: &str =
    "Gender, birth year, hair color, and eye color are required for characters";
const VEHICLE_FIELDS_REQUIRED: &str =
    "Passengers, cost in credits, max atmosphering speed, and crew are required for vehicles";
const PLANET_FIELDS_REQUIRED: &str =
    "Climate, terrain, population, orbital_period, and rotation_period are required for planets";

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl ItemFields {
    /// Build the specialization for `kind`.
    ///
    /// Strings must be present and non-blank, integers present (zero is a value).
    pub fn into_details(self, kind: ItemKind) -> ItemResult<ItemDetails> {
        match kind {
            ItemKind::Character => {
                let (Some(gender), Some(birth_year), Some(hair_color), Some(eye_color)) = (
                    non_empty(self.gender),
                    non_empty(self.birth_year),
                    non_empty(self.hair_color),
                    non_empty(self.eye_color),
                ) else {
                    return Err(ItemError::Validation(CHARACTER_FIELDS_REQUIRED.to_string()));
                };
                Ok(ItemDetails::Character(Character {
                    gender,
                    birth_year,
                    hair_color,
                    eye_color,
                }))
            }
            ItemKind::Vehicle => {
                let (Some(passengers), Some(cost_in_credits), Some(max_atmosphering_speed), Some(crew)) = (
                    self.passengers,
                    self.cost_in_credits,
                    self.max_atmosphering_speed,
                    self.crew,
                ) else {
                    return Err(ItemError::Validation(VEHICLE_FIELDS_REQUIRED.to_string()));
                };
                Ok(ItemDetails::Vehicle(Vehicle {
                    passengers,
                    cost_in_credits,
                    max_atmosphering_speed,
                    crew,
                }))
            }
            ItemKind::Planet => {
                let (
                    Some(population),
                    Some(climate),
                    Some(terrain),
                    Some(orbital_period),
                    Some(rotation_period),
                ) = (
                    self.population,
                    non_empty(self.climate),
                    non_empty(self.terrain),
                    self.orbital_period,
                    self.rotation_period,
                )
                else {
                    return Err(ItemError::Validation(PLANET_FIELDS_REQUIRED.to_string()));
                };
                Ok(ItemDetails::Planet(Planet {
                    population,
                    climate,
                    terrain,
                    orbital_period,
                    rotation_period,
                }))
            }
        }
    }
}

/// Body of `POST /items`
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateItem {
    #[validate(
        required(message = "Name and type are required"),
        length(min = 1, message = "Name and type are required")
    )]
    #[schema(example = "Luke Skywalker")]
    pub name: Option<String>,

    /// One of `character`, `vehicle`, `planet`
    #[serde(rename = "type")]
    #[validate(
        required(message = "Name and type are required"),
        length(min = 1, message = "Name and type are required")
    )]
    #[schema(example = "character")]
    pub kind: Option<String>,

    #[serde(flatten)]
    pub fields: ItemFields,
}

/// Body of `PUT /items`.
///
/// `type` may be sent but must match the stored item's type.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateItem {
    #[validate(
        required(message = "ID and name are required"),
        length(min = 1, message = "ID and name are required")
    )]
    pub id: Option<String>,

    #[validate(
        required(message = "ID and name are required"),
        length(min = 1, message = "ID and name are required")
    )]
    pub name: Option<String>,

    #[serde(rename = "type")]
    pub kind: Option<String>,

    #[serde(flatten)]
    pub fields: ItemFields,
}

/// Body of `DELETE /items`
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct DeleteItem {
    #[validate(
        required(message = "ID is required"),
        length(min = 1, message = "ID is required")
    )]
    pub id: Option<String>,
}

/// Query filters for listing items
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemFilter {
    /// Restrict to one specialization
    #[serde(rename = "type")]
    #[param(example = "planet")]
    pub kind: Option<String>,
}

/// `{"message": ..., "item": ...}` returned by create and update
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemMutationResponse {
    #[schema(example = "Item created successfully")]
    pub message: String,
    pub item: Item,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Item deleted successfully")]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn luke() -> Item {
        Item {
            id: "1".to_string(),
            name: "Luke Skywalker".to_string(),
            details: ItemDetails::Character(Character {
                gender: "male".to_string(),
                birth_year: "19BBY".to_string(),
                hair_color: "blond".to_string(),
                eye_color: "blue".to_string(),
            }),
        }
    }

    #[test]
    fn test_item_serializes_flat() {
        let json = serde_json::to_value(luke()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "1",
                "name": "Luke Skywalker",
                "type": "character",
                "gender": "male",
                "birth_year": "19BBY",
                "hair_color": "blond",
                "eye_color": "blue",
            })
        );
    }

    #[test]
    fn test_item_deserializes_from_flat_json() {
        let json = serde_json::to_string(&luke()).unwrap();
        let item: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(item, luke());
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(ItemKind::parse("planet").unwrap(), ItemKind::Planet);
        assert!(matches!(
            ItemKind::parse("starship"),
            Err(ItemError::InvalidType(t)) if t == "starship"
        ));
        // Discriminators are lowercase only
        assert!(ItemKind::parse("Planet").is_err());
    }

    #[test]
    fn test_character_fields_reject_blank_string() {
        let fields = ItemFields {
            gender: Some("male".to_string()),
            birth_year: Some("19BBY".to_string()),
            hair_color: Some("  ".to_string()),
            eye_color: Some("blue".to_string()),
            ..Default::default()
        };

        let err = fields.into_details(ItemKind::Character).unwrap_err();
        assert_eq!(err.to_string(), CHARACTER_FIELDS_REQUIRED);
    }

    #[test]
    fn test_vehicle_fields_accept_zero() {
        let fields = ItemFields {
            passengers: Some(0),
            cost_in_credits: Some(0),
            max_atmosphering_speed: Some(0),
            crew: Some(0),
            ..Default::default()
        };

        let details = fields.into_details(ItemKind::Vehicle).unwrap();
        assert_eq!(details.kind(), ItemKind::Vehicle);
    }

    #[test]
    fn test_planet_requires_every_field() {
        let fields = ItemFields {
            population: Some(200_000),
            climate: Some("arid".to_string()),
            terrain: Some("desert".to_string()),
            orbital_period: Some(304),
            ..Default::default()
        };

        let err = fields.into_details(ItemKind::Planet).unwrap_err();
        assert_eq!(err.to_string(), PLANET_FIELDS_REQUIRED);
    }

    #[test]
    fn test_fields_of_other_kinds_are_ignored() {
        let fields = ItemFields {
            passengers: Some(4),
            cost_in_credits: Some(10),
            max_atmosphering_speed: Some(100),
            crew: Some(1),
            climate: Some("temperate".to_string()),
            ..Default::default()
        };

        let details = fields.into_details(ItemKind::Vehicle).unwrap();
        let json = serde_json::to_value(details).unwrap();
        assert!(json.get("climate").is_none());
    }

    #[test]
    fn test_create_item_reads_type_and_flat_fields() {
        let body = serde_json::json!({
            "name": "Hoth",
            "type": "planet",
            "population": 0,
            "climate": "frozen",
            "terrain": "tundra",
            "orbital_period": 549,
            "rotation_period": 23,
        });

        let input: CreateItem = serde_json::from_value(body).unwrap();
        assert!(input.validate().is_ok());
        assert_eq!(input.kind.as_deref(), Some("planet"));
        assert_eq!(input.fields.population, Some(0));
    }

    #[test]
    fn test_create_item_requires_name_and_type() {
        let input = CreateItem {
            name: Some(String::new()),
            kind: Some("planet".to_string()),
            ..Default::default()
        };
        assert!(input.validate().is_err());

        let input = CreateItem {
            name: Some("Hoth".to_string()),
            ..Default::default()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_integer_fields_reject_strings() {
        let body = serde_json::json!({"name": "X-wing", "type": "vehicle", "crew": "one"});
        assert!(serde_json::from_value::<CreateItem>(body).is_err());
    }
}
