use chrono::{DateTime, Utc};
use domain_items::ItemKind;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Registered user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "luke@rebellion.org")]
    pub email: String,
    /// Argon2 password hash (never exposed in API responses)
    #[serde(skip_serializing, default)]
    #[schema(ignore)]
    pub password_hash: String,
    /// Subscription date
    pub sub_date: DateTime<Utc>,
    #[schema(example = "Luke")]
    pub first_name: String,
    #[schema(example = "Skywalker")]
    pub last_name: String,
    /// Ids of the user's favorite items
    pub favorites: Vec<String>,
}

/// Input for provisioning a user (seeding and tests; not exposed over HTTP)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewUser {
    #[validate(email, length(max = 255))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
}

/// Body of `POST /users/favorites` and `DELETE /users/favorites`
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct FavoriteRequest {
    #[validate(required(message = "user_id and item_id are required"))]
    #[schema(example = 1)]
    pub user_id: Option<i32>,

    #[validate(
        required(message = "user_id and item_id are required"),
        length(min = 1, message = "user_id and item_id are required")
    )]
    #[schema(example = "0199f0c2-6d3a-7c41-9a40-2b1f6f0e8d11")]
    pub item_id: Option<String>,
}

/// Body of the `/users/favorites/{item_id}` variants
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct FavoriteUserRequest {
    #[validate(required(message = "user_id is required"))]
    #[schema(example = 1)]
    pub user_id: Option<i32>,
}

/// Whose favorites to list, from `?user_id=` or a JSON body
///
/// The query string wins when both carry a `user_id`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct FavoritesQuery {
    /// Whose favorites to list
    #[schema(example = 1)]
    pub user_id: Option<i32>,
}

/// One favorite with enough of the item to display it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteEntry {
    pub item_id: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    #[schema(example = "Millennium Falcon")]
    pub name: String,
}

/// Response of `GET /users/favorites`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserFavorites {
    pub user_id: i32,
    #[schema(example = "Luke")]
    pub first_name: String,
    pub favorites: Vec<FavoriteEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Favorite item added successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_never_serializes_password_hash() {
        let user = User {
            id: 1,
            email: "luke@rebellion.org".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            sub_date: Utc::now(),
            first_name: "Luke".to_string(),
            last_name: "Skywalker".to_string(),
            favorites: vec!["abc".to_string()],
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["favorites"], serde_json::json!(["abc"]));

        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            ["email", "favorites", "first_name", "id", "last_name", "sub_date"]
        );
    }

    #[test]
    fn test_favorite_request_requires_both_ids() {
        let only_user = FavoriteRequest {
            user_id: Some(1),
            item_id: None,
        };
        assert!(only_user.validate().is_err());

        let both = FavoriteRequest {
            user_id: Some(1),
            item_id: Some("abc".to_string()),
        };
        assert!(both.validate().is_ok());
    }

    #[test]
    fn test_favorite_entry_uses_type_key() {
        let entry = FavoriteEntry {
            item_id: "abc".to_string(),
            kind: ItemKind::Vehicle,
            name: "Millennium Falcon".to_string(),
        };

        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(json["type"], "vehicle");
    }

    #[test]
    fn test_new_user_validation() {
        let user = NewUser {
            email: "not-an-email".to_string(),
            password: "short".to_string(),
            first_name: "Leia".to_string(),
            last_name: "Organa".to_string(),
        };

        let errors = user.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }
}
