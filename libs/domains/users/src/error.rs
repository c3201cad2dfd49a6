use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use domain_items::ItemError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found")]
    NotFound(i32),

    #[error("User with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("{0}")]
    Validation(String),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

#[derive(Debug, Error)]
pub enum FavoriteError {
    #[error("{0}")]
    Validation(String),

    #[error("User not found")]
    UserNotFound(i32),

    #[error("User or item not found")]
    UserOrItemNotFound { user_id: i32, item_id: String },

    #[error("Item is already a favorite")]
    AlreadyFavorite { user_id: i32, item_id: String },

    #[error("Favorite not found")]
    NotFound { user_id: i32, item_id: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type FavoriteResult<T> = Result<T, FavoriteError>;

impl From<DbErr> for UserError {
    fn from(err: DbErr) -> Self {
        UserError::Internal(format!("Database error: {}", err))
    }
}

impl From<DbErr> for FavoriteError {
    fn from(err: DbErr) -> Self {
        FavoriteError::Internal(format!("Database error: {}", err))
    }
}

impl From<UserError> for FavoriteError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(id) => FavoriteError::UserNotFound(id),
            UserError::Validation(msg) => FavoriteError::Validation(msg),
            other => FavoriteError::Internal(other.to_string()),
        }
    }
}

// Item lookups only fail on storage errors
impl From<ItemError> for FavoriteError {
    fn from(err: ItemError) -> Self {
        FavoriteError::Internal(err.to_string())
    }
}

/// Convert UserError to AppError for standardized error responses
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        let message = err.to_string();
        match err {
            UserError::NotFound(_) => AppError::NotFound(message),
            UserError::DuplicateEmail(_) => AppError::Duplicate(message),
            UserError::Validation(_) => AppError::BadRequest(message),
            UserError::PasswordHash(_) | UserError::Internal(_) => {
                AppError::InternalServerError(message)
            }
        }
    }
}

impl From<FavoriteError> for AppError {
    fn from(err: FavoriteError) -> Self {
        let message = err.to_string();
        match err {
            FavoriteError::Validation(_) => AppError::BadRequest(message),
            FavoriteError::UserNotFound(_)
            | FavoriteError::UserOrItemNotFound { .. }
            | FavoriteError::NotFound { .. } => AppError::NotFound(message),
            FavoriteError::AlreadyFavorite { .. } => AppError::Duplicate(message),
            FavoriteError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl IntoResponse for FavoriteError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
