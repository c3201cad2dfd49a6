use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

use crate::models::ItemKind;

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Item not found")]
    NotFound(String),

    /// Lookup through a typed path (`/people/{id}`) found nothing of that kind
    #[error("{} not found", .kind.label())]
    KindNotFound { kind: ItemKind, id: String },

    #[error("Invalid item type")]
    InvalidType(String),

    #[error("Item type cannot be changed")]
    TypeChange { stored: ItemKind, requested: ItemKind },

    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

impl From<DbErr> for ItemError {
    fn from(err: DbErr) -> Self {
        ItemError::Internal(format!("Database error: {}", err))
    }
}

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        let message = err.to_string();
        match err {
            ItemError::NotFound(_) | ItemError::KindNotFound { .. } => AppError::NotFound(message),
            ItemError::InvalidType(_) | ItemError::TypeChange { .. } | ItemError::Validation(_) => {
                AppError::BadRequest(message)
            }
            ItemError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
