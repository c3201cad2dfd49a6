//! JSON extractors with `{"error": ...}` rejections.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, OptionalFromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use validator::Validate;

/// `Json<T>` whose rejection is an [`AppError`] instead of axum's plain-text body.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = <Json<T> as FromRequest<S>>::from_request(req, state).await?;
        Ok(JsonBody(data))
    }
}

/// `Option<JsonBody<T>>` is `None` when the request carries no `Content-Type`;
/// a declared body that fails to parse is still rejected.
impl<T, S> OptionalFromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Option<Self>, Self::Rejection> {
        if !req.headers().contains_key(CONTENT_TYPE) {
            return Ok(None);
        }
        let body = <JsonBody<T> as FromRequest<S>>::from_request(req, state).await?;
        Ok(Some(body))
    }
}

/// JSON extractor that also runs `validator` rules.
///
/// The first failing rule's message becomes the `error` field of the 400
/// response; all failing rules are listed under `details`.
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct DeleteItem {
///     #[validate(required(message = "ID is required"))]
///     id: Option<String>,
/// }
///
/// async fn delete_item(ValidatedJson(input): ValidatedJson<DeleteItem>) { /* ... */ }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let JsonBody(data) = <JsonBody<T> as FromRequest<S>>::from_request(req, state).await?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}
