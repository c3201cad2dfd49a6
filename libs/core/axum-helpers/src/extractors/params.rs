//! Path and query extractors with `{"error": ...}` rejections.

use crate::errors::AppError;
use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

/// `Path<T>` whose rejection is an [`AppError`].
///
/// ```ignore
/// async fn get_user(PathParam(id): PathParam<i32>) { /* ... */ }
/// ```
pub struct PathParam<T>(pub T);

impl<T, S> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(PathParam(value))
    }
}

/// `Query<T>` whose rejection is an [`AppError`].
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(QueryParams(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::StatusCode, routing::get};
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct UserQuery {
        user_id: Option<i32>,
    }

    async fn by_path(PathParam(id): PathParam<i32>) -> String {
        id.to_string()
    }

    async fn by_query(QueryParams(query): QueryParams<UserQuery>) -> String {
        query.user_id.map(|id| id.to_string()).unwrap_or_default()
    }

    fn app() -> Router {
        Router::new()
            .route("/users/{id}", get(by_path))
            .route("/favorites", get(by_query))
    }

    async fn call(uri: &str) -> (StatusCode, axum::body::Bytes) {
        let request = axum::http::Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        (status, response.into_body().collect().await.unwrap().to_bytes())
    }

    #[tokio::test]
    async fn test_path_param_parses() {
        let (status, body) = call("/users/7").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(&body[..], b"7");
    }

    #[tokio::test]
    async fn test_bad_path_param_is_json_400() {
        let (status, body) = call("/users/luke").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], "INVALID_PATH");
    }

    #[tokio::test]
    async fn test_query_params_optional_field() {
        let (status, body) = call("/favorites").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());

        let (_, body) = call("/favorites?user_id=3").await;
        assert_eq!(&body[..], b"3");
    }

    #[tokio::test]
    async fn test_bad_query_is_json_400() {
        let (status, body) = call("/favorites?user_id=luke").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], "INVALID_QUERY");
    }
}
