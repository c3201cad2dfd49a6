use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{
    AuditEvent, AuditOutcome, JsonBody, PathParam, QueryParams, ValidatedJson,
    errors::responses::{BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse},
};
use domain_items::ItemRepository;
use serde_json::json;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{FavoriteResult, UserResult};
use crate::models::{
    FavoriteEntry, FavoriteRequest, FavoriteUserRequest, FavoritesQuery, MessageResponse, User,
    UserFavorites,
};
use crate::repository::{FavoriteRepository, UserRepository};
use crate::service::{FavoriteService, UserService};

pub const TAG: &str = "users";
pub const FAVORITES_TAG: &str = "favorites";

/// OpenAPI documentation for users and their favorites
#[derive(OpenApi)]
#[openapi(
    paths(
        list_users,
        get_user,
        list_favorites,
        add_favorite,
        remove_favorite,
        add_favorite_by_path,
        remove_favorite_by_path,
    ),
    components(
        schemas(
            User,
            FavoriteEntry,
            FavoriteRequest,
            FavoritesQuery,
            FavoriteUserRequest,
            UserFavorites,
            MessageResponse,
        ),
        responses(NotFoundResponse, BadRequestValidationResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = TAG, description = "Registered users (read-only)"),
        (name = FAVORITES_TAG, description = "Favorite items per user")
    )
)]
pub struct ApiDoc;

/// Read-only `/users` routes
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/{id}", get(get_user))
        .with_state(Arc::new(service))
}

/// `/users/favorites` routes; `user_id` is taken from the caller as-is
pub fn favorites_router<U, I, F>(service: FavoriteService<U, I, F>) -> Router
where
    U: UserRepository + 'static,
    I: ItemRepository + 'static,
    F: FavoriteRepository + 'static,
{
    Router::new()
        .route(
            "/users/favorites",
            get(list_favorites).post(add_favorite).delete(remove_favorite),
        )
        .route(
            "/users/favorites/{item_id}",
            post(add_favorite_by_path).delete(remove_favorite_by_path),
        )
        .with_state(Arc::new(service))
}

type SharedUsers<R> = State<Arc<UserService<R>>>;
type SharedFavorites<U, I, F> = State<Arc<FavoriteService<U, I, F>>>;

/// List all users with their favorite item ids
#[utoipa::path(
    get,
    path = "/users",
    tag = TAG,
    responses(
        (status = 200, description = "Users by id (empty array when none)", body = Vec<User>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): SharedUsers<R>,
) -> UserResult<Json<Vec<User>>> {
    let users = service.list_users().await?;
    Ok(Json(users))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_user<R: UserRepository>(
    State(service): SharedUsers<R>,
    PathParam(id): PathParam<i32>,
) -> UserResult<Json<User>> {
    let user = service.get_user(id).await?;
    Ok(Json(user))
}

/// List a user's favorites with item type and name
#[utoipa::path(
    get,
    path = "/users/favorites",
    tag = FAVORITES_TAG,
    params(FavoritesQuery),
    request_body(
        content = FavoritesQuery,
        description = "Optional; used when the query has no user_id",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "The user's favorites", body = UserFavorites),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_favorites<U, I, F>(
    State(service): SharedFavorites<U, I, F>,
    QueryParams(query): QueryParams<FavoritesQuery>,
    body: Option<JsonBody<FavoritesQuery>>,
) -> FavoriteResult<Json<UserFavorites>>
where
    U: UserRepository,
    I: ItemRepository,
    F: FavoriteRepository,
{
    let user_id = query
        .user_id
        .or_else(|| body.and_then(|JsonBody(body)| body.user_id));
    let favorites = service.list_favorites(FavoritesQuery { user_id }).await?;
    Ok(Json(favorites))
}

/// Add an item to a user's favorites
#[utoipa::path(
    post,
    path = "/users/favorites",
    tag = FAVORITES_TAG,
    request_body = FavoriteRequest,
    responses(
        (status = 201, description = "Favorite item added successfully", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn add_favorite<U, I, F>(
    State(service): SharedFavorites<U, I, F>,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<FavoriteRequest>,
) -> FavoriteResult<impl IntoResponse>
where
    U: UserRepository,
    I: ItemRepository,
    F: FavoriteRepository,
{
    add(&service, &headers, input).await
}

/// Remove an item from a user's favorites
#[utoipa::path(
    delete,
    path = "/users/favorites",
    tag = FAVORITES_TAG,
    request_body = FavoriteRequest,
    responses(
        (status = 200, description = "Favorite item removed successfully", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn remove_favorite<U, I, F>(
    State(service): SharedFavorites<U, I, F>,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<FavoriteRequest>,
) -> FavoriteResult<Json<MessageResponse>>
where
    U: UserRepository,
    I: ItemRepository,
    F: FavoriteRepository,
{
    remove(&service, &headers, input).await
}

/// Add a favorite with the item id in the path
#[utoipa::path(
    post,
    path = "/users/favorites/{item_id}",
    tag = FAVORITES_TAG,
    params(("item_id" = String, Path, description = "Item ID")),
    request_body = FavoriteUserRequest,
    responses(
        (status = 201, description = "Favorite item added successfully", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn add_favorite_by_path<U, I, F>(
    State(service): SharedFavorites<U, I, F>,
    headers: HeaderMap,
    PathParam(item_id): PathParam<String>,
    ValidatedJson(body): ValidatedJson<FavoriteUserRequest>,
) -> FavoriteResult<impl IntoResponse>
where
    U: UserRepository,
    I: ItemRepository,
    F: FavoriteRepository,
{
    let input = FavoriteRequest {
        user_id: body.user_id,
        item_id: Some(item_id),
    };
    add(&service, &headers, input).await
}

/// Remove a favorite with the item id in the path
#[utoipa::path(
    delete,
    path = "/users/favorites/{item_id}",
    tag = FAVORITES_TAG,
    params(("item_id" = String, Path, description = "Item ID")),
    request_body = FavoriteUserRequest,
    responses(
        (status = 200, description = "Favorite item removed successfully", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn remove_favorite_by_path<U, I, F>(
    State(service): SharedFavorites<U, I, F>,
    headers: HeaderMap,
    PathParam(item_id): PathParam<String>,
    ValidatedJson(body): ValidatedJson<FavoriteUserRequest>,
) -> FavoriteResult<Json<MessageResponse>>
where
    U: UserRepository,
    I: ItemRepository,
    F: FavoriteRepository,
{
    let input = FavoriteRequest {
        user_id: body.user_id,
        item_id: Some(item_id),
    };
    remove(&service, &headers, input).await
}

async fn add<U, I, F>(
    service: &FavoriteService<U, I, F>,
    headers: &HeaderMap,
    input: FavoriteRequest,
) -> FavoriteResult<(StatusCode, Json<MessageResponse>)>
where
    U: UserRepository,
    I: ItemRepository,
    F: FavoriteRepository,
{
    let claimed = input.clone();
    let result = service.add_favorite(input).await;
    audit("favorite.add", &claimed, result.is_ok(), headers);
    result?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Favorite item added successfully")),
    ))
}

async fn remove<U, I, F>(
    service: &FavoriteService<U, I, F>,
    headers: &HeaderMap,
    input: FavoriteRequest,
) -> FavoriteResult<Json<MessageResponse>>
where
    U: UserRepository,
    I: ItemRepository,
    F: FavoriteRepository,
{
    let claimed = input.clone();
    let result = service.remove_favorite(input).await;
    audit("favorite.remove", &claimed, result.is_ok(), headers);
    result?;

    Ok(Json(MessageResponse::new("Favorite item removed successfully")))
}

/// Record who claimed to change which favorite
fn audit(action: &str, claimed: &FavoriteRequest, succeeded: bool, headers: &HeaderMap) {
    let outcome = if succeeded {
        AuditOutcome::Success
    } else {
        AuditOutcome::Failure
    };

    let mut event = AuditEvent::new(action, outcome)
        .with_actor(claimed.user_id.map(|id| id.to_string()))
        .with_request_headers(headers)
        .with_details(json!({ "user_id": claimed.user_id }));

    if let Some(item_id) = &claimed.item_id {
        event = event.with_resource(format!("item:{}", item_id));
    }

    event.log();
}
