use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    AuditEvent, AuditOutcome, ValidatedJson,
    errors::responses::{BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse},
};
use serde_json::json;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ItemResult;
use crate::models::{
    Character, CreateItem, DeleteItem, Item, ItemDetails, ItemFields, ItemFilter, ItemKind,
    ItemMutationResponse, MessageResponse, Planet, UpdateItem, Vehicle,
};
use crate::repository::ItemRepository;
use crate::service::ItemService;

pub const TAG: &str = "items";

/// OpenAPI documentation for the item catalog
#[derive(OpenApi)]
#[openapi(
    paths(
        list_items,
        get_item,
        create_item,
        update_item,
        delete_item,
        list_people,
        get_person,
        list_vehicles,
        get_vehicle,
        list_planets,
        get_planet,
    ),
    components(
        schemas(
            Item,
            ItemDetails,
            ItemKind,
            Character,
            Vehicle,
            Planet,
            ItemFields,
            CreateItem,
            UpdateItem,
            DeleteItem,
            ItemMutationResponse,
            MessageResponse,
        ),
        responses(NotFoundResponse, BadRequestValidationResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = TAG, description = "Characters, vehicles and planets")
    )
)]
pub struct ApiDoc;

/// Routes for `/items` plus the typed views `/people`, `/vehicles`, `/planets`.
///
/// Paths are absolute; merge the result at the root.
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/items",
            get(list_items)
                .post(create_item)
                .put(update_item)
                .delete(delete_item),
        )
        .route("/items/{id}", get(get_item))
        .route("/people", get(list_people))
        .route("/people/{id}", get(get_person))
        .route("/vehicles", get(list_vehicles))
        .route("/vehicles/{id}", get(get_vehicle))
        .route("/planets", get(list_planets))
        .route("/planets/{id}", get(get_planet))
        .with_state(shared_service)
}

type SharedService<R> = State<Arc<ItemService<R>>>;

/// List items, optionally of one type
#[utoipa::path(
    get,
    path = "/items",
    tag = TAG,
    params(ItemFilter),
    responses(
        (status = 200, description = "Items, oldest first (empty array when none)", body = Vec<Item>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): SharedService<R>,
    Query(filter): Query<ItemFilter>,
) -> ItemResult<Json<Vec<Item>>> {
    let items = service.list_items(filter).await?;
    Ok(Json(items))
}

/// Get any item by ID
#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = TAG,
    params(("id" = String, Path, description = "Item ID")),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): SharedService<R>,
    Path(id): Path<String>,
) -> ItemResult<Json<Item>> {
    let item = service.get_item(&id).await?;
    Ok(Json(item))
}

/// Create a character, vehicle or planet
#[utoipa::path(
    post,
    path = "/items",
    tag = TAG,
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item created successfully", body = ItemMutationResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): SharedService<R>,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<CreateItem>,
) -> ItemResult<impl IntoResponse> {
    let item = service.create_item(input).await?;

    AuditEvent::new("item.create", AuditOutcome::Success)
        .with_resource(format!("item:{}", item.id))
        .with_request_headers(&headers)
        .with_details(json!({ "type": item.kind().to_string(), "name": item.name }))
        .log();

    Ok((
        StatusCode::CREATED,
        Json(ItemMutationResponse {
            message: "Item created successfully".to_string(),
            item,
        }),
    ))
}

/// Rename an item and replace its type-specific fields
#[utoipa::path(
    put,
    path = "/items",
    tag = TAG,
    request_body = UpdateItem,
    responses(
        (status = 200, description = "Item updated successfully", body = ItemMutationResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_item<R: ItemRepository>(
    State(service): SharedService<R>,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<UpdateItem>,
) -> ItemResult<Json<ItemMutationResponse>> {
    let item = service.update_item(input).await?;

    AuditEvent::new("item.update", AuditOutcome::Success)
        .with_resource(format!("item:{}", item.id))
        .with_request_headers(&headers)
        .log();

    Ok(Json(ItemMutationResponse {
        message: "Item updated successfully".to_string(),
        item,
    }))
}

/// Delete an item together with every favorite pointing at it
#[utoipa::path(
    delete,
    path = "/items",
    tag = TAG,
    request_body = DeleteItem,
    responses(
        (status = 200, description = "Item deleted successfully", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(service): SharedService<R>,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<DeleteItem>,
) -> ItemResult<Json<MessageResponse>> {
    let id = service.delete_item(input).await?;

    AuditEvent::new("item.delete", AuditOutcome::Success)
        .with_resource(format!("item:{}", id))
        .with_request_headers(&headers)
        .log();

    Ok(Json(MessageResponse {
        message: "Item deleted successfully".to_string(),
    }))
}

/// List characters
#[utoipa::path(
    get,
    path = "/people",
    tag = TAG,
    responses(
        (status = 200, description = "Characters (empty array when none)", body = Vec<Item>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_people<R: ItemRepository>(
    State(service): SharedService<R>,
) -> ItemResult<Json<Vec<Item>>> {
    Ok(Json(service.list_kind(ItemKind::Character).await?))
}

/// Get a character by ID
#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = TAG,
    params(("id" = String, Path, description = "Character ID")),
    responses(
        (status = 200, description = "Character found", body = Item),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_person<R: ItemRepository>(
    State(service): SharedService<R>,
    Path(id): Path<String>,
) -> ItemResult<Json<Item>> {
    Ok(Json(service.get_kind(ItemKind::Character, &id).await?))
}

/// List vehicles
#[utoipa::path(
    get,
    path = "/vehicles",
    tag = TAG,
    responses(
        (status = 200, description = "Vehicles (empty array when none)", body = Vec<Item>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_vehicles<R: ItemRepository>(
    State(service): SharedService<R>,
) -> ItemResult<Json<Vec<Item>>> {
    Ok(Json(service.list_kind(ItemKind::Vehicle).await?))
}

/// Get a vehicle by ID
#[utoipa::path(
    get,
    path = "/vehicles/{id}",
    tag = TAG,
    params(("id" = String, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "Vehicle found", body = Item),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_vehicle<R: ItemRepository>(
    State(service): SharedService<R>,
    Path(id): Path<String>,
) -> ItemResult<Json<Item>> {
    Ok(Json(service.get_kind(ItemKind::Vehicle, &id).await?))
}

/// List planets
#[utoipa::path(
    get,
    path = "/planets",
    tag = TAG,
    responses(
        (status = 200, description = "Planets (empty array when none)", body = Vec<Item>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_planets<R: ItemRepository>(
    State(service): SharedService<R>,
) -> ItemResult<Json<Vec<Item>>> {
    Ok(Json(service.list_kind(ItemKind::Planet).await?))
}

/// Get a planet by ID
#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = TAG,
    params(("id" = String, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Planet found", body = Item),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_planet<R: ItemRepository>(
    State(service): SharedService<R>,
    Path(id): Path<String>,
) -> ItemResult<Json<Item>> {
    Ok(Json(service.get_kind(ItemKind::Planet, &id).await?))
}
