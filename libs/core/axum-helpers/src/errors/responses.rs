//! Reusable OpenAPI response types for the error cases handlers document.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "error": "Internal server error",
        "code": "INTERNAL_ERROR"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - missing or invalid input",
    content_type = "application/json",
    example = json!({
        "error": "Name and type are required",
        "code": "VALIDATION_ERROR"
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - resource already exists",
    content_type = "application/json",
    example = json!({
        "error": "Item is already a favorite",
        "code": "DUPLICATE"
    })
)]
pub struct DuplicateResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "error": "Item not found",
        "code": "NOT_FOUND"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Service Unavailable",
    content_type = "application/json",
    example = json!({
        "error": "Service temporarily unavailable",
        "code": "SERVICE_UNAVAILABLE"
    })
)]
pub struct ServiceUnavailableResponse(pub ErrorResponse);
