use utoipa::{Modify, OpenApi};

/// Combined documentation served at `/api-docs/openapi.json`
#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse, axum_helpers::ErrorCode),
        responses(
            axum_helpers::errors::responses::DuplicateResponse,
            axum_helpers::errors::responses::ServiceUnavailableResponse
        )
    ),
    info(
        title = "Holocron API",
        version = "0.1.0",
        description = "Catalog of characters, vehicles and planets, with per-user favorites"
    ),
    modifiers(&DomainDocs)
)]
pub struct ApiDoc;

/// Domain routes are mounted at the root, so their docs merge without a prefix
struct DomainDocs;

impl Modify for DomainDocs {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.merge(domain_items::ApiDoc::openapi());
        openapi.merge(domain_users::ApiDoc::openapi());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merged_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/items",
            "/items/{id}",
            "/people/{id}",
            "/vehicles/{id}",
            "/planets/{id}",
            "/users",
            "/users/{id}",
            "/users/favorites",
            "/users/favorites/{item_id}",
        ] {
            assert!(paths.contains(&expected), "missing {}", expected);
        }
    }
}
