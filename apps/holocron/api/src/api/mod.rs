//! HTTP surface: domain routers, docs, sitemap, liveness and readiness.

pub mod health;
pub mod items;
pub mod sitemap;
pub mod users;

use axum::{Router, routing::get};
use axum_helpers::server::{create_router, health_router};

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Domain routes plus the sitemap; every path is absolute, so they merge at
/// the root.
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(items::router(state))
        .merge(users::router(state))
        .merge(users::favorites_router(state))
        .merge(sitemap::router(state.config.app))
}

/// `/ready` with the real database check
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

/// The complete application: routes wrapped with docs and middleware,
/// plus `/health` and `/ready`
pub fn app(state: &AppState) -> std::io::Result<Router> {
    let router = create_router::<ApiDoc>(routes(state))?;

    Ok(router
        .merge(health_router(state.config.app))
        .merge(ready_router(state.clone())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::{app_info, server::ServerConfig};
    use database::sql::DatabaseConfig;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use test_utils::TestDatabase;
    use tower::ServiceExt;

    fn state(db: &TestDatabase) -> AppState {
        AppState {
            config: Config {
                app: app_info!(),
                database: DatabaseConfig::sqlite_in_memory(),
                server: ServerConfig::default(),
                environment: Environment::Development,
                run_migrations: false,
            },
            db: db.connection(),
        }
    }

    fn test_app(state: &AppState) -> Router {
        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || app(state).unwrap())
    }

    fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder().method(method).uri(uri);
        match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    fn luke() -> Value {
        json!({
            "name": "Luke Skywalker",
            "type": "character",
            "gender": "male",
            "birth_year": "19BBY",
            "hair_color": "blond",
            "eye_color": "blue",
        })
    }

    #[tokio::test]
    async fn test_luke_lifecycle() {
        let db = TestDatabase::sqlite().await;
        let app = test_app(&state(&db));

        let (status, created) = send(&app, request("POST", "/items", Some(luke()))).await;
        assert_eq!(status, StatusCode::CREATED);
        let id = created["item"]["id"].as_str().unwrap().to_string();

        let (status, fetched) = send(&app, request("GET", &format!("/people/{}", id), None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created["item"]);

        let mut renamed = luke();
        renamed["id"] = json!(id);
        renamed["name"] = json!("Luke Skywalker, Jedi Knight");
        let (status, updated) = send(&app, request("PUT", "/items", Some(renamed))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["item"]["name"], "Luke Skywalker, Jedi Knight");

        let (status, deleted) =
            send(&app, request("DELETE", "/items", Some(json!({ "id": id })))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(deleted["message"], "Item deleted successfully");

        let (status, missing) = send(&app, request("GET", &format!("/people/{}", id), None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(missing["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_favorites_follow_item_deletion() {
        let db = TestDatabase::sqlite().await;
        let app = test_app(&state(&db));
        let leia = db
            .create_test_user("leia@rebellion.org", "Leia", "Organa")
            .await;

        let (_, created) = send(&app, request("POST", "/items", Some(luke()))).await;
        let id = created["item"]["id"].as_str().unwrap().to_string();

        let favorite = json!({ "user_id": leia, "item_id": id });
        let (status, _) = send(&app, request("POST", "/users/favorites", Some(favorite.clone()))).await;
        assert_eq!(status, StatusCode::CREATED);
        let (status, _) = send(&app, request("POST", "/users/favorites", Some(favorite))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, listed) = send(
            &app,
            request("GET", &format!("/users/favorites?user_id={}", leia), None),
        )
        .await;
        assert_eq!(listed["favorites"][0]["type"], "character");

        send(&app, request("DELETE", "/items", Some(json!({ "id": id })))).await;

        let (_, users) = send(&app, request("GET", "/users", None)).await;
        assert_eq!(users[0]["favorites"], json!([]));
        assert_eq!(db.count_rows("favorites").await, 0);
    }

    #[tokio::test]
    async fn test_ambient_endpoints() {
        let db = TestDatabase::sqlite().await;
        let app = test_app(&state(&db));

        let (status, health) = send(&app, request("GET", "/health", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(health["name"], "holocron_api");

        let (status, ready) = send(&app, request("GET", "/ready", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ready["database"], "connected");

        let (status, sitemap) = send(&app, request("GET", "/", None)).await;
        assert_eq!(status, StatusCode::OK);
        let paths: Vec<&str> = sitemap["routes"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|r| r["path"].as_str())
            .collect();
        assert!(paths.contains(&"/users/favorites"));

        let (status, unknown) = send(&app, request("GET", "/death-star-plans", None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(unknown["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_ready_reports_closed_pool() {
        let db = TestDatabase::sqlite().await;
        let state = state(&db);
        let app = test_app(&state);
        state.db.clone().close().await.unwrap();

        let (status, ready) = send(&app, request("GET", "/ready", None)).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(ready["status"], "not ready");
    }
}
