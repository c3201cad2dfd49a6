//! `GET /`: the routes this API serves, read from the OpenAPI document.

use axum::{Json, Router, extract::State, routing::get};
use core_config::AppInfo;
use serde::Serialize;
use utoipa::OpenApi;

use crate::openapi::ApiDoc;

#[derive(Debug, Serialize)]
pub struct Sitemap {
    pub name: &'static str,
    pub version: &'static str,
    pub routes: Vec<Route>,
    pub docs: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Route {
    pub path: String,
    pub methods: Vec<&'static str>,
}

pub fn router(app: AppInfo) -> Router {
    Router::new().route("/", get(sitemap)).with_state(app)
}

async fn sitemap(State(app): State<AppInfo>) -> Json<Sitemap> {
    Json(Sitemap {
        name: app.name,
        version: app.version,
        routes: routes(),
        docs: "/swagger-ui",
    })
}

fn routes() -> Vec<Route> {
    ApiDoc::openapi()
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| {
            let methods = [
                ("GET", item.get.is_some()),
                ("POST", item.post.is_some()),
                ("PUT", item.put.is_some()),
                ("DELETE", item.delete.is_some()),
            ]
            .into_iter()
            .filter_map(|(method, present)| present.then_some(method))
            .collect();

            Route { path, methods }
        })
        .collect()
}
