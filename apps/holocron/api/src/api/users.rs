use axum::Router;
use domain_items::SqlItemRepository;
use domain_users::{
    FavoriteService, SqlFavoriteRepository, SqlUserRepository, UserService, handlers,
};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = SqlUserRepository::new(state.db.clone());
    handlers::router(UserService::new(repository))
}

pub fn favorites_router(state: &AppState) -> Router {
    let service = FavoriteService::new(
        SqlUserRepository::new(state.db.clone()),
        SqlItemRepository::new(state.db.clone()),
        SqlFavoriteRepository::new(state.db.clone()),
    );
    handlers::favorites_router(service)
}
