use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::admins::handlers;
use crate::features::admins::services::AdminService;

/// Create routes for administrator management and login
pub fn routes(service: Arc<AdminService>) -> Router {
    Router::new()
        .route(
            "/administrators",
            post(handlers::create_administrator)
                .put(handlers::update_administrator)
                .get(handlers::list_administrators),
        )
        .route(
            "/administrators/{id}",
            get(handlers::get_administrator).delete(handlers::delete_administrator),
        )
        .route(
            "/administrators/login",
            post(handlers::login_administrator),
        )
        .with_state(service)
}
