use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::reporters::handlers;
use crate::features::reporters::services::ReporterService;

/// Create routes for the reporter CRUD surface
pub fn routes(service: Arc<ReporterService>) -> Router {
    Router::new()
        .route(
            "/userreports",
            post(handlers::create_reporter)
                .put(handlers::update_reporter)
                .get(handlers::list_reporters),
        )
        .route(
            "/userreports/{id}",
            get(handlers::get_reporter).delete(handlers::delete_reporter),
        )
        .with_state(service)
}
