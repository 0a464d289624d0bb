use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use shared_config::AppConfig;

use crate::handlers;

pub fn doctor_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/doctors", get(handlers::get_doctors))
        .route("/doctors/analytics", get(handlers::get_doctors_analytics))
        .route("/doctors/summary", get(handlers::get_doctors_summary))
        .with_state(state)
}
