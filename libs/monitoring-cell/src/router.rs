// =====================================================================================
// MONITORING CELL ROUTER
// =====================================================================================

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::handlers::get_health_status;
use shared_config::AppConfig;

pub fn create_monitoring_router(config: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/health", get(get_health_status))
        .with_state(config)
}
