// =====================================================================================
// MONITORING CELL HANDLERS
// =====================================================================================

use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::models::HealthCheckResponse;
use shared_config::AppConfig;

#[instrument(skip(config))]
pub async fn get_health_status(
    State(config): State<Arc<AppConfig>>,
) -> Json<HealthCheckResponse> {
    info!("HEALTH_CHECK: backend service is running");
    Json(HealthCheckResponse::healthy(&config.service_name))
}
