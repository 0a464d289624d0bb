use std::sync::Arc;
use axum::{extract::DefaultBodyLimit, routing::{get, post}, Router};
use shared_config::AppConfig;

use crate::handlers::*;

/// Uploads are drained, never stored, but still have to fit through the extractor.
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

pub fn create_patient_router(config: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/patients", get(get_patients))
        .route("/patient-info", get(get_patient_info).post(process_patient_file))
        .route("/upload", post(upload_file))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(config)
}
