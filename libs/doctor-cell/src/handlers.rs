use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::{json, Value};
use tracing::{info, warn};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{CalculatedStats, DoctorError, DoctorSearchQuery, Pagination};
use crate::services::DoctorService;

fn fixture_failure(err: DoctorError) -> AppError {
    match err {
        DoctorError::Fixture(inner) => inner.into(),
        other => AppError::Internal(other.to_string()),
    }
}

#[axum::debug_handler]
pub async fn get_doctors(
    State(state): State<Arc<AppConfig>>,
    Query(query): Query<DoctorSearchQuery>,
) -> Result<Json<Value>, AppError> {
    info!(
        "GET_DOCTORS: reading doctors-data.json (search={:?}, department={:?}, specialization={:?})",
        query.search, query.department, query.specialization
    );

    let doctor_service = DoctorService::new(&state);

    match doctor_service.search_doctors(&query).await {
        Ok(page) => Ok(Json(json!(page))),
        Err(DoctorError::DataNotFound) => {
            warn!("Doctors fixture missing, returning empty listing");
            Ok(Json(json!({
                "error": DoctorError::DataNotFound.to_string(),
                "doctors": [],
                "pagination": Pagination::empty(query.page(), query.limit()),
                "summary": {}
            })))
        }
        Err(e) => Err(fixture_failure(e)),
    }
}

#[axum::debug_handler]
pub async fn get_doctors_analytics(
    State(state): State<Arc<AppConfig>>,
) -> Result<Json<Value>, AppError> {
    info!("GET_DOCTORS_ANALYTICS: calculating chart data from doctors-data.json");

    let doctor_service = DoctorService::new(&state);

    match doctor_service.get_analytics().await {
        Ok(analytics) => Ok(Json(json!(analytics))),
        Err(DoctorError::DataNotFound) => {
            warn!("Doctors fixture missing, returning empty analytics");
            Ok(Json(json!({
                "error": DoctorError::DataNotFound.to_string(),
                "specialization_distribution": [],
                "department_distribution": [],
                "rating_distribution": [],
                "experience_vs_success": []
            })))
        }
        Err(e) => Err(fixture_failure(e)),
    }
}

#[axum::debug_handler]
pub async fn get_doctors_summary(
    State(state): State<Arc<AppConfig>>,
) -> Result<Json<Value>, AppError> {
    info!("GET_DOCTORS_SUMMARY: calculating summary statistics from doctors-data.json");

    let doctor_service = DoctorService::new(&state);

    match doctor_service.get_summary().await {
        Ok(summary) => Ok(Json(Value::Object(summary))),
        Err(DoctorError::DataNotFound) => {
            warn!("Doctors fixture missing, returning zeroed summary");
            Ok(Json(json!({
                "error": DoctorError::DataNotFound.to_string(),
                "totalDoctors": 0,
                "calculated_stats": CalculatedStats::default()
            })))
        }
        Err(e) => Err(fixture_failure(e)),
    }
}
