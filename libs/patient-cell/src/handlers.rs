use std::sync::Arc;
use axum::{
    extract::{Multipart, State},
    Json,
};
use serde_json::{json, Value};
use tracing::{info, warn};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::PatientError;
use crate::services::{read_upload, PatientService};

fn unexpected(err: PatientError) -> AppError {
    match err {
        PatientError::Fixture(inner) => inner.into(),
        other => AppError::Internal(other.to_string()),
    }
}

#[axum::debug_handler]
pub async fn get_patients(
    State(config): State<Arc<AppConfig>>,
) -> Result<Json<Value>, AppError> {
    info!("GET_PATIENTS: reading patients-data.json");

    let service = PatientService::new(&config);

    match service.get_patients().await {
        Ok(patients) => Ok(Json(patients)),
        Err(err @ PatientError::PatientsNotFound) => {
            warn!("{}", err);
            Ok(Json(json!({
                "error": err.to_string(),
                "patients": []
            })))
        }
        Err(e) => Err(unexpected(e)),
    }
}

#[axum::debug_handler]
pub async fn get_patient_info(
    State(config): State<Arc<AppConfig>>,
) -> Result<Json<Value>, AppError> {
    info!("GET_PATIENT_INFO: reading patient-info.json");

    let service = PatientService::new(&config);

    match service.get_patient_info().await {
        Ok(info) => Ok(Json(info)),
        Err(err @ PatientError::PatientInfoNotFound) => {
            warn!("{}", err);
            Ok(Json(json!({
                "error": err.to_string(),
                "patient": {}
            })))
        }
        Err(e) => Err(unexpected(e)),
    }
}

#[axum::debug_handler]
pub async fn process_patient_file(
    State(config): State<Arc<AppConfig>>,
    multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let upload = read_upload(multipart).await?;
    info!("PROCESS_PATIENT_FILE: returning patient info for upload {}", upload.filename);

    let service = PatientService::new(&config);

    match service.process_patient_file(&upload.filename).await {
        Ok(info) => Ok(Json(Value::Object(info))),
        Err(err @ PatientError::TemplateNotFound) => {
            warn!("{}", err);
            Ok(Json(json!({
                "error": err.to_string(),
                "processed_file": upload.filename,
                "status": "error"
            })))
        }
        Err(e) => Err(unexpected(e)),
    }
}

#[axum::debug_handler]
pub async fn upload_file(
    State(config): State<Arc<AppConfig>>,
    multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let upload = read_upload(multipart).await?;
    info!(
        "UPLOAD: received {} ({} bytes), returning healthcare-data.json",
        upload.filename, upload.size_bytes
    );

    let service = PatientService::new(&config);

    match service.get_healthcare_data().await {
        Ok(data) => Ok(Json(data)),
        Err(err @ PatientError::HealthcareDataNotFound) => {
            warn!("{}", err);
            Ok(Json(json!({
                "error": err.to_string(),
                "filename": upload.filename,
                "message": "File received but no healthcare data is available",
                "status": "error"
            })))
        }
        Err(e) => Err(unexpected(e)),
    }
}
