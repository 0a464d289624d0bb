use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_database::FixtureError;

/// Multipart field carrying the uploaded document.
pub const UPLOAD_FIELD: &str = "file";
pub const DEFAULT_UPLOAD_NAME: &str = "upload";

pub const PROCESSING_TIME_MIN_MS: u32 = 100;
pub const PROCESSING_TIME_MAX_MS: u32 = 500;

/// What is kept of an upload once its bytes have been drained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub filename: String,
    pub size_bytes: usize,
}

#[derive(Error, Debug)]
pub enum PatientError {
    #[error("Patients data not found")]
    PatientsNotFound,

    #[error("Patient info not found")]
    PatientInfoNotFound,

    #[error("Patient info template not found")]
    TemplateNotFound,

    #[error("Healthcare data not found")]
    HealthcareDataNotFound,

    #[error(transparent)]
    Fixture(#[from] FixtureError),
}

impl PatientError {
    /// Maps a fixture miss to `missing`, anything else passes through.
    pub fn or_missing(err: FixtureError, missing: PatientError) -> Self {
        if err.is_not_found() {
            missing
        } else {
            PatientError::Fixture(err)
        }
    }
}
