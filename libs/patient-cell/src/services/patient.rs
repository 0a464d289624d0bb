use rand::Rng;
use serde_json::{json, Map, Value};
use tracing::debug;

use shared_config::AppConfig;
use shared_database::{Fixture, FixtureStore};

use crate::models::{PatientError, PROCESSING_TIME_MAX_MS, PROCESSING_TIME_MIN_MS};

pub struct PatientService {
    store: FixtureStore,
}

impl PatientService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: FixtureStore::new(config),
        }
    }

    /// The patients fixture, verbatim.
    pub async fn get_patients(&self) -> Result<Value, PatientError> {
        self.store
            .load_value(Fixture::Patients)
            .await
            .map_err(|e| PatientError::or_missing(e, PatientError::PatientsNotFound))
    }

    pub async fn get_patient_info(&self) -> Result<Value, PatientError> {
        self.store
            .load_value(Fixture::PatientInfo)
            .await
            .map_err(|e| PatientError::or_missing(e, PatientError::PatientInfoNotFound))
    }

    /// Mock processing of an uploaded report: the patient-info template
    /// with the file name, a simulated processing time and a status laid
    /// over it.
    pub async fn process_patient_file(&self, filename: &str) -> Result<Map<String, Value>, PatientError> {
        let mut info = self
            .store
            .load_object(Fixture::PatientInfo)
            .await
            .map_err(|e| PatientError::or_missing(e, PatientError::TemplateNotFound))?;

        let processing_time = simulated_processing_time();
        debug!("Processed {} in a simulated {}ms", filename, processing_time);

        info.insert("processed_file".to_string(), json!(filename));
        info.insert("processing_time".to_string(), json!(processing_time));
        info.insert("status".to_string(), json!("success"));

        Ok(info)
    }

    pub async fn get_healthcare_data(&self) -> Result<Value, PatientError> {
        self.store
            .load_value(Fixture::HealthcareData)
            .await
            .map_err(|e| PatientError::or_missing(e, PatientError::HealthcareDataNotFound))
    }
}

pub fn simulated_processing_time() -> u32 {
    rand::thread_rng().gen_range(PROCESSING_TIME_MIN_MS..=PROCESSING_TIME_MAX_MS)
}
