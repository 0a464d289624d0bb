use std::io::ErrorKind;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, error};

use shared_config::AppConfig;
use shared_models::error::AppError;

/// The JSON files backing the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixture {
    Patients,
    Doctors,
    PatientInfo,
    HealthcareData,
    Appointments,
}

impl Fixture {
    pub fn file_name(self) -> &'static str {
        match self {
            Fixture::Patients => "patients-data.json",
            Fixture::Doctors => "doctors-data.json",
            Fixture::PatientInfo => "patient-info.json",
            Fixture::HealthcareData => "healthcare-data.json",
            Fixture::Appointments => "doctors-appointments.json",
        }
    }
}

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("fixture not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("expected a JSON object in {}", path.display())]
    NotAnObject { path: PathBuf },
}

impl FixtureError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FixtureError::NotFound { .. })
    }
}

impl From<FixtureError> for AppError {
    fn from(err: FixtureError) -> Self {
        match err {
            FixtureError::NotFound { .. } => AppError::NotFound(err.to_string()),
            other => AppError::Internal(other.to_string()),
        }
    }
}

/// Read-through access to the fixture directory. Nothing is cached; every
/// call goes back to disk.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    data_dir: PathBuf,
}

impl FixtureStore {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            data_dir: config.data_dir.clone(),
        }
    }

    pub fn path(&self, fixture: Fixture) -> PathBuf {
        self.data_dir.join(fixture.file_name())
    }

    pub async fn load<T>(&self, fixture: Fixture) -> Result<T, FixtureError>
    where
        T: DeserializeOwned,
    {
        let path = self.path(fixture);
        debug!("Reading fixture {}", path.display());

        let raw = tokio::fs::read(&path).await.map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                FixtureError::NotFound { path: path.clone() }
            } else {
                FixtureError::Io { path: path.clone(), source }
            }
        })?;

        serde_json::from_slice(&raw).map_err(|source| {
            error!("Fixture {} is not valid JSON: {}", path.display(), source);
            FixtureError::Parse { path, source }
        })
    }

    pub async fn load_value(&self, fixture: Fixture) -> Result<Value, FixtureError> {
        self.load(fixture).await
    }

    pub async fn load_object(&self, fixture: Fixture) -> Result<Map<String, Value>, FixtureError> {
        match self.load_value(fixture).await? {
            Value::Object(map) => Ok(map),
            _ => Err(FixtureError::NotAnObject { path: self.path(fixture) }),
        }
    }

    /// Rewrites the whole fixture. The data directory is created when
    /// missing and the file is replaced by rename, so readers never see a
    /// half-written file.
    pub async fn write_value(&self, fixture: Fixture, value: &Value) -> Result<(), FixtureError> {
        let path = self.path(fixture);

        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|source| FixtureError::Io { path: self.data_dir.clone(), source })?;

        let body = serde_json::to_vec_pretty(value)
            .map_err(|source| FixtureError::Parse { path: path.clone(), source })?;

        let tmp_path = path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, body)
            .await
            .map_err(|source| FixtureError::Io { path: tmp_path.clone(), source })?;
        tokio::fs::rename(&tmp_path, &path)
            .await
            .map_err(|source| FixtureError::Io { path: path.clone(), source })?;

        debug!("Wrote fixture {}", path.display());
        Ok(())
    }
}
