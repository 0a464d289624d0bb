use std::path::Path;
use std::sync::Arc;

use serde_json::{json, Value};
use tempfile::TempDir;

use shared_config::AppConfig;
use shared_database::Fixture;

/// A throwaway fixture directory. Files are written on demand; anything
/// not written is missing, which is how the not-found fallbacks are
/// exercised.
pub struct TestFixtures {
    dir: TempDir,
}

impl TestFixtures {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp fixture dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig::with_data_dir(self.dir.path())
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }

    pub fn write(&self, fixture: Fixture, value: &Value) -> &Self {
        let body = serde_json::to_string_pretty(value).expect("fixture serializes");
        self.write_raw(fixture, &body)
    }

    pub fn write_raw(&self, fixture: Fixture, body: &str) -> &Self {
        std::fs::write(self.dir.path().join(fixture.file_name()), body)
            .expect("failed to write fixture");
        self
    }

    pub fn read(&self, fixture: Fixture) -> Value {
        let raw = std::fs::read_to_string(self.dir.path().join(fixture.file_name()))
            .expect("fixture exists");
        serde_json::from_str(&raw).expect("fixture is valid JSON")
    }

    pub fn with_doctors(self, doctors: Vec<Value>) -> Self {
        self.write(Fixture::Doctors, &doctors_fixture(doctors));
        self
    }

    pub fn with_appointments(self, count: usize) -> Self {
        let existing: Vec<Value> = (1..=count)
            .map(|n| json!({ "id": format!("APT{:04}", n), "patientName": format!("Patient {}", n) }))
            .collect();
        self.write(Fixture::Appointments, &Value::Array(existing));
        self
    }
}

impl Default for TestFixtures {
    fn default() -> Self {
        Self::new()
    }
}

pub fn doctor(id: u64, name: &str, specialization: &str, department: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "specialization": specialization,
        "department": department,
        "experience": 10,
        "rating": 4.5,
        "successRate": 90.0,
        "education": "Medical University",
        "contact": { "email": format!("doctor{}@example.com", id), "phone": "555-0100" },
        "availability": "Mon-Fri"
    })
}

pub fn doctors_fixture(doctors: Vec<Value>) -> Value {
    json!({
        "doctors": doctors,
        "summary": {
            "totalDoctors": 120,
            "averageRating": 4.6,
            "departments": 8
        }
    })
}

/// Five cardiologists followed by two neurologists and a pediatrician.
pub fn sample_doctors() -> Vec<Value> {
    let mut doctors: Vec<Value> = (1..=5)
        .map(|n| doctor(n, &format!("Dr. Heart {}", n), "Cardiologist", "Cardiology"))
        .collect();
    doctors.push(doctor(6, "Dr. Ana Brain", "Neurologist", "Neurology"));
    doctors.push(doctor(7, "Dr. Ben Nerve", "Neurosurgeon", "Neurology"));
    doctors.push(doctor(8, "Dr. Kim Small", "Pediatrician", "Pediatrics"));
    doctors
}
