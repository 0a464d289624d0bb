use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

pub const CONFIRMED_STATUS: &str = "confirmed";
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.000Z";

/// `APT` followed by the 1-based position in the log, zero-padded to four digits.
pub fn format_appointment_id(sequence: usize) -> String {
    format!("APT{:04}", sequence)
}

/// A booked appointment as written to the log. Whatever the caller sent is
/// kept in `details`; `status` and `created_at` are always set by the
/// server, while a caller-supplied `id` replaces the generated one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Value,
    #[serde(flatten)]
    pub details: Map<String, Value>,
    pub status: String,
    pub created_at: String,
}

impl Appointment {
    pub fn new(generated_id: String, mut details: Map<String, Value>, created_at: String) -> Self {
        let id = details.shift_remove("id").unwrap_or(Value::String(generated_id));
        details.shift_remove("status");
        details.shift_remove("created_at");

        Self {
            id,
            details,
            status: CONFIRMED_STATUS.to_string(),
            created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub status: String,
    pub message: String,
    pub appointment_id: String,
    pub appointment: Appointment,
}

impl BookingConfirmation {
    pub fn new(appointment_id: String, appointment: Appointment) -> Self {
        Self {
            status: "success".to_string(),
            message: "Appointment booked successfully".to_string(),
            appointment_id,
            appointment,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingFailure {
    pub status: String,
    pub message: String,
    pub error: String,
}

impl BookingFailure {
    pub fn new(error: String) -> Self {
        Self {
            status: "error".to_string(),
            message: "Failed to book appointment".to_string(),
            error,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppointmentError {
    #[error("appointments log is not a JSON array")]
    MalformedLog,
}
