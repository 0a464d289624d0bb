// libs/appointment-cell/src/services/booking.rs
use anyhow::{Context, Result};
use chrono::Utc;
use serde_json::{Map, Value};
use tokio::sync::Mutex;
use tracing::{debug, info};

use shared_config::AppConfig;
use shared_database::{Fixture, FixtureStore};

use crate::models::{
    format_appointment_id, Appointment, AppointmentError, BookingConfirmation, CREATED_AT_FORMAT,
};

/// Appends bookings to the appointments log. The whole read-modify-write
/// runs under `write_lock`, so bookings made through one service instance
/// get distinct, sequential ids.
pub struct AppointmentBookingService {
    store: FixtureStore,
    write_lock: Mutex<()>,
}

impl AppointmentBookingService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: FixtureStore::new(config),
            write_lock: Mutex::new(()),
        }
    }

    async fn load_log(&self) -> Result<Vec<Value>> {
        match self.store.load_value(Fixture::Appointments).await {
            Ok(Value::Array(entries)) => Ok(entries),
            Ok(_) => Err(AppointmentError::MalformedLog.into()),
            Err(e) if e.is_not_found() => {
                debug!("No appointments log yet, starting a new one");
                Ok(Vec::new())
            }
            Err(e) => Err(e).context("failed to read appointments log"),
        }
    }

    pub async fn book_appointment(&self, request: Map<String, Value>) -> Result<BookingConfirmation> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.load_log().await?;

        let appointment_id = format_appointment_id(entries.len() + 1);
        let created_at = Utc::now().format(CREATED_AT_FORMAT).to_string();
        let appointment = Appointment::new(appointment_id.clone(), request, created_at);

        entries.push(serde_json::to_value(&appointment).context("failed to encode appointment")?);

        self.store
            .write_value(Fixture::Appointments, &Value::Array(entries))
            .await
            .context("failed to write appointments log")?;

        info!("Appointment booked successfully: {}", appointment_id);

        Ok(BookingConfirmation::new(appointment_id, appointment))
    }
}
