use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Map, Value};
use tracing::{error, info};

use shared_config::AppConfig;

use crate::models::BookingFailure;
use crate::services::AppointmentBookingService;

pub struct AppointmentHandlers {
    booking_service: AppointmentBookingService,
}

impl AppointmentHandlers {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            booking_service: AppointmentBookingService::new(config),
        }
    }
}

/// Booking failures are reported in the body; the response is always 200.
#[axum::debug_handler]
pub async fn book_appointment(
    State(handlers): State<Arc<AppointmentHandlers>>,
    Json(request): Json<Map<String, Value>>,
) -> Json<Value> {
    info!("BOOK_APPOINTMENT: saving appointment to doctors-appointments.json");

    match handlers.booking_service.book_appointment(request).await {
        Ok(confirmation) => Json(json!(confirmation)),
        Err(e) => {
            error!("Error booking appointment: {:#}", e);
            Json(json!(BookingFailure::new(format!("{:#}", e))))
        }
    }
}
