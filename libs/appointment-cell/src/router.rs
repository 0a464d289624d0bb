// libs/appointment-cell/src/router.rs
use std::sync::Arc;

use axum::{
    Router,
    routing::post,
};

use shared_config::AppConfig;

use crate::handlers::{book_appointment, AppointmentHandlers};

pub fn appointment_routes(state: Arc<AppConfig>) -> Router {
    let handlers = Arc::new(AppointmentHandlers::new(&state));

    Router::new()
        .route("/book-appointment", post(book_appointment))
        .with_state(handlers)
}
