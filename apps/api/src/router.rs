use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{self, TraceLayer};
use tracing::Level;

use appointment_cell::appointment_routes;
use doctor_cell::doctor_routes;
use monitoring_cell::create_monitoring_router;
use patient_cell::create_patient_router;
use shared_config::AppConfig;

pub fn create_router(state: Arc<AppConfig>) -> Router {
    Router::new()
        .merge(create_monitoring_router(state.clone()))
        .merge(create_patient_router(state.clone()))
        .merge(doctor_routes(state.clone()))
        .merge(appointment_routes(state))
}

/// The full application: routes plus request tracing and permissive CORS.
pub fn create_app(state: Arc<AppConfig>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    create_router(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new()
                    .level(Level::INFO))
                .on_response(trace::DefaultOnResponse::new()
                    .level(Level::INFO)),
        )
        .layer(cors)
}
