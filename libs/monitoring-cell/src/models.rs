use serde::{Deserialize, Serialize};

pub const HEALTHY: &str = "healthy";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub service: String,
}

impl HealthCheckResponse {
    pub fn healthy(service: &str) -> Self {
        Self {
            status: HEALTHY.to_string(),
            service: service.to_string(),
        }
    }
}
