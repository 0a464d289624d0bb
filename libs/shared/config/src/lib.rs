use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::warn;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_SERVICE_NAME: &str = "ADIF Backend API";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub host: String,
    pub port: u16,
    pub service_name: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            data_dir: env::var("ADIF_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| {
                    warn!("ADIF_DATA_DIR not set, using default '{}'", DEFAULT_DATA_DIR);
                    PathBuf::from(DEFAULT_DATA_DIR)
                }),
            host: env::var("HOST")
                .unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: match env::var("PORT") {
                Ok(raw) => raw.parse().unwrap_or_else(|_| {
                    warn!("PORT '{}' is not a valid port, using default {}", raw, DEFAULT_PORT);
                    DEFAULT_PORT
                }),
                Err(_) => DEFAULT_PORT,
            },
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| DEFAULT_SERVICE_NAME.to_string()),
        };

        if !config.is_configured() {
            warn!(
                "Data directory {} does not exist - fixture endpoints will return empty defaults",
                config.data_dir.display()
            );
        }

        config
    }

    /// Config rooted at an explicit fixture directory, everything else defaulted.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            service_name: DEFAULT_SERVICE_NAME.to_string(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.data_dir.is_dir()
    }

    /// Falls back to every interface on the configured port when `host` does not parse.
    pub fn bind_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port).parse().unwrap_or_else(|_| {
            warn!("HOST '{}' is not a valid address, binding to {}", self.host, DEFAULT_HOST);
            SocketAddr::from(([0, 0, 0, 0], self.port))
        })
    }
}
