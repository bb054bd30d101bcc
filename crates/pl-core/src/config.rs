use serde::{Deserialize, Serialize};

use crate::error::{PlError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub per_page: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "https://api.salesloft.com/v2/people.json".into(),
                api_key: String::new(),
                per_page: 100,
            },
            server: ServerConfig {
                host: "0.0.0.0".into(),
                port: 3000,
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment. The API key is mandatory,
    /// everything else falls back to defaults.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.api.api_key =
            std::env::var("PEOPLELENS_API_KEY").map_err(|_| PlError::MissingApiKey)?;
        if let Ok(url) = std::env::var("PEOPLELENS_API_URL") {
            config.api.base_url = url;
        }
        if let Ok(host) = std::env::var("PEOPLELENS_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("PEOPLELENS_PORT") {
            config.server.port = port
                .parse()
                .map_err(|_| PlError::InvalidConfig(format!("invalid port: {port}")))?;
        }
        Ok(config)
    }
}
