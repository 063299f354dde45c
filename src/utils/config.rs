// @file: aggregates_client/src/utils/config.rs
// @description: Layered application configuration (defaults, optional config file, APP_* environment).
// @author: LAS.

use crate::connectors::polygon_rest::{AggsClient, Client, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::core::errors::Result;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

//
// TYPE DEFINITIONS
//

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,

    // Credentials
    pub env_file: String,
    pub api_key_var: String,

    // REST Endpoint
    pub base_url: String,
    pub request_timeout_secs: u64,

    // Query Defaults
    pub default_ticker: String,
}

impl AppConfig {
    //
    // PUBLIC INTERFACE
    //

    pub fn load() -> std::result::Result<Self, ConfigError> {
        let builder = Config::builder()
            .set_default("log_level", "info")?

            // Credentials
            .set_default("env_file", ".env")?
            .set_default("api_key_var", "POLYGON_API_KEY")?

            // REST Endpoint
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("request_timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?

            // Query Defaults
            .set_default("default_ticker", "X:BTCUSD")?

            // File & Env Overrides
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("APP"));

        let config = builder.build()?;
        config.try_deserialize()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn aggs_client(&self, api_key: impl Into<String>) -> Result<AggsClient> {
        let client: Client = Client::with_base_url(api_key, &self.base_url, self.request_timeout())?;
        Ok(AggsClient::new(client))
    }
}
