//! Configuration for Inventory API

use core_config::{
    AppInfo, ConfigError, FromEnv, app_info, env_parse, env_required, server::ServerConfig,
};
use database::mysql::MySqlConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mysql: MySqlConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Value expected in the `TOKEN` header of write requests
    pub api_token: String,
    /// Apply pending migrations before serving
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let mysql = MySqlConfig::from_env()?;
        let server = ServerConfig::from_env()?;

        let api_token = env_required("API_TOKEN")?;
        if api_token.is_empty() {
            return Err(ConfigError::ParseError {
                key: "API_TOKEN".to_string(),
                details: "must not be empty".to_string(),
            });
        }

        Ok(Self {
            app: app_info!(),
            mysql,
            server,
            environment,
            api_token,
            run_migrations: env_parse("RUN_MIGRATIONS", "true")?,
        })
    }
}
