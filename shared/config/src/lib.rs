use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Database connection URL.
    pub database_url: String,

    /// Server host address.
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Maximum size of the Postgres connection pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// `tracing-subscriber` env-filter directive string.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_max_connections() -> u32 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment variables, falling back to a
    /// `.env` file in the current directory if present.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let _ = dotenvy::dotenv();

        let builder = config::Config::builder()
            .set_default("database_url", "")?
            .set_default("host", default_host())?
            .set_default("port", default_port() as i64)?
            .set_default("max_connections", default_max_connections() as i64)?
            .set_default("log_level", default_log_level())?
            .add_source(config::Environment::default());

        builder.build()?.try_deserialize::<Config>()
    }
}
