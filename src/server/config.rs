use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// `DATABASE_URL` is required. `HOST` defaults to `localhost` and `PORT` to `3000`.
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration loaded
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or `PORT` is not a number
    pub fn from_env() -> Result<Self, AppError> {
        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    value,
                })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port,
        })
    }

    /// Address the HTTP listener binds to, as `host:port`.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
