use config::{Config, ConfigError, Environment, File};
use derive_more::Display;
use dotenv::dotenv;
use jsonwebtoken::{DecodingKey, EncodingKey};
use serde::Deserialize;
use std::{env, fmt};
use zeroize::Zeroizing;

const MIN_SECRET_LENGTH: usize = 32;
const ONE_WEEK_MINUTES: i64 = 60 * 24 * 7;

#[derive(Debug, Display, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    #[display("development")]
    Development,
    #[display("production")]
    Production,
    #[display("testing")]
    Testing,
}

impl AppEnvironment {
    /// Reads `APP_ENV`, defaulting to development.
    fn from_env() -> Result<Self, ConfigError> {
        let raw = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        match raw.trim().to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid APP_ENV value: {}", raw))),
        }
    }
}

/// Runtime settings. Layered from `config/default.toml`,
/// `config/<env>.toml` and `APP_*` variables, in that order.
#[derive(Deserialize, Clone)]
pub struct AppConfig {
    pub env: AppEnvironment,
    pub name: String,
    pub port: u16,
    pub host: String,
    pub worker_count: usize,
    /// Fallback filter when `RUST_LOG` is unset.
    pub log_level: String,
    pub database_url: String,
    pub run_migrations: bool,
    /// Comma separated list of allowed origins, `*` for any.
    pub cors_allowed_origins: String,
    pub jwt_secret: String,
    pub jwt_expiration_minutes: i64,
    /// Marks the session cookie `Secure; SameSite=None`.
    pub cookie_secure: bool,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();
        let env_name = AppEnvironment::from_env()?;

        let mut config: Self = Config::builder()
            .set_default("env", env_name.to_string())?
            .set_default("name", "PlacementIQ-API")?
            .set_default("port", 3000)?
            .set_default("host", "0.0.0.0")?
            .set_default("worker_count", num_cpus::get() as u64)?
            .set_default("log_level", "info")?
            .set_default("database_url", "")?
            .set_default("run_migrations", true)?
            .set_default("cors_allowed_origins", "*")?
            .set_default("jwt_secret", "")?
            .set_default("jwt_expiration_minutes", ONE_WEEK_MINUTES)?
            .set_default("cookie_secure", true)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env_name)).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .try_parsing(true)
                    .ignore_empty(true),
            )
            .build()?
            .try_deserialize()?;

        config.env = env_name;

        // Deployments usually set these two without the APP_ prefix.
        if config.database_url.trim().is_empty() {
            config.database_url = env::var("DATABASE_URL").unwrap_or_default();
        }
        if config.jwt_secret.is_empty() {
            config.jwt_secret = env::var("JWT_SECRET").unwrap_or_default();
        }

        config.validate()?;
        Ok(config)
    }

    /// Collects every problem instead of stopping at the first one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let problems: Vec<&str> = [
            (self.database_url.trim().is_empty(), "DATABASE_URL must be set"),
            (self.jwt_secret.len() < MIN_SECRET_LENGTH, "JWT_SECRET must be at least 32 characters"),
            (self.jwt_expiration_minutes <= 0, "APP_JWT_EXPIRATION_MINUTES must be positive"),
            (self.worker_count == 0, "APP_WORKER_COUNT must be at least 1"),
            (
                self.is_production() && self.cors_origins().iter().any(|o| o == "*"),
                "Wildcard CORS (*) is not allowed in production",
            ),
        ]
        .into_iter()
        .filter_map(|(failed, message)| failed.then_some(message))
        .collect();

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(problems.join(", ")))
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == AppEnvironment::Production
    }

    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn redacted(secret: &str) -> &'static str {
    match secret.len() {
        0 => "[MISSING]",
        n if n < MIN_SECRET_LENGTH => "[TOO_SHORT]",
        _ => "[REDACTED]",
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("name", &self.name)
            .field("addr", &self.server_addr())
            .field("worker_count", &self.worker_count)
            .field("log_level", &self.log_level)
            .field("database_url", &redacted(&self.database_url))
            .field("run_migrations", &self.run_migrations)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("jwt_secret", &redacted(&self.jwt_secret))
            .field("jwt_expiration_minutes", &self.jwt_expiration_minutes)
            .field("cookie_secure", &self.cookie_secure)
            .finish()
    }
}

/// HMAC keys derived from `jwt_secret`.
#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
}

impl From<&AppConfig> for JwtKeys {
    fn from(config: &AppConfig) -> Self {
        let secret = Zeroizing::new(config.jwt_secret.as_bytes().to_vec());

        JwtKeys {
            encoding: EncodingKey::from_secret(&secret),
            decoding: DecodingKey::from_secret(&secret),
        }
    }
}

impl fmt::Debug for JwtKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("JwtKeys([REDACTED])")
    }
}
