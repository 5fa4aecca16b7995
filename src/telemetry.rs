use tracing_subscriber::EnvFilter;

use crate::settings::AppConfig;

/// Installs the global subscriber. `RUST_LOG` wins over `log_level`.
/// Production logs are JSON lines, everything else is human readable.
pub fn init_tracing(config: &AppConfig) -> Result<(), String> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level)
            .map_err(|e| format!("invalid log level '{}': {}", config.log_level, e))?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false);

    let result = if config.is_production() {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };

    result.map_err(|e| format!("failed to install tracing subscriber: {}", e))
}
