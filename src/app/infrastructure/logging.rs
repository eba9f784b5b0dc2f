use tracing_subscriber::EnvFilter;

use super::error::{AppError, Result};

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV: &str = "EDUACESSIVEL_LOG";

/// Build the filter: `EDUACESSIVEL_LOG` if set and valid, else `default_filter`.
pub fn build_filter(default_filter: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| AppError::Config(format!("invalid log filter '{}': {}", default_filter, e)))
}

/// Install the global subscriber. Call once, from the binary.
pub fn init_logging(default_filter: &str) -> Result<()> {
    let filter = build_filter(default_filter)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_accepts_directives() {
        assert!(build_filter("info").is_ok());
        assert!(build_filter("edu_acessivel=debug,warn").is_ok());
    }
}
