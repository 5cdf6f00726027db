//! Tracing initialization

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Install a JSON tracing subscriber filtered by `service.log_level`
///
/// Invalid filter directives fall back to `info`. If a global subscriber is
/// already installed this is a no-op.
pub fn init_tracing(config: &Config) {
    let log_level = config.service.log_level.clone();

    let installed = tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("Tracing initialized for service: {}", config.service.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_twice_is_harmless() {
        let config = Config::default();
        init_tracing(&config);
        init_tracing(&config);
        tracing::info!("still logging after a second init");
    }

    #[test]
    fn test_init_tracing_with_bad_filter() {
        let mut config = Config::default();
        config.service.log_level = "not a [valid filter".to_string();
        init_tracing(&config);
    }
}
