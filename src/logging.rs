//! Process-wide tracing setup

use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

use crate::config::ClientConfig;

static INSTALLED: OnceLock<bool> = OnceLock::new();

/// Install the fmt subscriber once per process.
///
/// `RUST_LOG` wins over `default_filter`. Later calls are no-ops; the return
/// value tells whether this crate's subscriber is the active one.
pub fn init(default_filter: &str) -> bool {
    *INSTALLED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
            .is_ok()
    })
}

/// [`init`] with the configured `log_filter` as the default
pub fn init_from_config(config: &ClientConfig) -> bool {
    init(&config.log_filter)
}
