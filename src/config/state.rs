// Application state module
// Shared, read-only state handed to every connection

use std::sync::atomic::AtomicBool;

use super::types::Config;

/// Application state shared across connections.
///
/// The configuration is immutable for the lifetime of the process; the
/// access-log switch is cached in an atomic so the accept path never locks.
pub struct AppState {
    pub config: Config,
    pub cached_access_log: AtomicBool,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            cached_access_log: AtomicBool::new(config.logging.access_log),
        }
    }
}
