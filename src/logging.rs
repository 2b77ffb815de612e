//! tracing subscriber setup for the binary.
//!
//! Filter precedence: `QWALK_LOG`, then `QWALK_DEBUG=1`, then `--verbose`,
//! then the config file, then `warn`.
use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "QWALK_LOG";
pub const DEBUG_ENV: &str = "QWALK_DEBUG";

static DEBUG: OnceLock<bool> = OnceLock::new();

pub fn debug_forced() -> bool {
    *DEBUG.get_or_init(|| std::env::var(DEBUG_ENV).ok().as_deref() == Some("1"))
}

pub fn filter_directive(verbose: bool, configured: Option<&str>) -> String {
    if let Ok(directive) = std::env::var(LOG_ENV) {
        if !directive.trim().is_empty() {
            return directive;
        }
    }
    if debug_forced() || verbose {
        return "debug".to_string();
    }
    configured.unwrap_or("warn").to_string()
}

/// Installs a stderr fmt subscriber. Safe to call twice; the second call is ignored.
pub fn init(verbose: bool, configured: Option<&str>) {
    let directive = filter_directive(verbose, configured);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
