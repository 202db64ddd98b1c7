//! Diagnostic logging setup
//!
//! Diagnostics go to stderr through `tracing`. The audit trail of data
//! changes is separate and lives in [`crate::audit`].

use std::sync::Once;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

static INIT_LOGGING: Once = Once::new();

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise only this crate logs, at `level`.
pub fn init_logging(level: LevelFilter) {
    INIT_LOGGING.call_once(|| {
        let filter = match std::env::var("RUST_LOG").ok() {
            Some(_) => EnvFilter::from_default_env(),
            None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
        };

        // A subscriber may already be installed by a test harness.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

/// Map the number of `-v` flags to a level filter
pub fn level_from_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_does_not_panic() {
        init_logging(LevelFilter::WARN);
        init_logging(LevelFilter::DEBUG);
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_from_verbosity(0), LevelFilter::WARN);
        assert_eq!(level_from_verbosity(1), LevelFilter::INFO);
        assert_eq!(level_from_verbosity(2), LevelFilter::DEBUG);
        assert_eq!(level_from_verbosity(9), LevelFilter::TRACE);
    }
}
