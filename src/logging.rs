//! Diagnostic logging
//!
//! Log output goes to stderr so it never mixes with command output on stdout.
//! The filter comes from `LEDCONF_LOG` (same syntax as `RUST_LOG`); without it
//! only warnings are shown, or debug output for this crate with `--verbose`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "LEDCONF_LOG";

/// Install the global subscriber
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbose: bool) {
    let default_directive = if verbose {
        "warn,led_configurator=debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_directive))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice() {
        init(false);
        init(true);
        tracing::debug!("still fine after a second init");
    }
}
