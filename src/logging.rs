// SPDX-License-Identifier: MPL-2.0
//! Logging setup built on `tracing`.
//!
//! Log lines go to stderr. The filter is read from `STOREFRONT_LOG` using the
//! usual `EnvFilter` syntax, for example:
//!
//! ```bash
//! STOREFRONT_LOG=storefront::navigation=debug storefront
//! ```
//!
//! Without it, the crate logs at `info` (or `debug` with `--verbose`) and
//! everything else at `warn`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter.
pub const ENV_LOG_FILTER: &str = "STOREFRONT_LOG";

/// Filter used when `STOREFRONT_LOG` is unset or invalid.
#[must_use]
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "warn,storefront=debug"
    } else {
        "warn,storefront=info"
    }
}

/// Installs the global subscriber.
///
/// Safe to call more than once; only the first call installs anything.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(ENV_LOG_FILTER)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();

    if result.is_err() {
        tracing::debug!("logging already initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_crate_level() {
        assert!(default_directive(true).contains("storefront=debug"));
        assert!(default_directive(false).contains("storefront=info"));
    }

    #[test]
    fn default_directives_parse() {
        for verbose in [false, true] {
            assert!(default_directive(verbose).parse::<EnvFilter>().is_ok());
        }
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(false);
        init(true);
    }
}
