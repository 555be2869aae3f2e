//! Log subscriber setup.
//!
//! Logs go to stderr so stdout stays the calculator display. `-v`/`-vv`
//! pick the level; without them `RUST_LOG` is honoured.

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use tracing_subscriber::EnvFilter;

/// Builds the filter for `config`, preferring explicit `-v` flags over `RUST_LOG`
pub fn build_filter(config: &CliConfig) -> CliResult<EnvFilter> {
    let directive = config.verbosity.filter_directive();
    if config.verbosity.is_verbose() || config.verbosity.is_quiet() {
        return EnvFilter::try_new(directive)
            .map_err(|e| CliError::config(format!("Invalid log filter: {e}")));
    }
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .map_err(|e| CliError::config(format!("Invalid log filter: {e}")))
}

/// Installs the global subscriber.
///
/// A second call is a no-op, so tests may call it freely.
pub fn init_logging(config: &CliConfig) -> CliResult<()> {
    let filter = build_filter(config)?;
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(config.color.should_color())
        .with_target(false)
        .without_time()
        .try_init();
    if installed.is_err() {
        tracing::debug!("log subscriber already installed");
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::{ColorChoice, Verbosity};

    #[test]
    fn test_verbose_filter_ignores_environment() {
        let config = CliConfig::new().with_verbosity(Verbosity::Verbose);
        let filter = build_filter(&config).unwrap();
        assert!(filter.to_string().contains("abacus=debug"));
    }

    #[test]
    fn test_quiet_filter() {
        let config = CliConfig::new().with_verbosity(Verbosity::Quiet);
        let filter = build_filter(&config).unwrap();
        assert_eq!(filter.to_string(), "error");
    }

    #[test]
    fn test_init_twice_is_ok() {
        let config = CliConfig::new()
            .with_verbosity(Verbosity::Quiet)
            .with_color(ColorChoice::Never);
        init_logging(&config).unwrap();
        init_logging(&config).unwrap();
    }
}
