use envault_core::ENVAULT_LOG_VAR;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Re-export tracing macros for convenience
pub use ::tracing::{debug, error, info, trace, warn, Level};

/// Default directive when neither `--verbose` nor `ENVAULT_LOG` is given
const DEFAULT_DIRECTIVE: &str = "warn";

/// Initialize the tracing system
///
/// Diagnostics always go to stderr so they never mix with the wrapped
/// command's stdout. `verbose` forces debug output for the envault crates;
/// otherwise the filter comes from `ENVAULT_LOG` (EnvFilter syntax).
///
/// Fails if a global subscriber is already installed.
pub fn init(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .compact()
        .with_target(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter(verbose))
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("envault=debug,envault_providers=debug,envault_env=debug");
    }
    EnvFilter::try_from_env(ENVAULT_LOG_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}
