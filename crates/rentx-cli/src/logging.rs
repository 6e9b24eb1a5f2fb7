//! Structured logging setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging to stderr; `RUST_LOG` overrides the verbosity flag
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "rentx_cli=debug,rentx_app=debug,rentx_infra=debug,info"
    } else {
        "warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();

    if verbose {
        tracing::debug!("Verbose logging enabled");
    }
}
