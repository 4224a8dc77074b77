//! Tracing subscriber setup shared by the desktop binary and tests.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "habitgallery=debug,habitgallery_core=debug"
    } else {
        "habitgallery=info,habitgallery_core=info"
    }
}

/// Install the global fmt subscriber. `RUST_LOG` wins over `verbose`.
///
/// Returns false if a subscriber was already installed.
pub fn init(verbose: bool) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}
