//! Logging setup for hosts that have no subscriber of their own.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "trailhead=info";

/// Install a `fmt` subscriber filtered by `RUST_LOG` plus `trailhead=info`.
///
/// Safe to call more than once; only the first call does anything, and a
/// subscriber installed elsewhere is left in place.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = DEFAULT_DIRECTIVE.parse() {
            filter = filter.add_directive(directive);
        }

        if fmt().with_env_filter(filter).try_init().is_err() {
            tracing::debug!("global subscriber already set");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_tracing();
        init_tracing();
        tracing::info!("still logging");
    }
}
