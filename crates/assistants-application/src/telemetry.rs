//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber.
///
/// `RUST_LOG` wins over `default_filter`; an invalid `default_filter` falls
/// back to `info`. Returns `false` when a global subscriber was already set,
/// so calling it more than once (e.g. from several tests) is harmless.
pub fn init_tracing(default_filter: &str) -> bool {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match default_filter.parse::<EnvFilter>() {
            Ok(filter) => filter,
            Err(e) => {
                eprintln!(
                    "WARN: log_level='{}' is not a valid tracing filter ({}); falling back to 'info'",
                    default_filter, e
                );
                EnvFilter::new("info")
            }
        },
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
