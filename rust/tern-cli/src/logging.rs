//! Log subscriber setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "TERN_LOG";

/// Install the global subscriber, writing to stderr. `TERN_LOG` wins over
/// `--verbose`; otherwise only warnings are shown.
pub fn init(verbose: bool) {
    let default = if verbose { "tern_pal=debug,tern_cli=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default));
    // Keeps an already installed subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
