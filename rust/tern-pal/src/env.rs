//! Runtime environment detection.
//!
//! The active runtime is identified by a version/identity string. An identity
//! containing the self-hosted marker selects [`Environment::SelfHosted`];
//! anything else selects [`Environment::Host`]. Detection cannot fail.

use crate::config::PalConfig;
use strum::Display;
use tracing::info;

/// Marker embedded in the self-hosted runtime's identity string.
pub const DEFAULT_SELF_HOSTED_MARKER: &str = "tern-vm";

/// Environment variable consulted before the config file.
pub const IDENTITY_ENV_VAR: &str = "TERN_RUNTIME_IDENTITY";

/// Which backend serves primitive calls for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Environment {
    Host,
    SelfHosted,
}

impl Environment {
    /// Classify an identity string. An empty marker never matches.
    pub fn detect(identity: &str, marker: &str) -> Self {
        let env = if !marker.is_empty() && identity.contains(marker) {
            Environment::SelfHosted
        } else {
            Environment::Host
        };
        info!(identity, marker, environment = %env, "detected runtime environment");
        env
    }
}

/// Identity reported when nothing else names the runtime.
pub fn host_identity() -> String {
    format!("tern-host {} (rust)", env!("CARGO_PKG_VERSION"))
}

/// Pick the identity string: explicit value, then `TERN_RUNTIME_IDENTITY`,
/// then `runtime.identity` from the config, then [`host_identity`].
pub fn resolve_identity(explicit: Option<&str>, config: &PalConfig) -> String {
    resolve_identity_with(explicit, std::env::var(IDENTITY_ENV_VAR).ok(), config)
}

pub(crate) fn resolve_identity_with(
    explicit: Option<&str>,
    from_env: Option<String>,
    config: &PalConfig,
) -> String {
    explicit
        .map(str::to_string)
        .or_else(|| from_env.filter(|s| !s.is_empty()))
        .or_else(|| config.runtime.identity.clone())
        .unwrap_or_else(host_identity)
}
