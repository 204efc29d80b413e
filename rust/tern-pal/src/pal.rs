//! The dispatch handle: one resolved environment and its backend.

use crate::builtins::{Builtins, FPACK_WIDTH};
use crate::config::PalConfig;
use crate::dispatch::call_builtin;
use crate::env::{resolve_identity, Environment};
use crate::host::HostBuiltins;
use crate::self_hosted::SelfHostedBuiltins;
use std::sync::Arc;
use tern_core::{PalError, RuntimeError, Value};
use tracing::debug;

#[derive(Debug)]
enum Backend {
    Host(HostBuiltins),
    SelfHosted(SelfHostedBuiltins),
}

/// Primitive set bound to the environment detected at startup.
///
/// A `Pal` is built once and passed to whatever needs the primitives. Its
/// environment never changes after construction. `Pal` implements
/// [`Builtins`] itself, so it can be handed to code expecting a builtins
/// object.
#[derive(Debug)]
pub struct Pal {
    environment: Environment,
    backend: Backend,
}

impl Pal {
    pub fn host() -> Self {
        Self {
            environment: Environment::Host,
            backend: Backend::Host(HostBuiltins::new()),
        }
    }

    /// Forward every primitive to `builtins`, the runtime's native surface.
    pub fn self_hosted(builtins: Arc<dyn Builtins>) -> Self {
        Self {
            environment: Environment::SelfHosted,
            backend: Backend::SelfHosted(SelfHostedBuiltins::new(builtins)),
        }
    }

    /// Build the handle for `environment`. The self-hosted environment needs
    /// the runtime's builtins object; the host environment ignores it.
    pub fn select(
        environment: Environment,
        builtins: Option<Arc<dyn Builtins>>,
    ) -> Result<Self, PalError> {
        match (environment, builtins) {
            (Environment::Host, _) => Ok(Self::host()),
            (Environment::SelfHosted, Some(builtins)) => Ok(Self::self_hosted(builtins)),
            (Environment::SelfHosted, None) => Err(RuntimeError::new(
                "self-hosted runtime detected but no builtins object was supplied",
            )
            .into()),
        }
    }

    /// Resolve the runtime identity, detect the environment and select the
    /// backend. Meant to run once at process start.
    pub fn bootstrap(
        config: &PalConfig,
        identity: Option<&str>,
        builtins: Option<Arc<dyn Builtins>>,
    ) -> Result<Self, PalError> {
        let identity = resolve_identity(identity, config);
        let environment = Environment::detect(&identity, &config.runtime.self_hosted_marker);
        Self::select(environment, builtins)
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Call a primitive by name with value arguments.
    pub fn call(&self, name: &str, args: Vec<Value>) -> Result<Value, PalError> {
        debug!(builtin = name, args = args.len(), environment = %self.environment, "call");
        call_builtin(self.backend(), name, args)
    }

    fn backend(&self) -> &dyn Builtins {
        match &self.backend {
            Backend::Host(host) => host as &dyn Builtins,
            Backend::SelfHosted(forward) => forward,
        }
    }
}

impl Builtins for Pal {
    fn join(&self, parts: &[Value]) -> Result<Vec<u8>, PalError> {
        self.backend().join(parts)
    }

    fn merge(&self, target: &mut Value, source: &Value) -> Result<(), PalError> {
        self.backend().merge(target, source)
    }

    fn number(&self, value: &Value) -> Result<f64, PalError> {
        self.backend().number(value)
    }

    fn istype(&self, value: &Value, tag: &str) -> Result<bool, PalError> {
        self.backend().istype(value, tag)
    }

    fn fpack(&self, value: f64) -> Result<[u8; FPACK_WIDTH], PalError> {
        self.backend().fpack(value)
    }

    fn funpack(&self, bytes: &[u8]) -> Result<f64, PalError> {
        self.backend().funpack(bytes)
    }

    fn system(&self, command: &str) -> Result<i32, PalError> {
        self.backend().system(command)
    }

    fn load(&self, path: &str) -> Result<Vec<u8>, PalError> {
        self.backend().load(path)
    }

    fn read(&self, path: &str) -> Result<String, PalError> {
        self.backend().read(path)
    }

    fn save(&self, path: &str, data: &[u8]) -> Result<(), PalError> {
        self.backend().save(path, data)
    }

    fn argv(&self) -> Vec<String> {
        self.backend().argv()
    }
}
