//! Self-hosted backend: forwards every primitive to the runtime's builtins.
//!
//! This backend owns no semantics. Arguments, results and errors pass through
//! unchanged, so code running here observes exactly what the runtime's
//! builtins object reports.

use crate::builtins::{Builtins, FPACK_WIDTH};
use std::fmt;
use std::sync::Arc;
use tern_core::{PalError, Value};
use tracing::trace;

pub struct SelfHostedBuiltins {
    builtins: Arc<dyn Builtins>,
}

impl SelfHostedBuiltins {
    pub fn new(builtins: Arc<dyn Builtins>) -> Self {
        Self { builtins }
    }
}

impl fmt::Debug for SelfHostedBuiltins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelfHostedBuiltins").finish_non_exhaustive()
    }
}

impl Builtins for SelfHostedBuiltins {
    fn join(&self, parts: &[Value]) -> Result<Vec<u8>, PalError> {
        trace!(primitive = "join", "forwarding");
        self.builtins.join(parts)
    }

    fn merge(&self, target: &mut Value, source: &Value) -> Result<(), PalError> {
        trace!(primitive = "merge", "forwarding");
        self.builtins.merge(target, source)
    }

    fn number(&self, value: &Value) -> Result<f64, PalError> {
        trace!(primitive = "number", "forwarding");
        self.builtins.number(value)
    }

    fn istype(&self, value: &Value, tag: &str) -> Result<bool, PalError> {
        trace!(primitive = "istype", "forwarding");
        self.builtins.istype(value, tag)
    }

    fn fpack(&self, value: f64) -> Result<[u8; FPACK_WIDTH], PalError> {
        trace!(primitive = "fpack", "forwarding");
        self.builtins.fpack(value)
    }

    fn funpack(&self, bytes: &[u8]) -> Result<f64, PalError> {
        trace!(primitive = "funpack", "forwarding");
        self.builtins.funpack(bytes)
    }

    fn system(&self, command: &str) -> Result<i32, PalError> {
        trace!(primitive = "system", "forwarding");
        self.builtins.system(command)
    }

    fn load(&self, path: &str) -> Result<Vec<u8>, PalError> {
        trace!(primitive = "load", "forwarding");
        self.builtins.load(path)
    }

    fn read(&self, path: &str) -> Result<String, PalError> {
        trace!(primitive = "read", "forwarding");
        self.builtins.read(path)
    }

    fn save(&self, path: &str, data: &[u8]) -> Result<(), PalError> {
        trace!(primitive = "save", "forwarding");
        self.builtins.save(path, data)
    }

    fn argv(&self) -> Vec<String> {
        self.builtins.argv()
    }
}
