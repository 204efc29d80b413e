//! Host backend: every primitive implemented directly on std facilities.

use crate::builtins::{Builtins, FPACK_WIDTH};
use crate::merge;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use std::fs::File;
use std::io::{Read, Write};
use std::process::{Command, ExitStatus};
use tern_core::{latin1, PalError, TypeTag, Value};
use tracing::{debug, trace};

/// The backend active while bootstrapping, before any self-hosted artifact
/// exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostBuiltins;

impl HostBuiltins {
    pub fn new() -> Self {
        Self
    }
}

impl Builtins for HostBuiltins {
    fn join(&self, parts: &[Value]) -> Result<Vec<u8>, PalError> {
        let mut out = Vec::new();
        for (index, part) in parts.iter().enumerate() {
            match part {
                Value::Bytes(bytes) => out.extend_from_slice(bytes),
                Value::String(text) => latin1::encode_into(text, &mut out)?,
                other => {
                    return Err(PalError::type_error(format!(
                        "join element {} must be bytes or string, got {}",
                        index,
                        other.kind()
                    )))
                }
            }
        }
        trace!(parts = parts.len(), len = out.len(), "join");
        Ok(out)
    }

    fn merge(&self, target: &mut Value, source: &Value) -> Result<(), PalError> {
        merge::merge(target, source)
    }

    fn number(&self, value: &Value) -> Result<f64, PalError> {
        match value {
            Value::String(text) => parse_number(text),
            other => other.as_float().ok_or_else(|| {
                PalError::type_error(format!("cannot convert {} to number", other.kind()))
            }),
        }
    }

    fn istype(&self, value: &Value, tag: &str) -> Result<bool, PalError> {
        Ok(TypeTag::parse(tag)?.matches(value))
    }

    fn fpack(&self, value: f64) -> Result<[u8; FPACK_WIDTH], PalError> {
        Ok(value.to_ne_bytes())
    }

    fn funpack(&self, bytes: &[u8]) -> Result<f64, PalError> {
        let packed: [u8; FPACK_WIDTH] = bytes.try_into().map_err(|_| PalError::Size {
            expected: FPACK_WIDTH,
            actual: bytes.len(),
        })?;
        Ok(f64::from_ne_bytes(packed))
    }

    fn system(&self, command: &str) -> Result<i32, PalError> {
        debug!(command, "spawning shell");
        let status = shell(command).status()?;
        let code = exit_code(status);
        debug!(command, code, "shell exited");
        Ok(code)
    }

    fn load(&self, path: &str) -> Result<Vec<u8>, PalError> {
        let mut file = File::open(path)?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf)?;
        debug!(path, len = buf.len(), "loaded file");
        Ok(buf)
    }

    fn read(&self, path: &str) -> Result<String, PalError> {
        let mut file = File::open(path)?;
        let mut text = String::new();
        file.read_to_string(&mut text)?;
        debug!(path, len = text.len(), "read file");
        Ok(text)
    }

    fn save(&self, path: &str, data: &[u8]) -> Result<(), PalError> {
        let mut file = File::create(path)?;
        file.write_all(data)?;
        file.flush()?;
        debug!(path, len = data.len(), "saved file");
        Ok(())
    }
}

/// Parse numeric text. A `0x` prefix selects an arbitrary-precision base-16
/// integer which is then widened to `f64`.
pub(crate) fn parse_number(text: &str) -> Result<f64, PalError> {
    if let Some(digits) = text.strip_prefix("0x") {
        let digits = digits.trim();
        let n = BigInt::parse_bytes(digits.as_bytes(), 16).ok_or_else(|| {
            PalError::Parse(format!("invalid hexadecimal literal '{}'", text))
        })?;
        return n
            .to_f64()
            .filter(|f| f.is_finite())
            .ok_or_else(|| PalError::Parse(format!("hexadecimal literal '{}' is too large", text)));
    }
    text.trim()
        .parse::<f64>()
        .map_err(|e| PalError::Parse(format!("could not convert '{}' to number: {}", text, e)))
}

#[cfg(unix)]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(windows)]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status
        .code()
        .or_else(|| status.signal().map(|signal| 128 + signal))
        .unwrap_or(-1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
