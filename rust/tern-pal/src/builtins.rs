//! The builtins capability: the primitive set shared by both backends.

use tern_core::{PalError, Value};

/// Width of a packed float.
pub const FPACK_WIDTH: usize = 8;

/// Primitive operations every backend provides with identical contracts.
///
/// The self-hosted runtime supplies an implementation of this trait; the
/// host backend implements it directly. Failures are returned to the caller
/// as-is, never retried or translated.
pub trait Builtins: Send + Sync {
    /// Concatenate byte sequences and text into one byte sequence. Text is
    /// encoded one byte per character (Latin-1).
    fn join(&self, parts: &[Value]) -> Result<Vec<u8>, PalError>;

    /// Copy every entry of `source` onto `target`, overwriting existing keys.
    fn merge(&self, target: &mut Value, source: &Value) -> Result<(), PalError>;

    /// Coerce text or a number to `f64`. Text prefixed with `0x` is read as a
    /// base-16 integer.
    fn number(&self, value: &Value) -> Result<f64, PalError>;

    /// Whether `value` belongs to the kind named by `tag`.
    fn istype(&self, value: &Value, tag: &str) -> Result<bool, PalError>;

    /// Encode a double in the host's native byte order.
    ///
    /// The byte order is not normalized, so packed values are only portable
    /// between machines of the same endianness.
    fn fpack(&self, value: f64) -> Result<[u8; FPACK_WIDTH], PalError>;

    /// Inverse of [`Builtins::fpack`]. Fails unless given exactly eight bytes.
    fn funpack(&self, bytes: &[u8]) -> Result<f64, PalError>;

    /// Run a command line through the platform shell and return its exit
    /// status. A non-zero status is data, not an error.
    fn system(&self, command: &str) -> Result<i32, PalError>;

    fn load(&self, path: &str) -> Result<Vec<u8>, PalError>;

    fn read(&self, path: &str) -> Result<String, PalError>;

    fn save(&self, path: &str, data: &[u8]) -> Result<(), PalError>;

    /// Process argument vector.
    fn argv(&self) -> Vec<String> {
        std::env::args().collect()
    }
}
