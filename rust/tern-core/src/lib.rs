//! Tern Core
//!
//! Shared value model, type tags and error taxonomy used by both backends of
//! the bootstrap platform-abstraction layer.

pub mod error;
pub mod latin1;
pub mod types;
pub mod values;

pub use error::{PalError, RuntimeError};
pub use types::TypeTag;
pub use values::{RecordValue, Value};
