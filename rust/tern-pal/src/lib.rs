//! Tern PAL
//!
//! The bootstrap platform-abstraction layer: the primitive set the Tern
//! compiler relies on, available under two interchangeable backends.
//!
//! - [`host::HostBuiltins`] implements every primitive with host facilities
//!   and is used while bootstrapping.
//! - [`self_hosted::SelfHostedBuiltins`] forwards every primitive to the
//!   builtins object supplied by the self-hosted runtime.
//!
//! The backend is chosen once, at startup, by building a [`Pal`] handle from
//! the detected [`Environment`]; callers thread that handle explicitly.

pub mod builtins;
pub mod config;
pub mod dispatch;
pub mod env;
pub mod host;
pub mod merge;
pub mod pal;
pub mod self_hosted;

pub use builtins::Builtins;
pub use config::PalConfig;
pub use env::Environment;
pub use pal::Pal;
pub use tern_core::{latin1, PalError, RecordValue, RuntimeError, TypeTag, Value};
