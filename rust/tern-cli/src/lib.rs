//! Tern CLI library.
//!
//! Argument definitions and command implementations for the `tern` binary,
//! kept in a library so they can be driven from tests.

pub mod cli;
pub mod colors;
pub mod commands;
pub mod logging;
