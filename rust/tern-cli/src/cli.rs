//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "tern",
    version,
    about = "Run the Tern bootstrap primitives from the command line"
)]
pub struct Cli {
    /// Load configuration from this file instead of searching for tern.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Runtime identity string handed to the environment detector
    #[arg(long, global = true)]
    pub identity: Option<String>,

    /// Log primitive calls to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the resolved identity and the environment it selects
    Detect,
    /// Print the loaded configuration
    Config {
        /// Print a commented tern.toml template instead
        #[arg(long)]
        template: bool,
    },
    #[command(flatten)]
    Primitive(PrimitiveCommand),
}

/// Subcommands that call into the primitive set.
#[derive(Subcommand, Debug)]
pub enum PrimitiveCommand {
    /// Join text fragments into one Latin-1 byte sequence
    Join {
        parts: Vec<String>,
        /// Write raw bytes instead of hex
        #[arg(long)]
        raw: bool,
    },
    /// Merge the SOURCE mapping into the TARGET mapping (both JSON)
    Merge { target: String, source: String },
    /// Coerce text to a number (0x prefix reads base 16)
    Number {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Test a value against a type tag (string, list, dict, number).
    /// VALUE is parsed as JSON, falling back to plain text.
    Istype { value: String, tag: String },
    /// Pack a number into 8 native-order bytes, printed as hex
    Fpack {
        #[arg(allow_hyphen_values = true)]
        value: f64,
    },
    /// Unpack 8 hex-encoded bytes into a number
    Funpack { hex: String },
    /// Run a command through the platform shell and exit with its status
    System { command: String },
    /// Print a file's bytes as hex
    Load {
        path: String,
        /// Write raw bytes instead of hex
        #[arg(long)]
        raw: bool,
    },
    /// Print a file's text
    Read { path: String },
    /// Write bytes to a file, replacing its contents
    Save {
        path: String,
        /// Text to write
        #[arg(long, conflicts_with = "hex", required_unless_present = "hex")]
        text: Option<String>,
        /// Hex-encoded bytes to write
        #[arg(long)]
        hex: Option<String>,
    },
    /// Print the process argument vector as JSON
    Argv,
}
