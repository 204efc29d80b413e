//! Command implementations. Each returns what `main` should emit rather than
//! printing, so the same paths run under test.

use crate::cli::{Cli, Commands, PrimitiveCommand};
use crate::colors::{bold, gray, green};
use std::path::{Path, PathBuf};
use tern_pal::config::CONFIG_FILE_NAME;
use tern_pal::env::resolve_identity;
use tern_pal::{latin1, Builtins, Environment, Pal, PalConfig, PalError, Value};
use tracing::debug;

/// What a command produced.
#[derive(Debug, PartialEq)]
pub enum Output {
    /// Printed followed by a newline.
    Text(String),
    /// Written to stdout unchanged.
    Bytes(Vec<u8>),
    /// Terminate with this status.
    Exit(i32),
}

pub fn execute(cli: Cli) -> Result<Output, String> {
    let (source, config) = load_config(cli.config.as_deref())?;
    let identity = cli.identity.as_deref();
    match cli.command {
        Commands::Detect => Ok(Output::Text(detect_report(&config, identity))),
        Commands::Config { template } => config_report(source.as_deref(), &config, template),
        Commands::Primitive(command) => {
            let pal = Pal::bootstrap(&config, identity, None).map_err(pal_err)?;
            run(&pal, command)
        }
    }
}

/// The config to use and the file it came from, if any.
pub fn load_config(path: Option<&Path>) -> Result<(Option<PathBuf>, PalConfig), String> {
    match path {
        Some(path) => Ok((Some(path.to_path_buf()), PalConfig::load_from(path)?)),
        None => Ok(match PalConfig::load_with_path()? {
            Some((found, config)) => (Some(found), config),
            None => (None, PalConfig::default()),
        }),
    }
}

pub fn detect_report(config: &PalConfig, identity: Option<&str>) -> String {
    let identity = resolve_identity(identity, config);
    let marker = &config.runtime.self_hosted_marker;
    let environment = Environment::detect(&identity, marker);
    format!(
        "{} {}\n{} {}\n{} {}",
        gray("identity:"),
        identity,
        gray("marker:"),
        marker,
        gray("environment:"),
        bold(&environment.to_string())
    )
}

fn config_report(source: Option<&Path>, config: &PalConfig, template: bool) -> Result<Output, String> {
    if template {
        return Ok(Output::Text(PalConfig::default_template().trim_end().to_string()));
    }
    let text = toml::to_string_pretty(config).map_err(|e| format!("cannot render config: {}", e))?;
    let origin = match source {
        Some(path) => format!("# loaded from {}", path.display()),
        None => format!("# no {} found, using defaults", CONFIG_FILE_NAME),
    };
    Ok(Output::Text(format!("{}\n{}", origin, text.trim_end())))
}

/// Run one primitive subcommand against `pal`.
pub fn run(pal: &Pal, command: PrimitiveCommand) -> Result<Output, String> {
    debug!(?command, environment = %pal.environment(), "running primitive command");
    match command {
        PrimitiveCommand::Join { parts, raw } => {
            let parts: Vec<Value> = parts.into_iter().map(Value::from).collect();
            Ok(bytes_output(pal.join(&parts).map_err(pal_err)?, raw))
        }
        PrimitiveCommand::Merge { target, source } => {
            let mut target = parse_json_arg(&target)?;
            let source = parse_json_arg(&source)?;
            pal.merge(&mut target, &source).map_err(pal_err)?;
            Ok(Output::Text(target.to_json().to_string()))
        }
        PrimitiveCommand::Number { text } => {
            let n = pal.number(&Value::from(text)).map_err(pal_err)?;
            Ok(Output::Text(Value::Float(n).display_pretty()))
        }
        PrimitiveCommand::Istype { value, tag } => {
            let value = parse_value_or_text(&value);
            let matched = pal.istype(&value, &tag).map_err(pal_err)?;
            Ok(Output::Text(matched.to_string()))
        }
        PrimitiveCommand::Fpack { value } => {
            Ok(Output::Text(hex::encode(pal.fpack(value).map_err(pal_err)?)))
        }
        PrimitiveCommand::Funpack { hex } => {
            let bytes = decode_hex(&hex)?;
            let n = pal.funpack(&bytes).map_err(pal_err)?;
            Ok(Output::Text(Value::Float(n).display_pretty()))
        }
        PrimitiveCommand::System { command } => {
            Ok(Output::Exit(pal.system(&command).map_err(pal_err)?))
        }
        PrimitiveCommand::Load { path, raw } => {
            Ok(bytes_output(pal.load(&path).map_err(pal_err)?, raw))
        }
        PrimitiveCommand::Read { path } => {
            Ok(Output::Bytes(pal.read(&path).map_err(pal_err)?.into_bytes()))
        }
        PrimitiveCommand::Save { path, text, hex } => {
            let data = match (text, hex) {
                (Some(text), _) => latin1::encode(&text).map_err(pal_err)?,
                (None, Some(hex)) => decode_hex(&hex)?,
                (None, None) => return Err("save needs --text or --hex".to_string()),
            };
            pal.save(&path, &data).map_err(pal_err)?;
            Ok(Output::Text(format!(
                "{} wrote {} bytes to {}",
                green("✓"),
                data.len(),
                bold(&path)
            )))
        }
        PrimitiveCommand::Argv => {
            let argv = Value::List(pal.argv().into_iter().map(Value::from).collect());
            Ok(Output::Text(argv.to_json().to_string()))
        }
    }
}

fn bytes_output(bytes: Vec<u8>, raw: bool) -> Output {
    if raw {
        Output::Bytes(bytes)
    } else {
        Output::Text(hex::encode(bytes))
    }
}

fn decode_hex(text: &str) -> Result<Vec<u8>, String> {
    hex::decode(text.trim()).map_err(|e| format!("invalid hex '{}': {}", text, e))
}

fn parse_json_arg(text: &str) -> Result<Value, String> {
    serde_json::from_str::<serde_json::Value>(text)
        .map(|json| Value::from_json(&json))
        .map_err(|e| format!("invalid JSON '{}': {}", text, e))
}

/// JSON when it parses, otherwise the argument as plain text.
fn parse_value_or_text(text: &str) -> Value {
    parse_json_arg(text).unwrap_or_else(|_| Value::str(text))
}

fn pal_err(e: PalError) -> String {
    e.to_string()
}
