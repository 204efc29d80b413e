//! End-to-end tests for the `tern` subcommands, driven through the argument
//! parser.

use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tern_cli::cli::Cli;
use tern_cli::commands::{execute, Output};

fn temp_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("tern_cli_test_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Run `tern` with an explicit host identity and an empty config file.
fn tern(dir: &Path, args: &[&str]) -> Result<Output, String> {
    let config = dir.join("tern.toml");
    if !config.exists() {
        fs::write(&config, "").unwrap();
    }
    let mut argv = vec![
        "tern".to_string(),
        "--config".to_string(),
        config.display().to_string(),
        "--identity".to_string(),
        "tern-host test".to_string(),
    ];
    argv.extend(args.iter().map(|a| a.to_string()));
    let cli = Cli::try_parse_from(argv).expect("arguments parse");
    execute(cli)
}

fn text(output: Result<Output, String>) -> String {
    match output {
        Ok(Output::Text(t)) => t,
        other => panic!("expected text output, got {:?}", other),
    }
}

#[test]
fn join_prints_hex_by_default() {
    let tmp = temp_dir();
    assert_eq!(text(tern(&tmp, &["join", "ab", "cd"])), "61626364");
    assert_eq!(
        tern(&tmp, &["join", "--raw", "ab", "cd"]).unwrap(),
        Output::Bytes(b"abcd".to_vec())
    );
    fs::remove_dir_all(&tmp).unwrap();
}

#[test]
fn number_accepts_hex_and_decimal() {
    let tmp = temp_dir();
    assert_eq!(text(tern(&tmp, &["number", "0x1A"])), "26.0");
    assert_eq!(text(tern(&tmp, &["number", "-2.5"])), "-2.5");
    let err = tern(&tmp, &["number", "zz"]).unwrap_err();
    assert!(err.starts_with("parse error"), "{}", err);
    fs::remove_dir_all(&tmp).unwrap();
}

#[test]
fn merge_prints_merged_json() {
    let tmp = temp_dir();
    let out = text(tern(&tmp, &["merge", r#"{"a":1,"b":2}"#, r#"{"b":3,"c":4}"#]));
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json, serde_json::json!({"a": 1, "b": 3, "c": 4}));

    let err = tern(&tmp, &["merge", "[1]", "{}"]).unwrap_err();
    assert!(err.starts_with("type error"), "{}", err);
    fs::remove_dir_all(&tmp).unwrap();
}

#[test]
fn istype_parses_json_or_text() {
    let tmp = temp_dir();
    assert_eq!(text(tern(&tmp, &["istype", "[1,2]", "list"])), "true");
    assert_eq!(text(tern(&tmp, &["istype", "hello", "string"])), "true");
    assert_eq!(text(tern(&tmp, &["istype", "3", "string"])), "false");
    assert!(tern(&tmp, &["istype", "3", "float"]).is_err());
    fs::remove_dir_all(&tmp).unwrap();
}

#[test]
fn fpack_and_funpack_round_trip() {
    let tmp = temp_dir();
    let packed = text(tern(&tmp, &["fpack", "-6.25"]));
    assert_eq!(packed, hex::encode((-6.25f64).to_ne_bytes()));
    assert_eq!(text(tern(&tmp, &["funpack", &packed])), "-6.25");

    let err = tern(&tmp, &["funpack", "0001"]).unwrap_err();
    assert_eq!(err, "size error: expected 8 bytes, got 2");
    fs::remove_dir_all(&tmp).unwrap();
}

#[test]
fn save_load_and_read_files() {
    let tmp = temp_dir();
    let path = tmp.join("data.bin");
    let path = path.to_str().unwrap();

    text(tern(&tmp, &["save", path, "--hex", "0001ff"]));
    assert_eq!(fs::read(path).unwrap(), vec![0x00, 0x01, 0xff]);
    assert_eq!(text(tern(&tmp, &["load", path])), "0001ff");

    text(tern(&tmp, &["save", path, "--text", "line\n"]));
    assert_eq!(
        tern(&tmp, &["read", path]).unwrap(),
        Output::Bytes(b"line\n".to_vec())
    );
    fs::remove_dir_all(&tmp).unwrap();
}

#[test]
fn save_text_is_one_byte_per_char() {
    let tmp = temp_dir();
    let path = tmp.join("latin1.bin");
    let path = path.to_str().unwrap();

    text(tern(&tmp, &["save", path, "--text", "caf\u{e9}"]));
    assert_eq!(fs::read(path).unwrap(), vec![b'c', b'a', b'f', 0xE9]);
    assert_eq!(text(tern(&tmp, &["join", "caf\u{e9}"])), "636166e9");

    let err = tern(&tmp, &["save", path, "--text", "\u{20ac}"]).unwrap_err();
    assert!(err.starts_with("type error"), "{}", err);
    fs::remove_dir_all(&tmp).unwrap();
}

#[test]
fn save_requires_exactly_one_payload() {
    assert!(Cli::try_parse_from(["tern", "save", "x"]).is_err());
    assert!(Cli::try_parse_from(["tern", "save", "x", "--text", "a", "--hex", "00"]).is_err());
}

#[test]
fn load_missing_file_is_an_error() {
    let tmp = temp_dir();
    let missing = tmp.join("nope.bin");
    assert!(tern(&tmp, &["load", missing.to_str().unwrap()]).is_err());
    fs::remove_dir_all(&tmp).unwrap();
}

#[cfg(unix)]
#[test]
fn system_exits_with_command_status() {
    let tmp = temp_dir();
    assert_eq!(tern(&tmp, &["system", "exit 5"]).unwrap(), Output::Exit(5));
    fs::remove_dir_all(&tmp).unwrap();
}

#[test]
fn detect_reports_environment() {
    let tmp = temp_dir();
    let report = text(tern(&tmp, &["detect"]));
    assert!(report.contains("tern-host test"));
    assert!(report.contains("host"));
    assert!(!report.contains("self-hosted"));
    fs::remove_dir_all(&tmp).unwrap();
}

#[test]
fn self_hosted_identity_needs_runtime_builtins() {
    let tmp = temp_dir();
    let config = tmp.join("tern.toml");
    fs::write(&config, "[runtime]\nidentity = \"ignored\"\n").unwrap();

    let cli = Cli::try_parse_from([
        "tern",
        "--config",
        config.to_str().unwrap(),
        "--identity",
        "tern-vm 0.1",
        "number",
        "1",
    ])
    .unwrap();
    let err = execute(cli).unwrap_err();
    assert!(err.contains("no builtins object"), "{}", err);
    fs::remove_dir_all(&tmp).unwrap();
}

#[test]
fn config_prints_marker() {
    let tmp = temp_dir();
    fs::write(tmp.join("tern.toml"), "[runtime]\nself_hosted_marker = \"tvm\"\n").unwrap();
    let out = text(tern(&tmp, &["config"]));
    assert!(out.contains("self_hosted_marker = \"tvm\""), "{}", out);
    fs::remove_dir_all(&tmp).unwrap();
}
