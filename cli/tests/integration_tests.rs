use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;

/// Minimal declaration YAML for testing.
const TOOL_YAML: &str = r#"
title: mytool
groups:
  common:
    items:
      - option: { short: h, long: help }
items:
  - text: "Usage: mytool [OPTIONS]"
  - include: common
  - option: { short: o, long: output, takes_argument: true }
  - group:
      title: Display
      items:
        - option: { long: color }
        - option: { long: columns, takes_argument: true }
"#;

fn write_decl(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("failed to write declaration");
    path
}

fn optgroup(args: &[&str]) -> Output {
    std::process::Command::new(env!("CARGO_BIN_EXE_optgroup"))
        .args(args)
        .output()
        .expect("failed to run optgroup")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// ---------------------------------------------------------------------------
// check / list
// ---------------------------------------------------------------------------

#[test]
fn check_reports_reachable_options() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_decl(dir.path(), "tool.yaml", TOOL_YAML);

    let output = optgroup(&["check", path.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("4 option(s) reachable"));
}

#[test]
fn check_fails_on_name_clash() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_decl(
        dir.path(),
        "clash.json",
        r#"{"items": [
            {"option": {"short": "v", "long": "verbose"}},
            {"option": {"short": "v", "long": "version"}}
        ]}"#,
    );

    let output = optgroup(&["check", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("both use the name 'v'"), "stderr: {stderr}");
}

#[test]
fn list_table_follows_declaration_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_decl(dir.path(), "tool.yaml", TOOL_YAML);

    let output = optgroup(&["list", path.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "-h, --help\n-o, --output ARG\n    --color\n    --columns ARG\n"
    );
}

#[test]
fn list_json_is_machine_readable() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_decl(dir.path(), "tool.yaml", TOOL_YAML);

    let output = optgroup(&["list", path.to_str().unwrap(), "--format", "json"]);
    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(rows.as_array().map(Vec::len), Some(4));
    assert_eq!(rows[1]["long"], "output");
    assert_eq!(rows[1]["takes_argument"], true);
}

// ---------------------------------------------------------------------------
// resolve
// ---------------------------------------------------------------------------

#[test]
fn resolve_by_name_abbreviation_and_sticky() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_decl(dir.path(), "tool.yaml", TOOL_YAML);
    let file = path.to_str().unwrap();

    let by_long = optgroup(&["resolve", file, "--long", "help"]);
    assert!(by_long.status.success());
    assert_eq!(stdout(&by_long), "--help\tmatched=help\n");

    let by_partial = optgroup(&["resolve", file, "--partial", "col"]);
    assert!(by_partial.status.success());
    assert_eq!(stdout(&by_partial), "--color\tcompleted=color\n");

    let by_sticky = optgroup(&["resolve", file, "--sticky", "oout.txt"]);
    assert!(by_sticky.status.success());
    assert_eq!(stdout(&by_sticky), "--output\targument=out.txt\n");
}

#[test]
fn resolve_absence_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_decl(dir.path(), "tool.yaml", TOOL_YAML);

    let output = optgroup(&["resolve", path.to_str().unwrap(), "--short", "z"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "no match\n");
}

#[test]
fn resolve_reports_unsupported_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_decl(dir.path(), "tool.ini", "[options]");

    let output = optgroup(&["resolve", path.to_str().unwrap(), "--long", "help"]);
    assert_eq!(output.status.code(), Some(2));
}
