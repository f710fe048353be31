//! Integration tests for the rln CLI
//!
//! These tests run the binary against inline templates and fixture files
//! and check exit codes and output.

use std::path::Path;
use std::process::{Command, Output};

fn rln(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rln"))
        .args(args)
        .output()
        .expect("failed to execute rln")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_render_inline_template() {
    let output = rln(&[
        "render",
        "{0} used {1} {2:image} on you",
        "simon",
        "rocket",
        r#"{image: "boom", width: 16, height: 16}"#,
    ]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "simon used rocket [boom 16x16] on you\n");
}

#[test]
fn test_render_numeric_spec() {
    let output = rln(&["render", "{0:N2}", "3.14159"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "3.14\n");
}

#[test]
fn test_render_out_of_range_image_index_fails() {
    let output = rln(&["render", "{0:image}"]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("args length 0"), "stderr: {err}");
    assert!(err.contains("image index 0"), "stderr: {err}");
}

#[test]
fn test_render_unparseable_index_warns_but_succeeds() {
    let output = rln(&["render", "a {99999999999999999999999:image} b", "x"]);
    assert!(output.status.success());
    assert!(stderr(&output).contains("does not parse"));
    assert_eq!(stdout(&output), "a  b\n");
}

#[test]
fn test_render_strict_promotes_warnings() {
    let output = rln(&[
        "render",
        "--strict",
        "a {99999999999999999999999:image} b",
        "x",
    ]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_render_arg_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("args.json5");
    std::fs::write(
        &path,
        r#"["simon", "rocket", {image: "boom", width: 16, height: 16}]"#,
    )
    .unwrap();
    let output = rln(&[
        "render",
        "--arg-file",
        path.to_str().unwrap(),
        "{0} used {1} {2:image} on you",
    ]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "simon used rocket [boom 16x16] on you\n");
}

#[test]
fn test_render_from_catalog() {
    assert!(Path::new("tests/fixtures/messages.jsonl").exists());
    let output = rln(&[
        "render",
        "--catalog",
        "tests/fixtures/messages.jsonl",
        "--name",
        "kill_feed",
        "simon",
        "rocket",
        r#"{image: "boom", width: 8, height: 8}"#,
    ]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "simon used rocket [boom 8x8] on you\n");
}

#[test]
fn test_render_catalog_without_name_is_usage_error() {
    let output = rln(&["render", "--catalog", "tests/fixtures/messages.jsonl"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_render_json_output() {
    let output = rln(&[
        "render",
        "--json",
        "{0} {1:image}",
        "hi",
        r#"{image: "dot", width: 1, height: 1}"#,
    ]);
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let elements = parsed["elements"].as_array().unwrap();
    assert_eq!(elements.len(), 2);
    assert_eq!(elements[0]["kind"], "text");
    assert_eq!(elements[0]["order"], 0);
    assert_eq!(elements[1]["kind"], "image");
    assert_eq!(elements[1]["order"], 1);
    assert_eq!(elements[1]["width"], 1);
}

#[test]
fn test_plan_breakdown() {
    let output = rln(&["plan", "{0} used {1} {2:image} on you"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("literal"));
    assert!(text.contains("arg 2"));
    assert!(text.contains("2 literal segment(s), 1 image segment(s)"));
}

#[test]
fn test_validate_clean_catalog() {
    let output = rln(&["validate", "tests/fixtures/messages.jsonl"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("5 template(s) OK"));
}

#[test]
fn test_validate_bad_catalog() {
    let output = rln(&["validate", "tests/fixtures/bad_syntax.jsonl"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("line 2"));
}

#[test]
fn test_validate_missing_file() {
    let output = rln(&["validate", "tests/fixtures/does_not_exist.jsonl"]);
    assert_eq!(output.status.code(), Some(1));
}
