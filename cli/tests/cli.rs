use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

fn write_file(path: &Path, contents: &str) {
    fs::write(path, contents).expect("write test file");
}

#[test]
fn escape_shell_from_stdin() {
    cargo_bin_cmd!("textbuilder")
        .args(["escape", "shell"])
        .write_stdin("it's\n")
        .assert()
        .success()
        .stdout(r"'it'\''s'");
}

#[test]
fn escape_sql_with_template() {
    cargo_bin_cmd!("textbuilder")
        .args(["escape", "sql", "--template", "'{}'"])
        .write_stdin("O'Brien")
        .assert()
        .success()
        .stdout("'O''Brien'");
}

#[test]
fn escape_uri_from_file() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("input.txt");
    write_file(&input, "a b/c\n");

    cargo_bin_cmd!("textbuilder")
        .args(["escape", "uri"])
        .arg(&input)
        .assert()
        .success()
        .stdout("a%20b%2Fc");
}

#[test]
fn escape_rejects_bad_template() {
    cargo_bin_cmd!("textbuilder")
        .args(["escape", "xml", "--template", "<a>{}{}</a>"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(contains("ERROR").and(contains("invalid template")));
}

#[test]
fn indent_every_line() {
    cargo_bin_cmd!("textbuilder")
        .args(["indent", "--width", "4"])
        .write_stdin("<a>\n<b/>\n\n</a>\n")
        .assert()
        .success()
        .stdout("    <a>\n    <b/>\n\n    </a>\n");
}

#[test]
fn indent_empty_input_prints_nothing() {
    cargo_bin_cmd!("textbuilder")
        .args(["indent", "--width", "4"])
        .write_stdin("")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn indent_writes_output_file() {
    let dir = TempDir::new().expect("tempdir");
    let output = dir.path().join("out.txt");

    cargo_bin_cmd!("textbuilder")
        .args(["indent", "-w", "2", "-o"])
        .arg(&output)
        .write_stdin("x\ny")
        .assert()
        .success()
        .stdout(contains("Wrote").and(contains("out.txt")));

    assert_eq!(fs::read_to_string(&output).expect("read output"), "  x\n  y");
}

#[test]
fn rust_log_enables_debug_events() {
    cargo_bin_cmd!("textbuilder")
        .env("RUST_LOG", "debug")
        .args(["escape", "xml", "--template", "<a>{}{}</a>"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(contains("rejected escape template"));
}

#[test]
fn logging_is_quiet_by_default() {
    cargo_bin_cmd!("textbuilder")
        .env_remove("RUST_LOG")
        .args(["escape", "xml", "--template", "<a>{}{}</a>"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(contains("rejected escape template").not());
}

#[test]
fn uri_prints_components() {
    cargo_bin_cmd!("textbuilder")
        .args(["uri", "qemu+ssh://root@example.com:2222/system"])
        .assert()
        .success()
        .stdout(
            contains("\"scheme\": \"qemu+ssh\"")
                .and(contains("\"port\": 2222"))
                .and(contains("\"path\": \"/system\"")),
        );
}

#[test]
fn uri_format_drops_default_port() {
    cargo_bin_cmd!("textbuilder")
        .args(["uri", "--format", "http://example.com:80/x"])
        .assert()
        .success()
        .stdout("http://example.com/x");
}

#[test]
fn uri_rejects_relative_reference() {
    cargo_bin_cmd!("textbuilder")
        .args(["uri", "relative/only"])
        .assert()
        .failure()
        .stderr(contains("invalid URI"));
}
