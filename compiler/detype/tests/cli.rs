#![allow(clippy::unwrap_used, clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;

#[test]
fn strips_stdin_to_stdout() {
    let mut cmd = cargo_bin_cmd!("detype");
    cmd.arg("--stdin").write_stdin("let x: number = 5;");
    cmd.assert().success().stdout("let x = 5;");
}

#[test]
fn overwrites_input_file_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.ts");
    fs::write(&path, "function f<T>(a: T): T { return a; }\n").unwrap();

    let mut cmd = cargo_bin_cmd!("detype");
    cmd.arg("-f").arg(&path);
    cmd.assert().success().stdout(predicate::str::contains(
        "Type stripping complete. Output written to:",
    ));

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "function f(a) { return a; }\n"
    );
}

#[test]
fn writes_to_explicit_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("a.ts");
    let output = dir.path().join("a.js");
    let source = "class A implements B { private x: number = 1; }";
    fs::write(&input, source).unwrap();

    let mut cmd = cargo_bin_cmd!("detype");
    cmd.arg("--file").arg(&input).arg("--output").arg(&output);
    cmd.assert().success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "class A  { x = 1; }");
    assert_eq!(fs::read_to_string(&input).unwrap(), source);
}

#[test]
fn dash_output_prints_file_result() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("a.ts");
    fs::write(&input, "const s = \"a: number\";").unwrap();

    let mut cmd = cargo_bin_cmd!("detype");
    cmd.arg("-f").arg(&input).arg("-o").arg("-");
    cmd.assert()
        .success()
        .stdout("const s = \"a: number\";");
}

#[test]
fn requires_an_input_source() {
    let mut cmd = cargo_bin_cmd!("detype");
    cmd.assert().failure().stderr(predicate::str::contains("--file"));
}

#[test]
fn rejects_both_sources() {
    let mut cmd = cargo_bin_cmd!("detype");
    cmd.args(["-f", "a.ts", "-s"]);
    cmd.assert().failure();
}

#[test]
fn missing_file_fails_with_message() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("detype");
    cmd.arg("-f").arg(dir.path().join("missing.ts"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::starts_with("error: cannot read"));
}

#[test]
fn enforces_max_size() {
    let mut cmd = cargo_bin_cmd!("detype");
    cmd.args(["-s", "--max-size", "4"]).write_stdin("let x;");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("too large (max 4 bytes)"));
}

#[test]
fn empty_input_fails() {
    let mut cmd = cargo_bin_cmd!("detype");
    cmd.arg("-s").write_stdin("");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("input is empty"));
}

#[test]
fn elide_optional_types_flag() {
    let mut cmd = cargo_bin_cmd!("detype");
    cmd.args(["-s", "--elide-optional-types"])
        .write_stdin("function f(age?: number) {}");
    cmd.assert().success().stdout("function f(age) {}");
}

#[test]
fn dump_tokens_lists_kinds() {
    let mut cmd = cargo_bin_cmd!("detype");
    cmd.args(["-s", "--dump-tokens"]).write_stdin("a as B");
    cmd.assert().success().stdout(
        predicate::str::contains("Tokens for stdin (6 tokens):")
            .and(predicate::str::contains("As"))
            .and(predicate::str::contains("Eof")),
    );
}

#[test]
fn verbose_logs_to_stderr_only() {
    let mut cmd = cargo_bin_cmd!("detype");
    cmd.args(["-s", "-v"])
        .env_remove("RUST_LOG")
        .write_stdin("let x: number = 5;");
    cmd.assert()
        .success()
        .stdout("let x = 5;")
        .stderr(predicate::str::contains("stripped"));
}
