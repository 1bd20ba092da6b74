//! End-to-end tests for the `pcl` binary
//!
//! Exercises the process boundary: exit codes, stdout bytes, stderr
//! diagnostics, and stdin consumption.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn pcl() -> Command {
    Command::cargo_bin("pcl").expect("binary builds")
}

fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../demos")
        .join(name)
}

fn source_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write source");
    file
}

#[test]
fn test_run_hello_demo() {
    pcl()
        .arg("run")
        .arg(demo("hello.pcl"))
        .assert()
        .success()
        .stdout("42\n")
        .stderr("");
}

#[test]
fn test_run_factorial_demo_reads_stdin() {
    pcl()
        .arg("run")
        .arg(demo("factorial.pcl"))
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout("120\n");
}

#[test]
fn test_run_fib_demo() {
    pcl()
        .arg("run")
        .arg(demo("fib.pcl"))
        .write_stdin("7\n")
        .assert()
        .success()
        .stdout("0\n1\n1\n2\n3\n5\n8\n");
}

#[test]
fn test_run_gcd_demo() {
    pcl()
        .arg("run")
        .arg(demo("gcd.pcl"))
        .write_stdin("54 24\n")
        .assert()
        .success()
        .stdout("6\n");
}

#[test]
fn test_run_alias() {
    pcl()
        .arg("r")
        .arg(demo("hello.pcl"))
        .assert()
        .success()
        .stdout("42\n");
}

#[test]
fn test_run_missing_file_fails() {
    pcl()
        .arg("run")
        .arg("no-such-file.pcl")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read source file"));
}

#[test]
fn test_run_syntax_error_fails_with_location() {
    let file = source_file("print 1;\nprint 2\n");
    pcl()
        .arg("run")
        .arg(file.path())
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains(":3:1: error:"));
}

#[test]
fn test_run_runtime_error_keeps_prior_output() {
    let file = source_file("print 1; print ghost;");
    pcl()
        .arg("run")
        .arg(file.path())
        .assert()
        .failure()
        .stdout("1\n")
        .stderr(predicate::str::contains("undeclared variable: ghost"));
}

#[test]
fn test_run_division_by_zero_exits_nonzero() {
    let file = source_file("print 10 / 0;");
    pcl()
        .arg("run")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("division by zero"));
}

#[test]
fn test_check_valid_file_is_quiet() {
    pcl()
        .arg("check")
        .arg(demo("factorial.pcl"))
        .assert()
        .success()
        .stdout("")
        .stderr("");
}

#[test]
fn test_check_invalid_file_fails() {
    let file = source_file("while (1 { }");
    pcl()
        .arg("check")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_ast_dump_is_versioned_json() {
    pcl()
        .arg("ast")
        .arg(demo("hello.pcl"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ast_version\": 1"))
        .stdout(predicate::str::contains("\"print\""));
}

#[test]
fn test_usage_error_exits_with_clap_code() {
    pcl().assert().failure().code(2);
}
