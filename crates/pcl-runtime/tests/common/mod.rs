//! Shared test utilities
//!
//! Helpers that run PCL source against in-memory I/O sinks, so tests can
//! assert on exact stdout bytes and on the error that aborted a run.

use pcl_runtime::{Error, Pcl};
use std::io::Cursor;

// Re-export testing utilities
#[allow(unused_imports)]
pub use pretty_assertions::{assert_eq, assert_ne};

/// Run a program with empty input and return its full output
#[allow(dead_code)]
pub fn run_ok(source: &str) -> String {
    run_with_input(source, "")
}

/// Run a program against the given input and return its full output
#[allow(dead_code)]
pub fn run_with_input(source: &str, input: &str) -> String {
    let mut output = Vec::new();
    Pcl::new()
        .run(source, Cursor::new(input.as_bytes().to_vec()), &mut output)
        .unwrap_or_else(|e| panic!("program failed: {e}\nsource: {source}"));
    String::from_utf8(output).expect("output is utf-8")
}

/// Run a program expected to fail; returns the output produced before the
/// failure point together with the error.
#[allow(dead_code)]
pub fn run_err(source: &str, input: &str) -> (String, Error) {
    let mut output = Vec::new();
    let err = Pcl::new()
        .run(source, Cursor::new(input.as_bytes().to_vec()), &mut output)
        .expect_err("program unexpectedly succeeded");
    (String::from_utf8(output).expect("output is utf-8"), err)
}
