//! Run command - execute PCL source files

use crate::commands::format_error;
use anyhow::{anyhow, Context, Result};
use pcl_runtime::{Error, Pcl};
use std::fs;
use std::io;

/// Run a PCL source file
///
/// The interpreted program's output goes straight to stdout and its read
/// expressions consume stdin. Diagnostics go to stderr; the returned error
/// makes the process exit nonzero.
pub fn run(file_path: &str) -> Result<()> {
    let source = fs::read_to_string(file_path)
        .with_context(|| format!("failed to read source file: {}", file_path))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    match Pcl::new().run(&source, stdin.lock(), stdout.lock()) {
        Ok(()) => Ok(()),
        Err(Error::Runtime(err)) if err.is_internal() => {
            // Interpreter bug, not a user error; report it as such.
            eprintln!("{}: internal error: {}", file_path, err);
            Err(anyhow!("internal interpreter failure"))
        }
        Err(err) => {
            eprintln!("{}", format_error(file_path, &source, &err));
            Err(anyhow!("failed to execute {}", file_path))
        }
    }
}
