//! Check command - parse without running

use crate::commands::format_error;
use anyhow::{anyhow, Context, Result};
use pcl_runtime::{Error, Pcl};
use std::fs;

/// Parse a PCL source file and report syntax errors. Produces no output for
/// a well-formed file; the exit status carries the verdict.
pub fn check(file_path: &str) -> Result<()> {
    let source = fs::read_to_string(file_path)
        .with_context(|| format!("failed to read source file: {}", file_path))?;

    match Pcl::new().parse(&source) {
        Ok(_) => Ok(()),
        Err(err) => {
            eprintln!("{}", format_error(file_path, &source, &Error::Parse(err)));
            Err(anyhow!("syntax errors in {}", file_path))
        }
    }
}
