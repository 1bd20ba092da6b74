//! Ast command - dump the parsed tree as JSON

use crate::commands::format_error;
use anyhow::{anyhow, Context, Result};
use pcl_runtime::{Error, Pcl, VersionedAst};
use std::fs;

/// Parse a PCL source file and print its node arena as versioned JSON
pub fn dump(file_path: &str) -> Result<()> {
    let source = fs::read_to_string(file_path)
        .with_context(|| format!("failed to read source file: {}", file_path))?;

    match Pcl::new().parse(&source) {
        Ok(ast) => {
            let json = VersionedAst::new(ast)
                .to_json()
                .context("failed to serialize AST")?;
            println!("{}", json);
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", format_error(file_path, &source, &Error::Parse(err)));
            Err(anyhow!("syntax errors in {}", file_path))
        }
    }
}
