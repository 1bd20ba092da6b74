//! CLI command implementations

pub mod ast;
pub mod check;
pub mod run;

use pcl_runtime::Error;

/// Format an error for stderr as `file:line:col: error: message`, falling
/// back to `file: error: message` when the error carries no location.
pub(crate) fn format_error(file_path: &str, source: &str, error: &Error) -> String {
    match error.span() {
        Some(span) => {
            let (line, column) = span.line_col(source);
            format!("{}:{}:{}: error: {}", file_path, line, column, error)
        }
        None => format!("{}: error: {}", file_path, error),
    }
}
