//! PCL runtime API for embedding
//!
//! High-level entry points used by the CLI and by host applications: parse a
//! source string into an arena, or parse and run it against caller-supplied
//! I/O sinks.

use crate::ast::Ast;
use crate::error::{Error, ParseError};
use crate::interpreter::Interpreter;
use crate::lexer::Lexer;
use crate::parser::Parser;
use std::io::{BufRead, Write};

/// PCL runtime instance
///
/// # Examples
///
/// ```
/// use pcl_runtime::Pcl;
/// use std::io::Cursor;
///
/// let mut output = Vec::new();
/// Pcl::new()
///     .run("print 6 * 7;", Cursor::new(Vec::new()), &mut output)
///     .unwrap();
/// assert_eq!(output, b"42\n");
/// ```
#[derive(Debug, Default)]
pub struct Pcl;

impl Pcl {
    /// Create a new runtime instance
    pub fn new() -> Self {
        Self
    }

    /// Parse source text into a node arena without running it
    pub fn parse(&self, source: &str) -> Result<Ast, ParseError> {
        let tokens = Lexer::new(source).tokenize()?;
        Parser::new(tokens).parse()
    }

    /// Parse and execute a program. `input` feeds `?` read expressions and
    /// `output` receives `print` lines; the run stops at the first error.
    pub fn run<R: BufRead, W: Write>(
        &self,
        source: &str,
        input: R,
        output: W,
    ) -> Result<(), Error> {
        let ast = self.parse(source)?;
        let mut interpreter = Interpreter::new(&ast, input, output);
        interpreter.run()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_program(source: &str, input: &str) -> Result<String, Error> {
        let mut output = Vec::new();
        Pcl::new().run(source, Cursor::new(input.as_bytes().to_vec()), &mut output)?;
        Ok(String::from_utf8(output).expect("output is utf-8"))
    }

    #[test]
    fn test_run_print_literal() {
        assert_eq!(run_program("print 42;", "").unwrap(), "42\n");
    }

    #[test]
    fn test_run_reads_input() {
        assert_eq!(run_program("x = ?; print x + 1;", "41").unwrap(), "42\n");
    }

    #[test]
    fn test_parse_error_surfaces() {
        let err = run_program("print 42", "").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_runtime_error_surfaces() {
        let err = run_program("print 1 / 0;", "").unwrap_err();
        assert!(matches!(err, Error::Runtime(_)));
    }
}
