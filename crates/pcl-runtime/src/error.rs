//! Error types for parsing and evaluation
//!
//! Every failure is an explicit value propagated with `?`; the evaluator never
//! catches or retries. `ScopeUnderflow` is an internal-consistency failure:
//! it cannot be produced by any well-formed tree and the driver reports it as
//! an interpreter bug rather than a user error.

use crate::span::Span;
use thiserror::Error;

/// Syntax error produced by the lexer or parser
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Unexpected character in the input
    #[error("unexpected character '{ch}'")]
    UnexpectedChar { ch: char, span: Span },
    /// Integer literal too large for the value type
    #[error("integer literal out of range: {text}")]
    NumberOutOfRange { text: String, span: Span },
    /// Token other than the one the grammar requires
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: String,
        found: String,
        span: Span,
    },
}

impl ParseError {
    /// Source location of the error
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedChar { span, .. } => *span,
            ParseError::NumberOutOfRange { span, .. } => *span,
            ParseError::UnexpectedToken { span, .. } => *span,
        }
    }
}

/// Runtime error raised during evaluation
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Name resolved to nothing in the entire scope chain
    #[error("undeclared variable: {name}")]
    UndeclaredVariable { name: String, span: Span },
    /// Right operand of `/` or `%` was zero
    #[error("division by zero")]
    DivisionByZero { span: Span },
    /// End of input, or a token that is not an integer, on a read expression
    #[error("malformed input: expected an integer")]
    MalformedInput,
    /// Attempted to pop the global scope frame. Unreachable through normal
    /// evaluator control flow; indicates a bug in the evaluator itself.
    #[error("scope chain underflow")]
    ScopeUnderflow,
    /// Write to the output sink failed
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl RuntimeError {
    /// Source location of the error, when the failing node has one
    pub fn span(&self) -> Option<Span> {
        match self {
            RuntimeError::UndeclaredVariable { span, .. } => Some(*span),
            RuntimeError::DivisionByZero { span } => Some(*span),
            _ => None,
        }
    }

    /// True for failures that indicate a bug in the interpreter rather than
    /// in the interpreted program.
    pub fn is_internal(&self) -> bool {
        matches!(self, RuntimeError::ScopeUnderflow)
    }
}

/// Any failure from a parse-and-run cycle
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Source location of the error, when known
    pub fn span(&self) -> Option<Span> {
        match self {
            Error::Parse(e) => Some(e.span()),
            Error::Runtime(e) => e.span(),
        }
    }
}
