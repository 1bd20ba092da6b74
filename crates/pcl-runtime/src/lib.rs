//! PCL Runtime - Core language implementation
//!
//! This library provides the complete PCL language runtime:
//! - Lexical analysis and parsing into an arena-backed AST
//! - Tree-walking interpretation over an explicit operand stack
//! - Lexical scope chain with shadowing
//!
//! PCL is a tiny imperative scripting language over integers: arithmetic,
//! comparisons, non-short-circuiting boolean operators, assignment that
//! declares on first use, `if`/`else`, `while`, block scoping, `print`, and
//! the `?` read-one-integer expression.

/// PCL runtime version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Public API modules
pub mod ast;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod runtime;
pub mod scope;
pub mod span;
pub mod token;

// Re-export commonly used types
pub use ast::{Ast, BinaryOp, LogicalOp, Node, NodeId, UnaryOp, VersionedAst, AST_VERSION};
pub use error::{Error, ParseError, RuntimeError};
pub use interpreter::Interpreter;
pub use lexer::Lexer;
pub use parser::Parser;
pub use runtime::Pcl;
pub use scope::{ScopeChain, ScopeFrame};
pub use span::Span;
pub use token::{Token, TokenKind};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smoke() {
        assert_eq!(VERSION, "0.1.0");
    }
}
