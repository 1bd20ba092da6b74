//! AST interpreter (tree-walking)
//!
//! Single-pass, depth-first walk over the node arena. Two pieces of mutable
//! state: the scope chain and an explicit operand stack of integers. Every
//! expression node pushes exactly one value on success; statement nodes push
//! none. Side effects happen only at `Print` (output sink) and `Read` (input
//! sink); both sinks are injected so tests can drive the interpreter with
//! in-memory buffers.

mod expr;
mod stmt;

use crate::ast::{Ast, Node, NodeId};
use crate::error::RuntimeError;
use crate::scope::ScopeChain;
use std::io::{BufRead, Write};

/// Interpreter state for one program run
pub struct Interpreter<'a, R, W> {
    /// The program being executed; never mutated
    ast: &'a Ast,
    /// Lexical scope chain, global frame at the bottom
    scopes: ScopeChain,
    /// Transient operand stack, balanced per statement
    stack: Vec<i64>,
    /// Input sink consumed by read expressions
    input: R,
    /// Output sink written by print statements
    output: W,
}

impl<'a, R: BufRead, W: Write> Interpreter<'a, R, W> {
    /// Create an interpreter over `ast` with the given I/O sinks
    pub fn new(ast: &'a Ast, input: R, output: W) -> Self {
        Self {
            ast,
            scopes: ScopeChain::new(),
            stack: Vec::new(),
            input,
            output,
        }
    }

    /// Execute the program from its root block. Runs to completion or to the
    /// first raised error; there is no catch or retry anywhere below this.
    pub fn run(&mut self) -> Result<(), RuntimeError> {
        match self.ast.root() {
            Some(root) => self.eval(root),
            None => Ok(()),
        }
    }

    /// Evaluate one node. The match is exhaustive over the closed node set;
    /// dispatch never falls through to a default arm.
    pub(super) fn eval(&mut self, id: NodeId) -> Result<(), RuntimeError> {
        match self.ast.node(id) {
            Node::IntLiteral { value } => {
                self.stack.push(*value);
                Ok(())
            }
            Node::VarRef { name } => self.eval_var_ref(name, id),
            Node::BinOp { op, left, right } => self.eval_bin_op(*op, *left, *right, id),
            Node::UnOp { op, operand } => self.eval_un_op(*op, *operand),
            Node::LogOp { op, left, right } => self.eval_log_op(*op, *left, *right),
            Node::Assign { target, value } => self.eval_assign(*target, *value),
            Node::Read => self.eval_read(),
            Node::Decl { .. } => Ok(()), // only ever visited as an Assign target
            Node::Print { value } => self.eval_print(*value),
            Node::Block { statements } => self.eval_block(statements),
            Node::If {
                cond,
                body,
                else_branch,
            } => self.eval_if(*cond, *body, *else_branch),
            Node::Else { body } => self.eval(*body),
            Node::While { cond, body } => self.eval_while(*cond, *body),
            Node::Expr { inner } => self.eval(*inner),
        }
    }

    /// Pop the top operand. The expression contracts guarantee a value is
    /// present; an empty stack here is an interpreter bug.
    pub(super) fn pop_operand(&mut self) -> i64 {
        self.stack.pop().expect("operand stack underflow")
    }

    #[cfg(test)]
    pub(crate) fn operand_depth(&self) -> usize {
        self.stack.len()
    }

    #[cfg(test)]
    pub(crate) fn scope_depth(&self) -> usize {
        self.scopes.depth()
    }
}
