//! Expression evaluation
//!
//! Each method upholds the expression contract: exactly one value pushed on
//! success, nothing pushed on error. Operands are always evaluated left to
//! right, and logical operators never short-circuit.

use crate::ast::{BinaryOp, LogicalOp, Node, NodeId, UnaryOp};
use crate::error::RuntimeError;
use crate::interpreter::Interpreter;
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write> Interpreter<'_, R, W> {
    pub(super) fn eval_var_ref(&mut self, name: &str, id: NodeId) -> Result<(), RuntimeError> {
        match self.scopes.lookup(name) {
            Some(value) => {
                self.stack.push(value);
                Ok(())
            }
            None => Err(RuntimeError::UndeclaredVariable {
                name: name.to_string(),
                span: self.ast.span(id),
            }),
        }
    }

    pub(super) fn eval_bin_op(
        &mut self,
        op: BinaryOp,
        left: NodeId,
        right: NodeId,
        id: NodeId,
    ) -> Result<(), RuntimeError> {
        self.eval(left)?;
        let left_value = self.pop_operand();
        self.eval(right)?;
        let right_value = self.pop_operand();

        // Wrapping semantics: arithmetic overflow is defined, not a fault.
        let result = match op {
            BinaryOp::Add => left_value.wrapping_add(right_value),
            BinaryOp::Sub => left_value.wrapping_sub(right_value),
            BinaryOp::Mul => left_value.wrapping_mul(right_value),
            BinaryOp::Div => {
                if right_value == 0 {
                    return Err(RuntimeError::DivisionByZero {
                        span: self.ast.span(id),
                    });
                }
                left_value.wrapping_div(right_value)
            }
            BinaryOp::Mod => {
                if right_value == 0 {
                    return Err(RuntimeError::DivisionByZero {
                        span: self.ast.span(id),
                    });
                }
                left_value.wrapping_rem(right_value)
            }
        };

        self.stack.push(result);
        Ok(())
    }

    pub(super) fn eval_un_op(&mut self, op: UnaryOp, operand: NodeId) -> Result<(), RuntimeError> {
        self.eval(operand)?;
        let value = self.pop_operand();

        let result = match op {
            UnaryOp::Not => (value == 0) as i64,
            UnaryOp::Neg => value.wrapping_neg(),
            UnaryOp::Plus => value,
        };

        self.stack.push(result);
        Ok(())
    }

    /// Both operands are evaluated unconditionally, even when the left one
    /// alone decides an `and`/`or`. The source language has no
    /// short-circuiting, and right-operand side effects must fire.
    pub(super) fn eval_log_op(
        &mut self,
        op: LogicalOp,
        left: NodeId,
        right: NodeId,
    ) -> Result<(), RuntimeError> {
        self.eval(left)?;
        let left_value = self.pop_operand();
        self.eval(right)?;
        let right_value = self.pop_operand();

        let result = match op {
            LogicalOp::Eq => left_value == right_value,
            LogicalOp::Ne => left_value != right_value,
            LogicalOp::Lt => left_value < right_value,
            LogicalOp::Le => left_value <= right_value,
            LogicalOp::Gt => left_value > right_value,
            LogicalOp::Ge => left_value >= right_value,
            LogicalOp::And => left_value != 0 && right_value != 0,
            LogicalOp::Or => left_value != 0 || right_value != 0,
            LogicalOp::Xor => (left_value != 0) ^ (right_value != 0),
        };

        self.stack.push(result as i64);
        Ok(())
    }

    /// Evaluate the value and leave it on the operand stack: `c = b = a = 5`
    /// threads the same value through each nested assignment, and the whole
    /// assignment expression yields it to the caller. First write to a name
    /// declares it in the innermost frame; later writes update the nearest
    /// existing binding.
    pub(super) fn eval_assign(&mut self, target: NodeId, value: NodeId) -> Result<(), RuntimeError> {
        self.eval(value)?;
        let assigned = *self.stack.last().expect("assignment evaluated no value");

        let name = match self.ast.node(target) {
            Node::Decl { name } => name.clone(),
            other => panic!("assignment target is not a declaration: {:?}", other),
        };

        if self.scopes.is_declared_anywhere(&name) {
            self.scopes.assign(&name, assigned)?;
        } else {
            self.scopes.declare(name, assigned);
        }
        Ok(())
    }

    /// Consume one whitespace-delimited integer token from the input sink
    pub(super) fn eval_read(&mut self) -> Result<(), RuntimeError> {
        let value = self.read_int()?;
        self.stack.push(value);
        Ok(())
    }

    fn read_int(&mut self) -> Result<i64, RuntimeError> {
        let mut token: Vec<u8> = Vec::new();
        loop {
            let buf = self.input.fill_buf()?;
            if buf.is_empty() {
                break; // end of input
            }
            let mut used = 0;
            let mut complete = false;
            for &byte in buf {
                used += 1;
                if byte.is_ascii_whitespace() {
                    if token.is_empty() {
                        continue;
                    }
                    complete = true;
                    break;
                }
                token.push(byte);
            }
            self.input.consume(used);
            if complete {
                break;
            }
        }

        std::str::from_utf8(&token)
            .ok()
            .and_then(|text| text.parse().ok())
            .ok_or(RuntimeError::MalformedInput)
    }
}
