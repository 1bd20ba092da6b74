//! Statement execution
//!
//! Statements push no operand values. Frame push/pop happens here, around
//! `if`/`else` and per while-iteration; a `Block` never manages frames
//! itself, it only sequences its statements.

use crate::ast::NodeId;
use crate::error::RuntimeError;
use crate::interpreter::Interpreter;
use crate::scope::ScopeFrame;
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write> Interpreter<'_, R, W> {
    pub(super) fn eval_print(&mut self, value: NodeId) -> Result<(), RuntimeError> {
        self.eval(value)?;
        let printed = self.pop_operand();
        writeln!(self.output, "{}", printed)?;
        Ok(())
    }

    /// Execute statements in order. After each one the operand stack is cut
    /// back to its depth at statement entry; assignment expressions leave
    /// their value behind and this is where it gets discarded.
    pub(super) fn eval_block(&mut self, statements: &[NodeId]) -> Result<(), RuntimeError> {
        for &stmt in statements {
            let depth = self.stack.len();
            self.eval(stmt)?;
            self.stack.truncate(depth);
        }
        Ok(())
    }

    /// One frame is pushed for the whole construct; whichever arm runs, it
    /// runs inside that frame.
    pub(super) fn eval_if(
        &mut self,
        cond: NodeId,
        body: NodeId,
        else_branch: Option<NodeId>,
    ) -> Result<(), RuntimeError> {
        self.eval(cond)?;
        let cond_value = self.pop_operand();

        self.scopes.push_frame();
        if cond_value != 0 {
            self.eval(body)?;
        } else if let Some(else_id) = else_branch {
            self.eval(else_id)?;
        }
        self.scopes.pop_frame()?;
        Ok(())
    }

    /// The condition is evaluated outside the body frame, so it never sees
    /// loop-local bindings. Each iteration's frame is seeded with the
    /// previous iteration's captured bindings, which is how a variable
    /// declared in the body survives into the next pass; the accumulated
    /// frame is dropped for good once the condition turns false.
    pub(super) fn eval_while(&mut self, cond: NodeId, body: NodeId) -> Result<(), RuntimeError> {
        let mut carried = ScopeFrame::new();
        loop {
            self.eval(cond)?;
            let cond_value = self.pop_operand();
            if cond_value == 0 {
                break;
            }

            self.scopes.push_frame_with(carried);
            self.eval(body)?;
            carried = self.scopes.pop_frame()?;
        }
        Ok(())
    }
}
