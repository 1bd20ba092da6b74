//! Lexical scope chain
//!
//! An ordered stack of name→value frames. Frame 0 is the permanent global
//! frame; it is pushed at construction and can never be popped. Lookup and
//! assignment walk the chain innermost to outermost, which is what gives
//! shadowed names their nearest-binding behavior.

use crate::error::RuntimeError;
use std::collections::HashMap;

/// A single lexical frame: one block's bindings
pub type ScopeFrame = HashMap<String, i64>;

/// Stack of scope frames, global frame at the bottom
#[derive(Debug)]
pub struct ScopeChain {
    frames: Vec<ScopeFrame>,
}

impl ScopeChain {
    /// Create a chain holding only the global frame
    pub fn new() -> Self {
        Self {
            frames: vec![ScopeFrame::new()],
        }
    }

    /// Number of frames currently on the chain (always at least 1)
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Push a new empty frame on top
    pub fn push_frame(&mut self) {
        self.frames.push(ScopeFrame::new());
    }

    /// Push a pre-populated frame on top. Used by while loops to carry one
    /// iteration's bindings into the next.
    pub fn push_frame_with(&mut self, frame: ScopeFrame) {
        self.frames.push(frame);
    }

    /// Remove and return the top frame. Popping the global frame is a
    /// `ScopeUnderflow`: it cannot happen through normal evaluator control
    /// flow and signals a bug in the evaluator itself.
    pub fn pop_frame(&mut self) -> Result<ScopeFrame, RuntimeError> {
        if self.frames.len() > 1 {
            Ok(self.frames.pop().expect("chain verified non-trivial"))
        } else {
            Err(RuntimeError::ScopeUnderflow)
        }
    }

    /// Bind a name in the top frame, silently overwriting any existing
    /// binding there. Re-declaration is not an error in this language.
    pub fn declare(&mut self, name: impl Into<String>, value: i64) {
        let top = self.frames.last_mut().expect("chain is never empty");
        top.insert(name.into(), value);
    }

    /// Read the nearest binding of a name, innermost to outermost
    pub fn lookup(&self, name: &str) -> Option<i64> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.get(name).copied())
    }

    /// Update the nearest binding of a name. Errors if the name is not bound
    /// anywhere; callers check [`is_declared_anywhere`](Self::is_declared_anywhere) first.
    pub fn assign(&mut self, name: &str, value: i64) -> Result<(), RuntimeError> {
        for frame in self.frames.iter_mut().rev() {
            if let Some(slot) = frame.get_mut(name) {
                *slot = value;
                return Ok(());
            }
        }
        Err(RuntimeError::UndeclaredVariable {
            name: name.to_string(),
            span: crate::span::Span::default(),
        })
    }

    /// True if any frame in the chain binds the name
    pub fn is_declared_anywhere(&self, name: &str) -> bool {
        self.frames.iter().any(|frame| frame.contains_key(name))
    }
}

impl Default for ScopeChain {
    fn default() -> Self {
        Self::new()
    }
}
