//! Explicit call-context stack.
//!
//! The context is the ambient `(controller, action)` pair that
//! unqualified references resolve against. Every action or view entry
//! pushes a frame and every exit path pops it, so the frame visible to
//! a caller after a nested call equals the one visible before it,
//! including when the nested call fails.

/// One live dispatch frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub controller: String,
    pub action: String,
}

/// Stack of active dispatch frames.
///
/// Empty outside any dispatch; nesting depth is unbounded and
/// inspectable via [`CallContext::depth`].
#[derive(Debug, Default)]
pub struct CallContext {
    frames: Vec<Frame>,
}

impl CallContext {
    pub(crate) fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    pub(crate) fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    /// The innermost active frame, if any dispatch is running.
    pub fn current(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Number of active frames.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Whether any dispatch is currently active.
    pub fn is_active(&self) -> bool {
        !self.frames.is_empty()
    }
}
