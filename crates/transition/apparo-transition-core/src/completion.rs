//! One-shot completion signal.

use std::fmt;

use apparo_api_core::TransitionError;

use crate::ids::TransitionToken;

/// Fires exactly once, strictly after a transition's end state is committed.
/// Firing twice is a programming-contract violation and asserts instead of
/// continuing.
pub struct Completion {
    inner: Option<Box<dyn FnOnce(TransitionToken)>>,
}

impl Completion {
    pub fn new(f: impl FnOnce(TransitionToken) + 'static) -> Self {
        Self {
            inner: Some(Box::new(f)),
        }
    }

    /// A completion nobody is waiting on.
    pub fn noop() -> Self {
        Self::new(|_| {})
    }

    #[inline]
    pub fn has_fired(&self) -> bool {
        self.inner.is_none()
    }

    /// Invoke the signal with the token of the transition that finished.
    ///
    /// # Panics
    ///
    /// Panics with the `DoubleCompletion` message if already fired.
    pub fn fire(&mut self, token: TransitionToken) {
        match self.inner.take() {
            Some(f) => f(token),
            None => panic!("{}", TransitionError::DoubleCompletion),
        }
    }
}

impl fmt::Debug for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.has_fired() {
            "Completion(fired)"
        } else {
            "Completion(pending)"
        })
    }
}
