//! Transition tokens and their allocator.

use serde::{Deserialize, Serialize};

/// Identifies one transition invocation. Hosts keep the latest token they
/// started and discard completions carrying any other one.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TransitionToken(pub u32);

/// Monotonic allocator for transition tokens. Tokens are opaque externally;
/// only equality matters.
#[derive(Default, Debug)]
pub struct TokenAllocator {
    next: u32,
}

impl TokenAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc(&mut self) -> TransitionToken {
        let token = TransitionToken(self.next);
        self.next = self.next.wrapping_add(1);
        token
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_monotonic() {
        let mut alloc = TokenAllocator::new();
        assert_eq!(alloc.alloc(), TransitionToken(0));
        assert_eq!(alloc.alloc(), TransitionToken(1));
        alloc.reset();
        assert_eq!(alloc.alloc(), TransitionToken(0));
    }
}
