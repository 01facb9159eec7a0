//! The closed animation enumerations.
//!
//! Both sets are closed by design: the transition table is exhaustive over
//! them, and `ALL` arrays let tests and tooling iterate every member.

use serde::{Deserialize, Serialize};

/// Which visual transformation an appear/disappear cycle performs.
/// `None` is the disable path: every phase applies the target frame
/// immediately with no timed animation.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum AnimationType {
    #[default]
    None,
    Fade,
    SlideTop,
    SlideBottom,
    SlideLeft,
    SlideRight,
    RevealTop,
    RevealBottom,
    RevealLeft,
    RevealRight,
    Spin,
}

impl AnimationType {
    pub const ALL: [AnimationType; 11] = [
        AnimationType::None,
        AnimationType::Fade,
        AnimationType::SlideTop,
        AnimationType::SlideBottom,
        AnimationType::SlideLeft,
        AnimationType::SlideRight,
        AnimationType::RevealTop,
        AnimationType::RevealBottom,
        AnimationType::RevealLeft,
        AnimationType::RevealRight,
        AnimationType::Spin,
    ];

    #[inline]
    pub fn is_none(self) -> bool {
        matches!(self, AnimationType::None)
    }
}

/// Which part of the appear/disappear lifecycle a transition belongs to.
/// `Prep` and `Reset` are instantaneous geometry snapshots; `In` and `Out`
/// are timed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum AnimationPhase {
    /// Set initial geometry before the view becomes visible.
    Prep,
    /// Animate from the prepped state to the final visible state.
    In,
    /// Animate from the visible state to the hidden state.
    Out,
    /// Restore the post-`Out` state to a clean baseline.
    Reset,
}

impl AnimationPhase {
    pub const ALL: [AnimationPhase; 4] = [
        AnimationPhase::Prep,
        AnimationPhase::In,
        AnimationPhase::Out,
        AnimationPhase::Reset,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_arrays_cover_every_variant() {
        assert_eq!(AnimationType::ALL.len(), 11);
        assert_eq!(AnimationPhase::ALL.len(), 4);
        // Closed sets: no duplicates.
        for (i, a) in AnimationType::ALL.iter().enumerate() {
            assert!(!AnimationType::ALL[i + 1..].contains(a));
        }
    }
}
