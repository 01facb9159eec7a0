//! Error types for transition dispatch.

use serde::{Deserialize, Serialize};

use crate::animation::{AnimationPhase, AnimationType};
use crate::frame::Frame;

/// Failures surfaced by the transition core and the appearing-view
/// controller. All variants are local and fatal to the call: the core never
/// retries and never falls back on its own.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TransitionError {
    /// No table row maps the given pair. Never a silent fallback; a missing
    /// row means the host's state machine and the table disagree.
    #[error("unsupported transition: {kind:?} has no mapping for phase {phase:?}")]
    UnsupportedTransition {
        kind: AnimationType,
        phase: AnimationPhase,
    },

    /// Malformed target frame. Reported before any animation starts.
    #[error("invalid geometry {frame:?}: {reason}")]
    InvalidGeometry { frame: Frame, reason: String },

    /// A one-shot completion signal was fired more than once. Detection
    /// asserts rather than continuing.
    #[error("completion signal fired more than once")]
    DoubleCompletion,

    /// An observer refused the transition before it started.
    #[error("transition vetoed by observer at {event}")]
    Vetoed { event: String },
}

impl TransitionError {
    /// Coarse grouping for logging and metrics.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::UnsupportedTransition { .. } => "dispatch",
            Self::InvalidGeometry { .. } => "validation",
            Self::DoubleCompletion => "contract",
            Self::Vetoed { .. } => "observer",
        }
    }
}
