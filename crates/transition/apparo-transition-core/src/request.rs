//! Per-invocation inputs supplied by the host at call time.

use serde::{Deserialize, Serialize};

use apparo_api_core::Frame;

use crate::interp::Easing;

/// Easing plus per-kind knobs. Owned by the host's configuration; the core
/// reads it per call and stores nothing.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionOptions {
    pub easing: Easing,
    /// Total rotation a `Spin` hides behind, radians.
    pub spin_angle: f32,
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            easing: Easing::EaseInOut,
            spin_angle: std::f32::consts::TAU,
        }
    }
}

/// One transition invocation: target frame, duration in seconds, options.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRequest {
    pub frame: Frame,
    /// Seconds. Zero or negative runs any row instantly.
    pub duration: f32,
    #[serde(default)]
    pub options: TransitionOptions,
}

impl TransitionRequest {
    pub fn new(frame: Frame, duration: f32) -> Self {
        Self {
            frame,
            duration,
            options: TransitionOptions::default(),
        }
    }
}
