//! Interpolation and easing:
//! - lerp helpers over f32 / Frame / ViewState
//! - cubic-bezier timing with x-inversion
//! - named easing presets expressed as bezier control points

mod functions;

pub use functions::{bezier_ease_t, lerp_f32, lerp_frame, lerp_state};

use serde::{Deserialize, Serialize};

/// Timing curve for timed transitions. Presets are the standard CSS
/// cubic-bezier control points; `CubicBezier` takes arbitrary ones.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
    CubicBezier {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    },
}

impl Easing {
    /// Control points (x1, y1, x2, y2) of the equivalent cubic bezier.
    #[inline]
    pub fn control_points(self) -> [f32; 4] {
        match self {
            Easing::Linear => [0.0, 0.0, 1.0, 1.0],
            Easing::EaseIn => [0.42, 0.0, 1.0, 1.0],
            Easing::EaseOut => [0.0, 0.0, 0.58, 1.0],
            Easing::EaseInOut => [0.42, 0.0, 0.58, 1.0],
            Easing::CubicBezier { x1, y1, x2, y2 } => [x1, y1, x2, y2],
        }
    }
}

/// Map linear progress in [0,1] through the easing curve.
#[inline]
pub fn ease(easing: Easing, t: f32) -> f32 {
    let [x1, y1, x2, y2] = easing.control_points();
    bezier_ease_t(t, x1, y1, x2, y2)
}
