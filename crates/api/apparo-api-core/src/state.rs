//! ViewState: the full animatable surface of a view.

use serde::{Deserialize, Serialize};

use crate::frame::Frame;

/// Everything a transition may mutate on a view. Hosts apply this wholesale;
/// partial writes are not part of the contract, which keeps application
/// idempotent.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ViewState {
    pub frame: Frame,
    /// 0.0 (fully transparent) to 1.0 (opaque).
    pub opacity: f32,
    /// Rotation about the view center, radians.
    pub rotation: f32,
    /// Mask rectangle in view-local coordinates; `None` = unclipped.
    #[serde(default)]
    pub clip: Option<Frame>,
}

impl ViewState {
    /// The clean resting pose: target frame, opaque, identity transform,
    /// no mask. `Reset` restores this; `None`-type rows apply it directly.
    pub fn baseline(frame: Frame) -> Self {
        Self {
            frame,
            opacity: 1.0,
            rotation: 0.0,
            clip: None,
        }
    }

    pub fn with_opacity(self, opacity: f32) -> Self {
        Self { opacity, ..self }
    }

    pub fn with_rotation(self, rotation: f32) -> Self {
        Self { rotation, ..self }
    }

    pub fn with_clip(self, clip: Frame) -> Self {
        Self {
            clip: Some(clip),
            ..self
        }
    }
}
