//! Frame: the rectangle a view occupies in its container's coordinate space.

use serde::{Deserialize, Serialize};

use crate::error::TransitionError;

/// Position and size of a view. All numerics are f32.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Frame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Frame {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn min_x(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn min_y(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// Same size, translated by (dx, dy).
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Same size, moved to (x, y).
    pub fn with_origin(self, x: f32, y: f32) -> Self {
        Self { x, y, ..self }
    }

    /// This frame's extent in its own coordinate space (origin at zero).
    /// Clip masks are expressed against this rectangle.
    pub fn local(self) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            ..self
        }
    }

    /// Reject frames no transition can be computed against: non-finite
    /// coordinates, or zero/negative dimensions. Reported synchronously,
    /// before any mutation starts.
    pub fn validate(&self) -> Result<(), TransitionError> {
        if !(self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite())
        {
            return Err(TransitionError::InvalidGeometry {
                frame: *self,
                reason: "coordinates must be finite".into(),
            });
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(TransitionError::InvalidGeometry {
                frame: *self,
                reason: "width and height must be positive".into(),
            });
        }
        Ok(())
    }
}
