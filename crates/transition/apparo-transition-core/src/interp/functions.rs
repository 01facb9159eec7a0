//! Interpolation helpers:
//! - lerp_f32 / lerp_frame / lerp_state (component-wise)
//! - cubic-bezier timing -> eased progress via x-inversion

use apparo_api_core::{Frame, ViewState};

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn lerp_frame(a: Frame, b: Frame, t: f32) -> Frame {
    Frame {
        x: lerp_f32(a.x, b.x, t),
        y: lerp_f32(a.y, b.y, t),
        width: lerp_f32(a.width, b.width, t),
        height: lerp_f32(a.height, b.height, t),
    }
}

/// Component-wise interpolation of full view states.
///
/// Clip masks interpolate only when at least one endpoint carries one; a
/// missing endpoint mask stands in as that endpoint's full local extent, so
/// a reveal can start from (or end at) an unmasked view without jumping.
pub fn lerp_state(a: &ViewState, b: &ViewState, t: f32) -> ViewState {
    let clip = match (a.clip, b.clip) {
        (None, None) => None,
        (ca, cb) => Some(lerp_frame(
            ca.unwrap_or_else(|| a.frame.local()),
            cb.unwrap_or_else(|| b.frame.local()),
            t,
        )),
    };
    ViewState {
        frame: lerp_frame(a.frame, b.frame, t),
        opacity: lerp_f32(a.opacity, b.opacity, t),
        rotation: lerp_f32(a.rotation, b.rotation, t),
        clip,
    }
}

/// Cubic Bezier basis function
#[inline]
fn cubic_bezier(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Given control points (x1, y1, x2, y2) and an input t in [0,1],
/// compute the eased y by inverting the x bezier via binary search.
#[inline]
pub fn bezier_ease_t(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    // Fast path: Bezier(0,0,1,1) is exactly linear -> eased t == t
    if x1 == 0.0 && y1 == 0.0 && x2 == 1.0 && y2 == 1.0 {
        return t;
    }
    // Monotonic X in [0,1] assumed for x1/x2 in [0,1]
    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    let mut mid = t;
    for _ in 0..24 {
        let x = cubic_bezier(0.0, x1, x2, 1.0, mid);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
    }
    cubic_bezier(0.0, y1, y2, 1.0, mid)
}
