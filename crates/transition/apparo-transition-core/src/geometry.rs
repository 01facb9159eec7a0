//! Pure end-state geometry per (kind, endpoint).
//!
//! `stage` is the container's visible area in the same coordinate space as
//! the target frame; its origin need not be zero. Slide transitions eject
//! the frame fully outside it, reveals grow a view-local clip mask from the
//! named edge, and spins rotate about the view center.

use apparo_api_core::{AnimationType, Frame, ViewState};

use crate::machine::Endpoint;
use crate::request::TransitionOptions;

/// End state for one (kind, endpoint) pair.
pub fn endpoint_state(
    kind: AnimationType,
    endpoint: Endpoint,
    frame: Frame,
    stage: Frame,
    options: &TransitionOptions,
) -> ViewState {
    match endpoint {
        Endpoint::Shown => shown_state(kind, frame),
        Endpoint::Hidden => hidden_state(kind, frame, stage, options),
    }
}

/// The fully-visible pose. Reveals end on an explicit full-frame mask so the
/// interpolation has a concrete endpoint; everything else is the baseline.
pub fn shown_state(kind: AnimationType, frame: Frame) -> ViewState {
    let baseline = ViewState::baseline(frame);
    match kind {
        AnimationType::RevealTop
        | AnimationType::RevealBottom
        | AnimationType::RevealLeft
        | AnimationType::RevealRight => baseline.with_clip(frame.local()),
        _ => baseline,
    }
}

/// The hidden pose: where `Prep` snaps to and `Out` animates to.
pub fn hidden_state(
    kind: AnimationType,
    frame: Frame,
    stage: Frame,
    options: &TransitionOptions,
) -> ViewState {
    let baseline = ViewState::baseline(frame);
    let local = frame.local();
    match kind {
        AnimationType::None => baseline,
        AnimationType::Fade => baseline.with_opacity(0.0),
        AnimationType::SlideTop => ViewState::baseline(
            frame.with_origin(frame.x, stage.min_y() - frame.height),
        ),
        AnimationType::SlideBottom => {
            ViewState::baseline(frame.with_origin(frame.x, stage.max_y()))
        }
        AnimationType::SlideLeft => ViewState::baseline(
            frame.with_origin(stage.min_x() - frame.width, frame.y),
        ),
        AnimationType::SlideRight => {
            ViewState::baseline(frame.with_origin(stage.max_x(), frame.y))
        }
        // Zero-extent masks anchored at the edge the reveal grows from.
        AnimationType::RevealTop => baseline.with_clip(Frame::new(0.0, 0.0, local.width, 0.0)),
        AnimationType::RevealBottom => {
            baseline.with_clip(Frame::new(0.0, local.height, local.width, 0.0))
        }
        AnimationType::RevealLeft => baseline.with_clip(Frame::new(0.0, 0.0, 0.0, local.height)),
        AnimationType::RevealRight => {
            baseline.with_clip(Frame::new(local.width, 0.0, 0.0, local.height))
        }
        AnimationType::Spin => baseline.with_rotation(options.spin_angle),
    }
}
