//! Optional delegate hooks around appear/disappear cycles.

use apparo_api_core::{AnimationType, Frame};

/// Delegate consulted before and notified after each cycle. The `will_*`
/// hooks may veto by returning false, in which case nothing is mutated and
/// the call fails with `Vetoed`. All methods are defaulted so implementors
/// pick only what they need.
pub trait AppearingViewObserver {
    fn will_appear(&mut self, frame: Frame, kind: AnimationType, duration: f32) -> bool {
        let _ = (frame, kind, duration);
        true
    }

    fn did_appear(&mut self, frame: Frame) {
        let _ = frame;
    }

    fn will_disappear(&mut self, frame: Frame, kind: AnimationType, duration: f32) -> bool {
        let _ = (frame, kind, duration);
        true
    }

    fn did_disappear(&mut self, frame: Frame) {
        let _ = frame;
    }
}
