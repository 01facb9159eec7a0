//! The seam to the host UI framework.

use crate::frame::Frame;
use crate::state::ViewState;

/// An on-screen element the host owns. Transitions borrow a view for the
/// duration of a single call and never hold it across ticks.
///
/// `apply` must be idempotent: applying the same state twice leaves the view
/// where one application left it.
pub trait View {
    /// Current geometry, opacity, transform, and mask.
    fn state(&self) -> ViewState;

    /// Commit a state wholesale.
    fn apply(&mut self, state: &ViewState);

    /// Visible area of the view's parent, in the same coordinate space as
    /// the view's frame. Slide transitions eject the frame fully outside it.
    fn container(&self) -> Frame;

    /// Show or hide the element. Only the host-side controller toggles this;
    /// transition procedures never do.
    fn set_visible(&mut self, visible: bool);
}
