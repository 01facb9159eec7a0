//! In-memory doubles shared by the workspace test suites.

use apparo_api_core::{Frame, View, ViewState};

/// A recording stand-in for a host view. Every `apply` is kept so tests can
/// assert on the full trajectory, not just the end state.
#[derive(Clone, Debug)]
pub struct MockView {
    state: ViewState,
    container: Frame,
    visible: bool,
    pub applied: Vec<ViewState>,
}

impl MockView {
    /// A view resting at `frame` inside a 320x480 container at the origin.
    pub fn new(frame: Frame) -> Self {
        Self::with_container(frame, Frame::new(0.0, 0.0, 320.0, 480.0))
    }

    pub fn with_container(frame: Frame, container: Frame) -> Self {
        Self {
            state: ViewState::baseline(frame),
            container,
            visible: false,
            applied: Vec::new(),
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Opacity of every applied state, in order.
    pub fn opacity_history(&self) -> Vec<f32> {
        self.applied.iter().map(|s| s.opacity).collect()
    }

    /// Frame of every applied state, in order.
    pub fn frame_history(&self) -> Vec<Frame> {
        self.applied.iter().map(|s| s.frame).collect()
    }
}

impl View for MockView {
    fn state(&self) -> ViewState {
        self.state
    }

    fn apply(&mut self, state: &ViewState) {
        self.state = *state;
        self.applied.push(*state);
    }

    fn container(&self) -> Frame {
        self.container
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
