//! Appearing-view controller.
//!
//! The host-side half of the contract: owns the Hidden -> Visible lifecycle
//! state machine, the animation configuration, and the observer/event
//! plumbing, and drives the transition core against a borrowed view. It
//! never owns the view itself.

pub mod config;
pub mod controller;
pub mod events;
pub mod observer;

pub use config::AnimationConfig;
pub use controller::{AppearingView, Visibility};
pub use events::{names, ViewEvent};
pub use observer::AppearingViewObserver;
pub use apparo_api_core::{AnimationPhase, AnimationType, Frame, TransitionError, View, ViewState};
pub use apparo_transition_core::{AnimationMachine, Completion, TransitionToken, Transitions};
