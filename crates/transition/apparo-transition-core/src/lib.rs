//! Apparo Transition Core (engine-agnostic)
//!
//! Resolution from (animation type, phase) pairs to reusable transition
//! procedures, plus the dt-stepped driver that executes them against a host
//! view. The crate holds no per-view state beyond the single in-flight
//! transition an `Animator` is driving; resolution itself is pure.

pub mod animator;
pub mod completion;
pub mod geometry;
pub mod ids;
pub mod interp;
pub mod machine;
pub mod request;

// Re-exports for consumers (controllers, adapters)
pub use animator::Animator;
pub use completion::Completion;
pub use geometry::endpoint_state;
pub use ids::{TokenAllocator, TransitionToken};
pub use interp::{ease, Easing};
pub use machine::{AnimationMachine, Endpoint, Row, Timing, TransitionProcedure, Transitions};
pub use request::{TransitionOptions, TransitionRequest};
pub use apparo_api_core::{AnimationPhase, AnimationType, Frame, TransitionError, View, ViewState};
