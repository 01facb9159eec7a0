//! Lifecycle events buffered by the controller and drained by the host.

use serde::{Deserialize, Serialize};

use apparo_api_core::{AnimationType, Frame};

/// Discrete signals emitted around appear/disappear cycles. Pure
/// observation: nothing flows back into the controller through these.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ViewEvent {
    WillAppear {
        frame: Frame,
        kind: AnimationType,
        duration: f32,
    },
    DidAppear {
        frame: Frame,
    },
    WillDisappear {
        frame: Frame,
        kind: AnimationType,
        duration: f32,
    },
    DidDisappear {
        frame: Frame,
    },
}

impl ViewEvent {
    /// Bus name for hosts that bridge events onto string-keyed channels.
    pub fn name(&self) -> &'static str {
        match self {
            ViewEvent::WillAppear { .. } => names::WILL_APPEAR,
            ViewEvent::DidAppear { .. } => names::DID_APPEAR,
            ViewEvent::WillDisappear { .. } => names::WILL_DISAPPEAR,
            ViewEvent::DidDisappear { .. } => names::DID_DISAPPEAR,
        }
    }
}

/// Notification names and payload keys for string-keyed event buses.
pub mod names {
    pub const WILL_APPEAR: &str = "AppearingViewWillAppear";
    pub const DID_APPEAR: &str = "AppearingViewDidAppear";
    pub const WILL_DISAPPEAR: &str = "AppearingViewWillDisappear";
    pub const DID_DISAPPEAR: &str = "AppearingViewDidDisappear";

    /// Payload keys.
    pub mod keys {
        pub const VIEW: &str = "view";
        pub const FRAME: &str = "frame";
        pub const TYPE: &str = "type";
        pub const DURATION: &str = "duration";
        pub const OPTIONS: &str = "options";
    }
}
