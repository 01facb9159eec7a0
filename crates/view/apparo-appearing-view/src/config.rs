//! Animation configuration owned by the controller.

use serde::{Deserialize, Serialize};

use apparo_api_core::AnimationType;
use apparo_transition_core::TransitionOptions;

/// What an appear/disappear cycle runs with. Owned by the controller and
/// passed into the core per call; the core stores none of it. Set
/// `kind = AnimationType::None` to disable animation entirely.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub kind: AnimationType,
    /// Seconds for each timed phase.
    pub duration: f32,
    #[serde(default)]
    pub options: TransitionOptions,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            kind: AnimationType::Fade,
            duration: 0.3,
            options: TransitionOptions::default(),
        }
    }
}
