//! The AnimationMachine: resolution from (type, phase) to a procedure.
//!
//! Resolution is a membership check against a static row table, never a
//! silent fallback: a pair with no row is an integration bug in the host's
//! state machine and fails with `UnsupportedTransition` naming both values.

use serde::{Deserialize, Serialize};

use apparo_api_core::{AnimationPhase, AnimationType, Frame, TransitionError, ViewState};

use crate::geometry::endpoint_state;
use crate::request::TransitionOptions;

/// Whether a table row animates over a duration or applies instantly.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Timing {
    Instant,
    Timed,
}

/// Which end-state geometry a row drives toward.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Endpoint {
    Hidden,
    Shown,
}

/// One row of a transition table.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Row {
    pub kind: AnimationType,
    pub phase: AnimationPhase,
    pub timing: Timing,
    pub endpoint: Endpoint,
}

/// The resolved, reusable artifact for one (kind, phase) pair. Carries no
/// view state; two resolutions of the same pair are behaviorally equivalent.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TransitionProcedure {
    pub kind: AnimationType,
    pub phase: AnimationPhase,
    pub timing: Timing,
    pub endpoint: Endpoint,
}

impl TransitionProcedure {
    /// The state this procedure drives the view to, given the target frame
    /// and the container's visible area. Pure; no side effects until an
    /// `Animator` applies it.
    ///
    /// Instantaneous rows targeting the shown pose restore the clean
    /// baseline rather than the animated shown pose, so a reveal's
    /// full-frame mask does not outlive its transition (`Reset` and every
    /// `None` row land here).
    pub fn end_state(&self, frame: Frame, stage: Frame, options: &TransitionOptions) -> ViewState {
        match (self.timing, self.endpoint) {
            (Timing::Instant, Endpoint::Shown) => ViewState::baseline(frame),
            (_, endpoint) => endpoint_state(self.kind, endpoint, frame, stage, options),
        }
    }
}

/// Capability of resolving transition procedures. The appearing-view
/// controller holds any implementation, injected at construction time.
pub trait AnimationMachine {
    fn resolve(
        &self,
        kind: AnimationType,
        phase: AnimationPhase,
    ) -> Result<TransitionProcedure, TransitionError>;
}

const KINDS: usize = AnimationType::ALL.len();
const PHASES: usize = AnimationPhase::ALL.len();

const fn timing_for(kind: AnimationType, phase: AnimationPhase) -> Timing {
    match (kind, phase) {
        (AnimationType::None, _) => Timing::Instant,
        (_, AnimationPhase::In | AnimationPhase::Out) => Timing::Timed,
        _ => Timing::Instant,
    }
}

const fn endpoint_for(kind: AnimationType, phase: AnimationPhase) -> Endpoint {
    match (kind, phase) {
        (AnimationType::None, _) => Endpoint::Shown,
        (_, AnimationPhase::Prep | AnimationPhase::Out) => Endpoint::Hidden,
        _ => Endpoint::Shown,
    }
}

const fn full_table() -> [Row; KINDS * PHASES] {
    let mut rows = [Row {
        kind: AnimationType::None,
        phase: AnimationPhase::Prep,
        timing: Timing::Instant,
        endpoint: Endpoint::Shown,
    }; KINDS * PHASES];
    let mut i = 0;
    while i < KINDS {
        let kind = AnimationType::ALL[i];
        let mut j = 0;
        while j < PHASES {
            let phase = AnimationPhase::ALL[j];
            rows[i * PHASES + j] = Row {
                kind,
                phase,
                timing: timing_for(kind, phase),
                endpoint: endpoint_for(kind, phase),
            };
            j += 1;
        }
        i += 1;
    }
    rows
}

/// Every (kind, phase) pair of the closed enumerations, one row each.
pub static FULL_TABLE: [Row; KINDS * PHASES] = full_table();

/// The default machine: a lookup over a static row table.
#[derive(Clone, Debug)]
pub struct Transitions {
    rows: &'static [Row],
}

impl Transitions {
    /// Machine over the full table.
    pub fn new() -> Self {
        Self { rows: &FULL_TABLE }
    }

    /// Machine over a custom (possibly partial) table. Pairs absent from
    /// `rows` fail resolution with `UnsupportedTransition`.
    pub fn with_rows(rows: &'static [Row]) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        self.rows
    }
}

impl Default for Transitions {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationMachine for Transitions {
    fn resolve(
        &self,
        kind: AnimationType,
        phase: AnimationPhase,
    ) -> Result<TransitionProcedure, TransitionError> {
        self.rows
            .iter()
            .find(|row| row.kind == kind && row.phase == phase)
            .map(|row| TransitionProcedure {
                kind: row.kind,
                phase: row.phase,
                timing: row.timing,
                endpoint: row.endpoint,
            })
            .ok_or(TransitionError::UnsupportedTransition { kind, phase })
    }
}
