//! Animator: the dt-stepped driver for one view's transitions.
//!
//! The host's render loop owns time; the animator only ever sees `dt`.
//! `run` validates, schedules (or applies instantly), and returns; `advance`
//! does bounded work per tick. At most one transition is in flight: running
//! a new one while another is mid-flight replaces it, and the replaced
//! completion still fires, carrying its now-stale token, so hosts that track
//! the latest token can discard it (exactly-once is never broken).

use apparo_api_core::{TransitionError, View, ViewState};

use crate::completion::Completion;
use crate::ids::{TokenAllocator, TransitionToken};
use crate::interp::{ease, lerp_state, Easing};
use crate::machine::{Timing, TransitionProcedure};
use crate::request::TransitionRequest;

#[derive(Debug)]
struct Active {
    token: TransitionToken,
    start: ViewState,
    end: ViewState,
    duration: f32,
    elapsed: f32,
    easing: Easing,
    done: Completion,
}

/// Drives the transitions of a single view. Holds no reference to the view
/// itself; the host lends it per call.
#[derive(Debug, Default)]
pub struct Animator {
    tokens: TokenAllocator,
    active: Option<Active>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.active.is_none()
    }

    /// Token of the in-flight transition, if any.
    #[inline]
    pub fn active_token(&self) -> Option<TransitionToken> {
        self.active.as_ref().map(|a| a.token)
    }

    /// Execute a resolved procedure against `view`.
    ///
    /// Instantaneous rows (and any row with a non-positive duration) commit
    /// their end state and fire `done` before returning. Timed rows capture
    /// the view's current state as the start (mid-flight invocation is
    /// tolerated; there is no pristine-state assumption) and finish over
    /// later `advance` calls.
    pub fn run<V: View>(
        &mut self,
        procedure: &TransitionProcedure,
        view: &mut V,
        request: &TransitionRequest,
        mut done: Completion,
    ) -> Result<TransitionToken, TransitionError> {
        request.frame.validate()?;

        let token = self.tokens.alloc();
        if let Some(mut replaced) = self.active.take() {
            log::debug!(
                "transition {:?} replaced by {:?} mid-flight; stale completion fires now",
                replaced.token,
                token
            );
            replaced.done.fire(replaced.token);
        }

        let end = procedure.end_state(request.frame, view.container(), &request.options);
        if matches!(procedure.timing, Timing::Instant) || request.duration <= 0.0 {
            view.apply(&end);
            done.fire(token);
            log::debug!(
                "{:?}/{:?} applied instantly as {:?}",
                procedure.kind,
                procedure.phase,
                token
            );
            return Ok(token);
        }

        log::debug!(
            "{:?}/{:?} scheduled as {:?} over {}s",
            procedure.kind,
            procedure.phase,
            token,
            request.duration
        );
        self.active = Some(Active {
            token,
            start: view.state(),
            end,
            duration: request.duration,
            elapsed: 0.0,
            easing: request.options.easing,
            done,
        });
        Ok(token)
    }

    /// Step the in-flight transition by `dt` seconds, applying the eased
    /// intermediate state. On reaching the end the exact end state is
    /// committed first, then the completion fires once; the finished token
    /// is returned for the host's stale-completion bookkeeping.
    pub fn advance<V: View>(&mut self, view: &mut V, dt: f32) -> Option<TransitionToken> {
        let finished = {
            let active = self.active.as_mut()?;
            active.elapsed += dt;
            active.elapsed >= active.duration
        };

        if finished {
            let mut active = self.active.take()?;
            view.apply(&active.end);
            active.done.fire(active.token);
            log::debug!("transition {:?} completed", active.token);
            return Some(active.token);
        }

        let active = self.active.as_ref()?;
        let t = (active.elapsed / active.duration).clamp(0.0, 1.0);
        let state = lerp_state(&active.start, &active.end, ease(active.easing, t));
        view.apply(&state);
        log::trace!("transition {:?} at t={t:.3}", active.token);
        None
    }
}
