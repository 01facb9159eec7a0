//! The appearing-view controller and its lifecycle state machine.

use serde::{Deserialize, Serialize};

use apparo_api_core::{AnimationPhase, Frame, TransitionError, View};
use apparo_transition_core::{
    AnimationMachine, Animator, Completion, TransitionProcedure, TransitionRequest,
    TransitionToken,
};

use crate::config::AnimationConfig;
use crate::events::ViewEvent;
use crate::observer::AppearingViewObserver;

/// Lifecycle state of the controlled view.
///
/// `appear()` moves Hidden -> Appearing -> Visible; `disappear()` moves
/// Visible -> Disappearing -> Hidden. Calls that do not match the current
/// state are ignored (the cancel-and-restart alternative is the host's to
/// build on top of the animator if it wants it).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Hidden,
    Appearing,
    Visible,
    Disappearing,
}

#[derive(Debug, Clone, Copy)]
enum Pending {
    AppearEnd,
    /// Carries the reset procedure resolved up front, so a config change
    /// mid-flight cannot desynchronize the closing snapshot.
    DisappearEnd { reset: TransitionProcedure },
}

#[derive(Debug, Clone, Copy)]
struct InFlight {
    token: TransitionToken,
    pending: Pending,
    /// The resting frame the cycle targets.
    frame: Frame,
}

/// Drives one view's appear/disappear cycles through an injected
/// `AnimationMachine`. Borrows the view per call; never owns it.
pub struct AppearingView<M: AnimationMachine> {
    machine: M,
    config: AnimationConfig,
    visibility: Visibility,
    animator: Animator,
    in_flight: Option<InFlight>,
    observer: Option<Box<dyn AppearingViewObserver>>,
    events: Vec<ViewEvent>,
}

impl<M: AnimationMachine> AppearingView<M> {
    /// Controller in the `Hidden` state with the default configuration.
    pub fn new(machine: M) -> Self {
        Self {
            machine,
            config: AnimationConfig::default(),
            visibility: Visibility::Hidden,
            animator: Animator::new(),
            in_flight: None,
            observer: None,
            events: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: AnimationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: AnimationConfig) {
        self.config = config;
    }

    pub fn set_observer(&mut self, observer: Box<dyn AppearingViewObserver>) {
        self.observer = Some(observer);
    }

    #[inline]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Drain the buffered lifecycle events, oldest first.
    pub fn take_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.events)
    }

    /// Begin an appear cycle toward the view's current frame: `Prep` snaps
    /// to the hidden pose, the view becomes visible, and `In` animates to
    /// the resting pose over the configured duration.
    ///
    /// Returns `Ok(None)` when ignored (any state but `Hidden`). The token
    /// of the `In` transition is returned otherwise; its completion has
    /// already fired by the time this returns if the configured kind
    /// animates nothing.
    pub fn appear<V: View>(
        &mut self,
        view: &mut V,
    ) -> Result<Option<TransitionToken>, TransitionError> {
        self.appear_with(view, Completion::noop())
    }

    /// `appear` with a caller completion, fired when the `In` transition
    /// lands (stale-token rules apply if the host restarts mid-flight).
    pub fn appear_with<V: View>(
        &mut self,
        view: &mut V,
        done: Completion,
    ) -> Result<Option<TransitionToken>, TransitionError> {
        if self.visibility != Visibility::Hidden {
            log::debug!("appear ignored while {:?}", self.visibility);
            return Ok(None);
        }

        let frame = view.state().frame;
        frame.validate()?;
        let AnimationConfig {
            kind,
            duration,
            options,
        } = self.config;

        if let Some(observer) = self.observer.as_mut() {
            if !observer.will_appear(frame, kind, duration) {
                return Err(TransitionError::Vetoed {
                    event: "will-appear".into(),
                });
            }
        }

        let prep = self.machine.resolve(kind, AnimationPhase::Prep)?;
        let enter = self.machine.resolve(kind, AnimationPhase::In)?;

        self.events.push(ViewEvent::WillAppear {
            frame,
            kind,
            duration,
        });

        let request = TransitionRequest {
            frame,
            duration,
            options,
        };
        self.animator.run(&prep, view, &request, Completion::noop())?;
        view.set_visible(true);
        let token = self.animator.run(&enter, view, &request, done)?;

        if self.animator.active_token() == Some(token) {
            self.visibility = Visibility::Appearing;
            self.in_flight = Some(InFlight {
                token,
                pending: Pending::AppearEnd,
                frame,
            });
        } else {
            // Instant entry (AnimationType::None or zero duration).
            self.finish_appear(frame);
        }
        Ok(Some(token))
    }

    /// Begin a disappear cycle: `Out` animates to the hidden pose, then
    /// `Reset` restores the resting frame while the view is hidden.
    ///
    /// Returns `Ok(None)` when ignored (any state but `Visible`).
    pub fn disappear<V: View>(
        &mut self,
        view: &mut V,
    ) -> Result<Option<TransitionToken>, TransitionError> {
        self.disappear_with(view, Completion::noop())
    }

    /// `disappear` with a caller completion, fired when the `Out` transition
    /// lands (before the closing `Reset` snapshot).
    pub fn disappear_with<V: View>(
        &mut self,
        view: &mut V,
        done: Completion,
    ) -> Result<Option<TransitionToken>, TransitionError> {
        if self.visibility != Visibility::Visible {
            log::debug!("disappear ignored while {:?}", self.visibility);
            return Ok(None);
        }

        let frame = view.state().frame;
        frame.validate()?;
        let AnimationConfig {
            kind,
            duration,
            options,
        } = self.config;

        if let Some(observer) = self.observer.as_mut() {
            if !observer.will_disappear(frame, kind, duration) {
                return Err(TransitionError::Vetoed {
                    event: "will-disappear".into(),
                });
            }
        }

        let out = self.machine.resolve(kind, AnimationPhase::Out)?;
        let reset = self.machine.resolve(kind, AnimationPhase::Reset)?;

        self.events.push(ViewEvent::WillDisappear {
            frame,
            kind,
            duration,
        });

        let request = TransitionRequest {
            frame,
            duration,
            options,
        };
        let token = self.animator.run(&out, view, &request, done)?;

        if self.animator.active_token() == Some(token) {
            self.visibility = Visibility::Disappearing;
            self.in_flight = Some(InFlight {
                token,
                pending: Pending::DisappearEnd { reset },
                frame,
            });
        } else {
            self.finish_disappear(view, frame, &reset)?;
        }
        Ok(Some(token))
    }

    /// Step the in-flight transition by `dt` seconds. Completed tokens that
    /// match the tracked cycle advance the state machine and emit the `Did*`
    /// event; any other completed token is stale and dropped.
    pub fn advance<V: View>(&mut self, view: &mut V, dt: f32) -> Result<(), TransitionError> {
        let finished = match self.animator.advance(view, dt) {
            Some(token) => token,
            None => return Ok(()),
        };

        let in_flight = match self.in_flight.take() {
            Some(in_flight) => in_flight,
            None => {
                log::trace!("completion {finished:?} finished with no tracked cycle; dropped");
                return Ok(());
            }
        };
        if in_flight.token != finished {
            log::trace!(
                "stale completion {finished:?} dropped; tracking {:?}",
                in_flight.token
            );
            self.in_flight = Some(in_flight);
            return Ok(());
        }

        match in_flight.pending {
            Pending::AppearEnd => self.finish_appear(in_flight.frame),
            Pending::DisappearEnd { reset } => {
                self.finish_disappear(view, in_flight.frame, &reset)?
            }
        }
        Ok(())
    }

    fn finish_appear(&mut self, frame: Frame) {
        self.visibility = Visibility::Visible;
        self.events.push(ViewEvent::DidAppear { frame });
        if let Some(observer) = self.observer.as_mut() {
            observer.did_appear(frame);
        }
    }

    fn finish_disappear<V: View>(
        &mut self,
        view: &mut V,
        frame: Frame,
        reset: &TransitionProcedure,
    ) -> Result<(), TransitionError> {
        let request = TransitionRequest {
            frame,
            duration: 0.0,
            options: self.config.options,
        };
        self.animator.run(reset, view, &request, Completion::noop())?;
        view.set_visible(false);
        self.visibility = Visibility::Hidden;
        self.events.push(ViewEvent::DidDisappear { frame });
        if let Some(observer) = self.observer.as_mut() {
            observer.did_disappear(frame);
        }
        Ok(())
    }
}
