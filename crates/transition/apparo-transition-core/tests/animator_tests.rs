use std::cell::Cell;
use std::rc::Rc;

use apparo_test_fixtures::MockView;
use apparo_transition_core::{
    AnimationMachine, AnimationPhase, AnimationType, Animator, Completion, Easing, Frame,
    TransitionError, TransitionOptions, TransitionRequest, Transitions, View,
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn counter() -> (Rc<Cell<u32>>, Completion) {
    let count = Rc::new(Cell::new(0));
    let sink = Rc::clone(&count);
    (count, Completion::new(move |_| sink.set(sink.get() + 1)))
}

const TARGET: Frame = Frame::new(0.0, 0.0, 100.0, 100.0);

fn linear_request(duration: f32) -> TransitionRequest {
    TransitionRequest {
        frame: TARGET,
        duration,
        options: TransitionOptions {
            easing: Easing::Linear,
            ..TransitionOptions::default()
        },
    }
}

/// it should drive fade-in opacity monotonically to 1 and complete only after it gets there
#[test]
fn fade_in_monotonic_and_completes_after_opaque() {
    let machine = Transitions::new();
    let mut view = MockView::new(TARGET);
    let mut animator = Animator::new();

    let prep = machine
        .resolve(AnimationType::Fade, AnimationPhase::Prep)
        .unwrap();
    animator
        .run(&prep, &mut view, &linear_request(0.0), Completion::noop())
        .unwrap();
    approx(view.state().opacity, 0.0, 1e-6);

    let enter = machine
        .resolve(AnimationType::Fade, AnimationPhase::In)
        .unwrap();
    let (count, done) = counter();
    animator
        .run(&enter, &mut view, &linear_request(0.3), done)
        .unwrap();

    let mut ticks = 0;
    while !animator.is_idle() {
        // Completion must not have fired while opacity is still short of 1.
        assert_eq!(count.get(), 0);
        animator.advance(&mut view, 0.05);
        ticks += 1;
        assert!(ticks <= 6, "0.3s at 0.05s per tick is six ticks");
    }

    assert_eq!(ticks, 6);
    assert_eq!(count.get(), 1);
    approx(view.state().opacity, 1.0, 1e-6);

    let opacities = view.opacity_history();
    for pair in opacities.windows(2) {
        assert!(pair[1] >= pair[0] - 1e-6, "opacity dipped: {opacities:?}");
    }
}

/// it should end slide-left-out fully offscreen: final x <= -width relative to the container
#[test]
fn slide_left_out_ends_fully_offscreen() {
    let machine = Transitions::new();
    let mut view = MockView::new(TARGET);
    let mut animator = Animator::new();

    let out = machine
        .resolve(AnimationType::SlideLeft, AnimationPhase::Out)
        .unwrap();
    animator
        .run(&out, &mut view, &linear_request(0.2), Completion::noop())
        .unwrap();
    while animator.advance(&mut view, 0.05).is_none() {}

    let frame = view.state().frame;
    assert!(
        frame.x <= -frame.width,
        "x={} width={} is not fully offscreen left",
        frame.x,
        frame.width
    );
}

/// it should leave the same final state when the same procedure runs twice
#[test]
fn repeated_invocation_is_idempotent() {
    let machine = Transitions::new();
    let mut view = MockView::new(TARGET);
    let mut animator = Animator::new();
    let enter = machine
        .resolve(AnimationType::SlideBottom, AnimationPhase::In)
        .unwrap();

    let request = linear_request(0.1);
    animator
        .run(&enter, &mut view, &request, Completion::noop())
        .unwrap();
    while animator.advance(&mut view, 0.025).is_none() {}
    let once = view.state();

    animator
        .run(&enter, &mut view, &request, Completion::noop())
        .unwrap();
    while animator.advance(&mut view, 0.025).is_none() {}

    assert_eq!(view.state(), once);
}

/// it should tolerate starting a transition mid-flight and still land exactly
#[test]
fn mid_flight_restart_lands_on_end_state() {
    let machine = Transitions::new();
    let mut view = MockView::new(TARGET);
    let mut animator = Animator::new();

    let out = machine
        .resolve(AnimationType::SlideRight, AnimationPhase::Out)
        .unwrap();
    animator
        .run(&out, &mut view, &linear_request(0.2), Completion::noop())
        .unwrap();
    animator.advance(&mut view, 0.05);
    assert!(!animator.is_idle());

    // Reverse course from wherever the view currently is.
    let enter = machine
        .resolve(AnimationType::SlideRight, AnimationPhase::In)
        .unwrap();
    animator
        .run(&enter, &mut view, &linear_request(0.2), Completion::noop())
        .unwrap();
    while animator.advance(&mut view, 0.05).is_none() {}

    assert_eq!(view.state().frame, TARGET);
}

/// it should fire the replaced transition's completion with its stale token
#[test]
fn replacement_fires_stale_completion_exactly_once() {
    let machine = Transitions::new();
    let mut view = MockView::new(TARGET);
    let mut animator = Animator::new();

    let out = machine
        .resolve(AnimationType::Fade, AnimationPhase::Out)
        .unwrap();
    let stale_seen = Rc::new(Cell::new(None));
    let sink = Rc::clone(&stale_seen);
    let first = animator
        .run(
            &out,
            &mut view,
            &linear_request(0.2),
            Completion::new(move |t| sink.set(Some(t))),
        )
        .unwrap();
    assert_eq!(stale_seen.get(), None);

    let enter = machine
        .resolve(AnimationType::Fade, AnimationPhase::In)
        .unwrap();
    let (count, done) = counter();
    let second = animator
        .run(&enter, &mut view, &linear_request(0.2), done)
        .unwrap();

    // The replaced completion fired at replacement time, with the old token.
    assert_eq!(stale_seen.get(), Some(first));
    assert_ne!(first, second);
    assert_eq!(animator.active_token(), Some(second));

    while animator.advance(&mut view, 0.05).is_none() {}
    assert_eq!(count.get(), 1);
}

/// it should reject malformed frames synchronously with no view mutation
#[test]
fn invalid_geometry_fails_fast() {
    let machine = Transitions::new();
    let mut view = MockView::new(TARGET);
    let mut animator = Animator::new();
    let enter = machine
        .resolve(AnimationType::Fade, AnimationPhase::In)
        .unwrap();

    for bad in [
        Frame::new(0.0, 0.0, 0.0, 100.0),
        Frame::new(0.0, 0.0, 100.0, -5.0),
        Frame::new(f32::NAN, 0.0, 100.0, 100.0),
    ] {
        let err = animator
            .run(
                &enter,
                &mut view,
                &TransitionRequest::new(bad, 0.3),
                Completion::noop(),
            )
            .unwrap_err();
        assert!(matches!(err, TransitionError::InvalidGeometry { .. }));
    }

    assert!(view.applied.is_empty());
    assert!(animator.is_idle());
}

/// it should run a timed row instantly when the duration is zero
#[test]
fn zero_duration_timed_row_is_instant() {
    let machine = Transitions::new();
    let mut view = MockView::new(TARGET);
    let mut animator = Animator::new();
    let out = machine
        .resolve(AnimationType::SlideTop, AnimationPhase::Out)
        .unwrap();

    let (count, done) = counter();
    animator
        .run(&out, &mut view, &linear_request(0.0), done)
        .unwrap();

    assert_eq!(count.get(), 1);
    assert!(animator.is_idle());
    assert_eq!(view.state().frame.max_y(), view.container().min_y());
}

/// it should unwind a spin from the configured angle to identity on the way in
#[test]
fn spin_in_unwinds_to_identity() {
    let machine = Transitions::new();
    let mut view = MockView::new(TARGET);
    let mut animator = Animator::new();

    let prep = machine
        .resolve(AnimationType::Spin, AnimationPhase::Prep)
        .unwrap();
    animator
        .run(&prep, &mut view, &linear_request(0.0), Completion::noop())
        .unwrap();
    approx(view.state().rotation, std::f32::consts::TAU, 1e-5);

    let enter = machine
        .resolve(AnimationType::Spin, AnimationPhase::In)
        .unwrap();
    animator
        .run(&enter, &mut view, &linear_request(0.2), Completion::noop())
        .unwrap();
    animator.advance(&mut view, 0.1);
    approx(view.state().rotation, std::f32::consts::PI, 1e-4);
    while animator.advance(&mut view, 0.1).is_none() {}
    approx(view.state().rotation, 0.0, 1e-6);
}

/// it should grow a reveal's mask from the named edge to the full frame
#[test]
fn reveal_top_mask_grows_downward() {
    let machine = Transitions::new();
    let mut view = MockView::new(TARGET);
    let mut animator = Animator::new();

    let prep = machine
        .resolve(AnimationType::RevealTop, AnimationPhase::Prep)
        .unwrap();
    animator
        .run(&prep, &mut view, &linear_request(0.0), Completion::noop())
        .unwrap();
    let mask = view.state().clip.unwrap();
    approx(mask.height, 0.0, 1e-6);

    let enter = machine
        .resolve(AnimationType::RevealTop, AnimationPhase::In)
        .unwrap();
    animator
        .run(&enter, &mut view, &linear_request(0.2), Completion::noop())
        .unwrap();
    animator.advance(&mut view, 0.1);
    let mid = view.state().clip.unwrap();
    approx(mid.height, TARGET.height / 2.0, 1e-4);

    while animator.advance(&mut view, 0.1).is_none() {}
    assert_eq!(view.state().clip, Some(TARGET.local()));
}
