use criterion::{black_box, criterion_group, criterion_main, Criterion};

use apparo_test_fixtures::MockView;
use apparo_transition_core::{
    AnimationMachine, AnimationPhase, AnimationType, Animator, Completion, Frame,
    TransitionRequest, Transitions,
};

fn bench_resolve(c: &mut Criterion) {
    let machine = Transitions::new();
    c.bench_function("resolve_all_pairs", |b| {
        b.iter(|| {
            for kind in AnimationType::ALL {
                for phase in AnimationPhase::ALL {
                    black_box(machine.resolve(black_box(kind), black_box(phase)).unwrap());
                }
            }
        })
    });
}

fn bench_fade_drive(c: &mut Criterion) {
    let machine = Transitions::new();
    let enter = machine
        .resolve(AnimationType::Fade, AnimationPhase::In)
        .unwrap();
    let request = TransitionRequest::new(Frame::new(0.0, 0.0, 100.0, 100.0), 1.0);

    c.bench_function("fade_in_60_ticks", |b| {
        b.iter(|| {
            let mut view = MockView::new(request.frame);
            let mut animator = Animator::new();
            animator
                .run(&enter, &mut view, &request, Completion::noop())
                .unwrap();
            for _ in 0..60 {
                animator.advance(&mut view, 1.0 / 60.0);
            }
            black_box(view);
        })
    });
}

criterion_group!(benches, bench_resolve, bench_fade_drive);
criterion_main!(benches);
