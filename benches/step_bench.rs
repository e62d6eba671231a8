use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use bounce_box::*;

const DT: f64 = 1.0 / 30.0;

fn prepare_simulation() -> Simulation {
    let body = BouncingBody::new(
        DVec2::new(5.0, 5.0),
        DVec2::new(5.0, 10.0),
        BallProperties::default(),
        Enclosure::default(),
    )
    .expect("placement clears the left wall");
    Simulation::new(body, DT)
}

fn bench_step(c: &mut Criterion) {
    c.bench_function("advance_frame", |b| {
        let mut sim = prepare_simulation();
        b.iter(|| {
            sim.advance_frame();
            black_box(sim.body().position());
        })
    });

    c.bench_function("thousand_frames", |b| {
        b.iter(|| {
            let mut sim = prepare_simulation();
            sim.run(black_box(1000));
            black_box(sim.body().energy())
        })
    });
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
