use approx::assert_relative_eq;
use bounce_box::config::DEFAULT_TIME_STEP;
use bounce_box::*;

fn default_scene() -> BouncingBody {
    BouncingBody::new(
        DVec2::new(5.0, 5.0),
        DVec2::new(5.0, 10.0),
        BallProperties::default(),
        Enclosure::default(),
    )
    .expect("placement clears the left wall")
}

#[test]
fn frames_accumulate_time_and_samples() {
    let mut sim = Simulation::new(default_scene(), DEFAULT_TIME_STEP);
    assert_eq!(sim.frame(), 0);
    assert_eq!(sim.samples().len(), 1);

    sim.run(10);

    assert_eq!(sim.frame(), 10);
    assert_eq!(sim.samples().len(), 11);
    assert_relative_eq!(
        sim.samples().last().unwrap().time,
        10.0 * DEFAULT_TIME_STEP,
        max_relative = 1e-12
    );
    assert!(sim
        .samples()
        .windows(2)
        .all(|pair| pair[0].time < pair[1].time));
}

#[test]
fn samples_mirror_the_body_energy() {
    let mut sim = Simulation::new(default_scene(), DEFAULT_TIME_STEP);
    sim.run(5);

    let last = *sim.samples().last().unwrap();
    assert_eq!(last.energy, sim.body().energy());
    assert_eq!(last.time, sim.body().elapsed_time());
}

#[test]
fn non_positive_time_step_falls_back_to_the_default() {
    let sim = Simulation::new(default_scene(), 0.0);
    assert_eq!(sim.time_step(), DEFAULT_TIME_STEP);

    let sim = Simulation::new(default_scene(), -1.0);
    assert_eq!(sim.time_step(), DEFAULT_TIME_STEP);
}

#[test]
fn shared_snapshots_agree_with_a_directly_driven_simulation() {
    let shared = SharedSimulation::new(Simulation::new(default_scene(), DEFAULT_TIME_STEP));
    let mut direct = Simulation::new(default_scene(), DEFAULT_TIME_STEP);

    for _ in 0..30 {
        shared.advance_frame();
        direct.advance_frame();
    }

    let snapshot = shared.snapshot();
    assert_eq!(snapshot.position, direct.body().position());
    assert_eq!(snapshot.velocity, direct.body().velocity());
    assert_eq!(snapshot.elapsed_time, direct.body().elapsed_time());
    assert_eq!(snapshot.energy, direct.body().energy());
}

#[test]
fn cloned_handles_share_one_simulation() {
    let shared = SharedSimulation::new(Simulation::new(default_scene(), DEFAULT_TIME_STEP));
    let other = shared.clone();

    other.advance_frame();
    other.advance_frame();

    assert_eq!(shared.frame(), 2);
}

#[test]
fn snapshot_energy_is_consistent_with_its_velocity() {
    let shared = SharedSimulation::new(Simulation::new(default_scene(), DEFAULT_TIME_STEP));
    shared.advance_frame();

    let snapshot = shared.snapshot();
    assert_relative_eq!(
        snapshot.energy.kinetic,
        0.5 * snapshot.velocity.y * snapshot.velocity.y,
        max_relative = 1e-12
    );
}
