use bounce_box::config::DEFAULT_TIME_STEP;
use bounce_box::*;

fn main() {
    let enclosure = Enclosure::default();
    let body = BouncingBody::new(
        DVec2::new(5.0, 5.0),
        DVec2::new(5.0, 10.0),
        BallProperties::default(),
        enclosure,
    )
    .expect("initial placement clears the left wall");

    println!(
        "Dropping a ball of radius {} m into a {} x {} m box",
        body.properties().radius,
        enclosure.width(),
        enclosure.height()
    );

    let mut sim = Simulation::new(body, DEFAULT_TIME_STEP);
    for _ in 0..300 {
        sim.advance_frame();
    }

    for sample in sim.samples().iter().step_by(30) {
        println!(
            "t = {:5.2} s  kinetic = {:7.2} J  potential = {:7.2} J",
            sample.time, sample.energy.kinetic, sample.energy.potential
        );
    }

    let body = sim.body();
    println!(
        "Final position after {} frames: ({:.3}, {:.3}), velocity ({:.3}, {:.3})",
        sim.frame(),
        body.position().x,
        body.position().y,
        body.velocity().x,
        body.velocity().y
    );
}
