use std::sync::Arc;

use glam::DVec2;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_TIME_STEP;
use crate::core::body::BouncingBody;
use crate::core::types::Energy;
use crate::utils::logging::FrameTimer;

/// One recorded frame: simulated time and the energy split at that instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergySample {
    pub time: f64,
    pub energy: Energy,
}

/// Point-in-time copy of everything a front-end needs to draw a frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub position: DVec2,
    pub velocity: DVec2,
    pub elapsed_time: f64,
    pub energy: Energy,
}

/// Driver-loop state: the ball, its fixed timestep, and the frame counter.
///
/// A rendering front-end calls [`advance_frame`](Self::advance_frame) once
/// per displayed frame and reads the ball state back between calls. The
/// time/energy trace accumulates one sample per frame on top of the initial
/// state.
pub struct Simulation {
    body: BouncingBody,
    time_step: f64,
    frame: u64,
    samples: Vec<EnergySample>,
}

impl Simulation {
    /// Creates a driver around `body` stepping `time_step` seconds per frame.
    ///
    /// A non-positive `time_step` falls back to the default frame clock.
    pub fn new(body: BouncingBody, time_step: f64) -> Self {
        let ts = if time_step <= 0.0 {
            DEFAULT_TIME_STEP
        } else {
            time_step
        };

        let samples = vec![EnergySample {
            time: 0.0,
            energy: body.energy(),
        }];

        Self {
            body,
            time_step: ts,
            frame: 0,
            samples,
        }
    }

    /// Advances the ball by exactly one timestep and records an energy sample.
    pub fn advance_frame(&mut self) {
        let _timer = FrameTimer::start(self.frame, self.time_step * 1000.0);

        self.body.step(self.time_step);
        self.frame += 1;
        self.samples.push(EnergySample {
            time: self.body.elapsed_time(),
            energy: self.body.energy(),
        });
    }

    /// Runs `count` frames back to back.
    pub fn run(&mut self, count: u64) {
        for _ in 0..count {
            self.advance_frame();
        }
    }

    pub fn body(&self) -> &BouncingBody {
        &self.body
    }

    /// Number of frames advanced since construction.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Recorded time/energy trace, oldest first.
    pub fn samples(&self) -> &[EnergySample] {
        &self.samples
    }

    fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            position: self.body.position(),
            velocity: self.body.velocity(),
            elapsed_time: self.body.elapsed_time(),
            energy: self.body.energy(),
        }
    }
}

/// Shared handle for running simulation and rendering on separate schedules.
///
/// Frames advance under the write lock and snapshots are taken under the read
/// lock, so a reader always observes a fully stepped state, never a
/// half-updated one.
#[derive(Clone)]
pub struct SharedSimulation {
    inner: Arc<RwLock<Simulation>>,
}

impl SharedSimulation {
    pub fn new(simulation: Simulation) -> Self {
        Self {
            inner: Arc::new(RwLock::new(simulation)),
        }
    }

    /// Advances one frame under the write lock.
    pub fn advance_frame(&self) {
        self.inner.write().advance_frame();
    }

    /// Copies out the current state under the read lock.
    pub fn snapshot(&self) -> StateSnapshot {
        self.inner.read().snapshot()
    }

    /// Number of frames advanced so far.
    pub fn frame(&self) -> u64 {
        self.inner.read().frame()
    }
}
