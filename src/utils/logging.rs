use log::{log_enabled, trace, warn, Level};
use std::time::Instant;

/// Times one driver frame and warns when it overruns its budget.
///
/// The budget is the simulated timestep expressed in wall-clock milliseconds:
/// a frame that takes longer than its own `dt` cannot keep up with real time.
pub struct FrameTimer {
    frame: u64,
    budget_ms: f64,
    start: Instant,
}

impl FrameTimer {
    pub fn start(frame: u64, budget_ms: f64) -> Self {
        if log_enabled!(Level::Trace) {
            trace!("frame {frame} begin");
        }
        Self {
            frame,
            budget_ms,
            start: Instant::now(),
        }
    }
}

impl Drop for FrameTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        if elapsed_ms > self.budget_ms {
            warn!(
                "frame {} exceeded budget: {:.2} ms > {:.2} ms",
                self.frame, elapsed_ms, self.budget_ms
            );
        } else if log_enabled!(Level::Trace) {
            trace!("frame {} end ({} µs)", self.frame, (elapsed_ms * 1000.0) as u64);
        }
    }
}
