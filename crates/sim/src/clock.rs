use std::time::{Duration, Instant};

use framewalk_input::InputState;

use crate::camera::CameraController;

/// Default firing interval of the simulation loop.
pub const TICK_INTERVAL: Duration = Duration::from_millis(10);

/// Fixed-interval simulation driver.
///
/// Each firing measures the *real* elapsed time since the previous firing
/// (host scheduler jitter passes through as variable `dt`), runs the camera
/// update, then resets the input accumulators. Ticks are never skipped or
/// coalesced; when the host is delayed the next `dt` simply absorbs the
/// backlog.
#[derive(Debug)]
pub struct SimulationClock {
    interval: Duration,
    last_tick: Option<Instant>,
    ticks: u64,
}

impl SimulationClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_tick: None,
            ticks: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of ticks executed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Execute one tick against the real clock. Returns the measured `dt`
    /// in seconds (zero on the first tick).
    pub fn tick(&mut self, camera: &mut CameraController, input: &mut InputState) -> f32 {
        self.tick_at(Instant::now(), camera, input)
    }

    /// Execute one tick as if it fired at `now`. The injection point for
    /// tests; `tick` delegates here.
    pub fn tick_at(
        &mut self,
        now: Instant,
        camera: &mut CameraController,
        input: &mut InputState,
    ) -> f32 {
        let dt = match self.last_tick {
            Some(last) => now.saturating_duration_since(last).as_secs_f32(),
            None => 0.0,
        };
        self.last_tick = Some(now);

        // update then end_tick, as one unit: every edge and the accumulated
        // mouse delta are consumed by exactly this update.
        camera.update(dt, input);
        input.end_tick();

        self.ticks += 1;
        tracing::trace!(tick = self.ticks, dt, "simulation tick");
        dt
    }

    /// Blocking driver: alternates host-event delivery with ticking.
    ///
    /// `frame` runs before each tick with mutable access to the input state
    /// (the delivery window for host events) and a read-only view of the
    /// camera; returning `false` stops the clock, which is the sole teardown
    /// action. Events delivered in the window for tick N are fully visible
    /// to tick N and cleared before tick N+1.
    pub fn run<F>(&mut self, camera: &mut CameraController, input: &mut InputState, mut frame: F)
    where
        F: FnMut(&mut InputState, &CameraController, u64) -> bool,
    {
        loop {
            if !frame(input, camera, self.ticks) {
                break;
            }
            std::thread::sleep(self.interval);
            self.tick(camera, input);
        }
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(TICK_INTERVAL)
    }
}
