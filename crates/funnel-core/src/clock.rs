use std::time::Duration;

/// Maps elapsed time onto a repeating cycle phase in `[0, 1)`.
#[derive(Clone, Debug)]
pub struct AnimationClock {
    pub speed: f32,
    pub duration: f32,
    elapsed_sec: f64,
    paused: bool,
}

impl AnimationClock {
    pub fn new(speed: f32, duration: f32) -> Self {
        Self {
            speed,
            duration,
            elapsed_sec: 0.0,
            paused: false,
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        if !self.paused {
            self.elapsed_sec += dt.as_secs_f64();
        }
    }

    pub fn elapsed_sec(&self) -> f64 {
        self.elapsed_sec
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Current phase of the cycle.
    pub fn phase(&self) -> f32 {
        phase_at(self.elapsed_sec, self.speed, self.duration)
    }
}

/// `((seconds * speed) mod duration) / duration`, always in `[0, 1)`.
pub fn phase_at(seconds: f64, speed: f32, duration: f32) -> f32 {
    let duration = duration as f64;
    if duration <= 0.0 {
        return 0.0;
    }
    let cycle_time = (seconds * speed as f64).rem_euclid(duration);
    // rem_euclid can round up to exactly `duration` for tiny negatives
    let phase = (cycle_time / duration) as f32;
    if phase >= 1.0 {
        0.0
    } else {
        phase
    }
}
