// Randomized spawn cadence for falling words.

pub const FIRST_INTERVAL_MS: f64 = 850.0;
pub const MIN_INTERVAL_MS: f64 = 700.0;
pub const MAX_INTERVAL_MS: f64 = 1350.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Spawner {
    elapsed_ms: f64,
    interval_ms: f64,
}

impl Default for Spawner {
    fn default() -> Self {
        Self {
            elapsed_ms: 0.0,
            interval_ms: FIRST_INTERVAL_MS,
        }
    }
}

impl Spawner {
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Accumulates `dt` and reports whether one word is due. When due, the
    /// accumulator restarts and a new interval is drawn.
    pub fn tick(&mut self, dt: f64, rng: &mut fastrand::Rng) -> bool {
        self.elapsed_ms += dt * 1000.0;
        if self.elapsed_ms < self.interval_ms {
            return false;
        }
        self.elapsed_ms = 0.0;
        self.interval_ms = MIN_INTERVAL_MS + rng.f64() * (MAX_INTERVAL_MS - MIN_INTERVAL_MS);
        true
    }
}
