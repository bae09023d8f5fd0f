// Frame timing: raw rAF timestamps to clamped simulation steps.

/// Turns raw frame timestamps (milliseconds) into simulation deltas (seconds).
///
/// Deltas are clamped to `MAX_DT` so a stalled tab does not produce one huge
/// step. After `reset` the next frame only re-establishes the baseline.
#[derive(Debug, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

pub const MAX_DT: f64 = 0.05;

impl FrameClock {
    pub fn new() -> Self {
        Self { last_ms: None }
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
    }

    pub fn delta(&mut self, now_ms: f64) -> f64 {
        let dt = match self.last_ms {
            Some(prev) => ((now_ms - prev) / 1000.0).clamp(0.0, MAX_DT),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        if dt.is_finite() { dt } else { 0.0 }
    }
}
