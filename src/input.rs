//! Player input as seen by the simulation: held movement keys, discrete
//! actions, and the timestamp of the last input of any kind.

/// Discrete actions the browser shell maps keys and pointer presses onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Jump,
    Pounce,
    Cancel,
}

/// Logical keys, independent of the physical key that produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Jump,
    Pounce,
    Cancel,
    Other,
}

impl Key {
    /// Maps a `KeyboardEvent.code` value.
    pub fn from_code(code: &str) -> Self {
        match code {
            "ArrowLeft" | "KeyA" => Key::Left,
            "ArrowRight" | "KeyD" => Key::Right,
            "ArrowUp" => Key::Jump,
            "Space" => Key::Pounce,
            "Escape" => Key::Cancel,
            _ => Key::Other,
        }
    }

    pub fn action(self) -> Option<Action> {
        match self {
            Key::Jump => Some(Action::Jump),
            Key::Pounce => Some(Action::Pounce),
            Key::Cancel => Some(Action::Cancel),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    last_input_ms: f64,
}

impl InputState {
    pub fn new(now_ms: f64) -> Self {
        Self {
            left: false,
            right: false,
            last_input_ms: now_ms,
        }
    }

    pub fn touch(&mut self, now_ms: f64) {
        self.last_input_ms = now_ms;
    }

    /// Seconds since the last recorded input.
    pub fn idle_secs(&self, now_ms: f64) -> f64 {
        ((now_ms - self.last_input_ms) / 1000.0).max(0.0)
    }

    /// -1, 0, or 1. Left wins when both are held.
    pub fn horizontal(&self) -> f64 {
        if self.left {
            -1.0
        } else if self.right {
            1.0
        } else {
            0.0
        }
    }

    pub fn set_held(&mut self, key: Key, down: bool) {
        match key {
            Key::Left => self.left = down,
            Key::Right => self.right = down,
            _ => {}
        }
    }
}
