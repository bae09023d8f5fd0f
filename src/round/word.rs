// Falling catchable words.

use super::Playfield;
use crate::content::{Catchable, StoryCategory, pick};

pub const SPAWN_Y: f64 = -20.0;

pub const WORD_FONTS: [&str; 4] = [
    "'Inter', system-ui, sans-serif",
    "'Nunito', sans-serif",
    "'Kalam', cursive",
    "'Fira Sans', sans-serif",
];

pub const WORD_COLORS: [&str; 7] = [
    "#1c9b5f", "#2a8fbd", "#3cb371", "#1c6f8f", "#229977", "#c05a2c", "#b16ac2",
];

/// Visual style drawn once at spawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WordStyle {
    pub size: f64,
    pub weight: u16,
    pub family: &'static str,
    pub color: &'static str,
}

impl WordStyle {
    pub fn random(rng: &mut fastrand::Rng) -> Self {
        Self {
            size: 22.0 + rng.f64() * 22.0,
            weight: if rng.bool() { 700 } else { 600 },
            family: pick(rng, &WORD_FONTS).unwrap_or(WORD_FONTS[0]),
            color: pick(rng, &WORD_COLORS).unwrap_or(WORD_COLORS[0]),
        }
    }

    /// CSS font shorthand, e.g. `700 31px 'Kalam', cursive`.
    pub fn css_font(&self) -> String {
        format!("{} {:.0}px {}", self.weight, self.size, self.family)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Word {
    pub text: &'static str,
    pub category: Option<StoryCategory>,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub caught: bool,
    pub age: f64,
    pub style: WordStyle,
}

impl Word {
    /// A new word at the top of the playfield with a random drift.
    pub fn spawn(content: Catchable, field: &Playfield, rng: &mut fastrand::Rng) -> Self {
        let inset = field.inset;
        Self {
            text: content.text,
            category: content.category,
            x: inset + rng.f64() * (field.width - 2.0 * inset),
            y: SPAWN_Y,
            vx: (rng.f64() - 0.5) * 40.0,
            vy: 40.0 + rng.f64() * 40.0,
            caught: false,
            age: 0.0,
            style: WordStyle::random(rng),
        }
    }

    pub fn step(&mut self, dt: f64) {
        self.age += dt;
        self.x += self.vx * dt;
        self.y += self.vy * dt;
    }

    pub fn fell_out(&self, field: &Playfield) -> bool {
        self.y > field.removal_y()
    }
}
