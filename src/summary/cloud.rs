// Word cloud: frequency-ranked entries and a bounded-attempt random layout.
//
// Layout is best effort. A word that finds no free spot within
// `PLACEMENT_ATTEMPTS` tries is left out of the drawing; that is accepted
// behavior, not a packing failure to recover from.

use std::collections::BTreeSet;

use crate::content::pick;
use crate::round::Playfield;
use crate::round::catch::Tallies;
use crate::round::word::WORD_COLORS;

pub const PLACEMENT_ATTEMPTS: usize = 40;
pub const CLOUD_MARGIN: f64 = 120.0;
pub const NO_WORDS_MESSAGE: &str = "No words caught this round. Try again!";

#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    pub word: &'static str,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub size: f64,
    pub color: &'static str,
}

impl Placement {
    fn overlaps(&self, other: &Placement) -> bool {
        (self.x - other.x).abs() < (self.w + other.w) * 0.5
            && (self.y - other.y).abs() < (self.h + other.h) * 0.5
    }
}

/// One row of the "keep words" panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeepControl {
    pub word: &'static str,
    pub count: u32,
    pub kept: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CloudView {
    pub headline: String,
    pub entries: Vec<(&'static str, u32)>,
    pub placements: Vec<Placement>,
    pub controls: Vec<KeepControl>,
}

fn ranked(tallies: &Tallies) -> Vec<(&'static str, u32)> {
    let mut all: Vec<(&'static str, u32)> = tallies.words.iter().map(|(w, c)| (*w, *c)).collect();
    // stable: equal counts keep the tally's lexicographic order
    all.sort_by(|a, b| b.1.cmp(&a.1));
    all
}

/// Kept words with their counts, most caught first.
pub fn cloud_entries(tallies: &Tallies, keep: &BTreeSet<&'static str>) -> Vec<(&'static str, u32)> {
    ranked(tallies)
        .into_iter()
        .filter(|(w, _)| keep.contains(w))
        .collect()
}

/// Every caught word, kept or not, so a dropped word can be re-selected.
pub fn keep_controls(tallies: &Tallies, keep: &BTreeSet<&'static str>) -> Vec<KeepControl> {
    ranked(tallies)
        .into_iter()
        .map(|(word, count)| KeepControl {
            word,
            count,
            kept: keep.contains(word),
        })
        .collect()
}

pub fn headline(tallies: &Tallies) -> String {
    match tallies.total() {
        0 => NO_WORDS_MESSAGE.to_string(),
        n => format!("You caught {n} words."),
    }
}

pub fn word_size(count: u32) -> f64 {
    18.0 + (count as f64 * 10.0).min(60.0)
}

/// Places entries in order at random spots inside the margin. `measure`
/// returns the text width of a word at a font size.
pub fn layout(
    entries: &[(&'static str, u32)],
    field: &Playfield,
    mut measure: impl FnMut(&str, f64) -> f64,
    rng: &mut fastrand::Rng,
) -> Vec<Placement> {
    let mut placed: Vec<Placement> = Vec::with_capacity(entries.len());
    let span_x = (field.width - 2.0 * CLOUD_MARGIN).max(0.0);
    let span_y = (field.height - 2.0 * CLOUD_MARGIN).max(0.0);
    for &(word, count) in entries {
        let size = word_size(count);
        let w = measure(word, size) + size;
        let h = size + 10.0;
        for _ in 0..PLACEMENT_ATTEMPTS {
            let candidate = Placement {
                word,
                x: CLOUD_MARGIN + rng.f64() * span_x,
                y: CLOUD_MARGIN + rng.f64() * span_y,
                w,
                h,
                size,
                color: WORD_COLORS[0],
            };
            if !placed.iter().any(|p| p.overlaps(&candidate)) {
                placed.push(Placement {
                    color: pick(rng, &WORD_COLORS).unwrap_or(WORD_COLORS[0]),
                    ..candidate
                });
                break;
            }
        }
    }
    placed
}
