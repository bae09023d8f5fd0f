//! Catchable content: weighted single-word pools for cloud mode and
//! categorized fragment pools for story mode.
//!
//! Draws are stateless; every call consumes from the caller's RNG so rounds and
//! tests can run with their own seeded generator.

mod story;
mod words;

pub use story::{DESIRE, MOOD, MOVEMENT, MYSELF, TIME};
pub use words::{PLAYFUL_SILLINESS, RANDOM_WORDS, SECRET, TINY_HOPES, WARM_GROUNDING};

/// Cumulative upper thresholds paired with the pool they select.
/// Shares: 60 / 25 / 10 / 4 / 1 percent.
pub const WEIGHTED_POOLS: [(f64, &[&str]); 5] = [
    (0.60, WARM_GROUNDING),
    (0.85, TINY_HOPES),
    (0.95, PLAYFUL_SILLINESS),
    (0.99, RANDOM_WORDS),
    (1.00, SECRET),
];

/// Grammatical slot a story fragment belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StoryCategory {
    Time,
    Mood,
    Myself,
    Desire,
    Movement,
}

impl StoryCategory {
    pub const ALL: [StoryCategory; 5] = [
        StoryCategory::Time,
        StoryCategory::Mood,
        StoryCategory::Myself,
        StoryCategory::Desire,
        StoryCategory::Movement,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StoryCategory::Time => "time",
            StoryCategory::Mood => "mood",
            StoryCategory::Myself => "self",
            StoryCategory::Desire => "desire",
            StoryCategory::Movement => "movement",
        }
    }

    pub fn pool(self) -> &'static [&'static str] {
        match self {
            StoryCategory::Time => TIME,
            StoryCategory::Mood => MOOD,
            StoryCategory::Myself => MYSELF,
            StoryCategory::Desire => DESIRE,
            StoryCategory::Movement => MOVEMENT,
        }
    }
}

/// A drawn piece of catchable text. `category` is `None` for cloud words.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Catchable {
    pub text: &'static str,
    pub category: Option<StoryCategory>,
}

/// Uniform pick from a pool. Empty pools yield `None`.
pub fn pick<T: Copy>(rng: &mut fastrand::Rng, pool: &[T]) -> Option<T> {
    if pool.is_empty() {
        return None;
    }
    Some(pool[rng.usize(0..pool.len())])
}

/// Maps a uniform roll in `[0, 1)` to the pool whose threshold it falls under.
fn pool_for_roll(roll: f64) -> &'static [&'static str] {
    WEIGHTED_POOLS
        .iter()
        .find(|(threshold, _)| roll < *threshold)
        .map(|(_, pool)| *pool)
        .unwrap_or(SECRET)
}

/// Draws one cloud-mode word from the weighted pools.
pub fn choose_word(rng: &mut fastrand::Rng) -> &'static str {
    let pool = pool_for_roll(rng.f64());
    pick(rng, pool).unwrap_or(SECRET[0])
}

/// Draws a story fragment: uniform category, then uniform fragment within it.
pub fn choose_story_fragment(rng: &mut fastrand::Rng) -> Catchable {
    let category = StoryCategory::ALL[rng.usize(0..StoryCategory::ALL.len())];
    let text = pick(rng, category.pool()).unwrap_or("");
    Catchable {
        text,
        category: Some(category),
    }
}
