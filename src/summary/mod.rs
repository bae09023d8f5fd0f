//! End-of-round curation: turns the round's tallies into either a word cloud
//! or a short story, with selections the player can adjust.
//!
//! Default selections are filled in at most once per round, the first time the
//! summary is composed. After that only the explicit selection actions change
//! them, so recomposing with unchanged selections is a pure re-read.

pub mod cloud;
pub mod story;

use std::collections::BTreeSet;

use crate::config::Mode;
use crate::content::{StoryCategory, pick};
use crate::round::Playfield;
use crate::round::catch::Tallies;

pub use cloud::{CloudView, KeepControl, Placement};
pub use story::{StoryChoices, StorySelector, StoryView, build_story_lines};

#[derive(Clone, Debug, PartialEq)]
pub enum SummaryView {
    Cloud(CloudView),
    Story(StoryView),
}

#[derive(Debug)]
pub struct SummaryComposer {
    keep: Option<BTreeSet<&'static str>>,
    choices: Option<StoryChoices>,
    stale: bool,
}

impl Default for SummaryComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryComposer {
    pub fn new() -> Self {
        Self {
            keep: None,
            choices: None,
            stale: true,
        }
    }

    /// Whether the next frame needs to compose and draw the summary.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn keep_set(&self) -> Option<&BTreeSet<&'static str>> {
        self.keep.as_ref()
    }

    pub fn story_choices(&self) -> Option<&StoryChoices> {
        self.choices.as_ref()
    }

    fn init_keep(&mut self, tallies: &Tallies) -> &BTreeSet<&'static str> {
        self.keep
            .get_or_insert_with(|| tallies.words.keys().copied().collect())
    }

    fn init_choices(&mut self, tallies: &Tallies, rng: &mut fastrand::Rng) -> &StoryChoices {
        self.choices.get_or_insert_with(|| {
            let mut choices = StoryChoices::new();
            for cat in StoryCategory::ALL {
                let caught = tallies.ranked_fragments(cat).first().map(|(t, _)| *t);
                let fallback = || {
                    story::is_required(cat)
                        .then(|| pick(rng, cat.pool()))
                        .flatten()
                };
                if let Some(text) = caught.or_else(fallback) {
                    choices.insert(cat, text);
                }
            }
            choices
        })
    }

    /// Builds the summary for `mode`, filling default selections on first use.
    /// `measure` reports text width at a font size for the cloud layout.
    pub fn compose(
        &mut self,
        mode: Mode,
        tallies: &Tallies,
        field: &Playfield,
        measure: impl FnMut(&str, f64) -> f64,
        rng: &mut fastrand::Rng,
    ) -> SummaryView {
        self.stale = false;
        match mode {
            Mode::Cloud => {
                let keep = self.init_keep(tallies).clone();
                let entries = cloud::cloud_entries(tallies, &keep);
                let placements = if tallies.total() == 0 {
                    Vec::new()
                } else {
                    cloud::layout(&entries, field, measure, rng)
                };
                SummaryView::Cloud(CloudView {
                    headline: cloud::headline(tallies),
                    controls: cloud::keep_controls(tallies, &keep),
                    entries,
                    placements,
                })
            }
            Mode::Story => {
                let choices = self.init_choices(tallies, rng).clone();
                let lines = build_story_lines(tallies, &choices);
                SummaryView::Story(StoryView {
                    header: story::header(&lines).to_string(),
                    selectors: if lines.is_empty() {
                        Vec::new()
                    } else {
                        story::selectors(tallies, &choices)
                    },
                    lines,
                })
            }
        }
    }

    /// Keeps or drops a caught word from the cloud. Unknown words are ignored.
    pub fn set_kept(&mut self, tallies: &Tallies, word: &str, kept: bool) -> bool {
        let Some((&word, _)) = tallies.words.get_key_value(word) else {
            return false;
        };
        let keep = self.init_keep(tallies);
        let changed = if kept {
            !keep.contains(word)
        } else {
            keep.contains(word)
        };
        if let Some(keep) = self.keep.as_mut() {
            if kept {
                keep.insert(word);
            } else {
                keep.remove(word);
            }
        }
        self.stale = true;
        changed
    }

    pub fn toggle_word(&mut self, tallies: &Tallies, word: &str) -> bool {
        let kept = self.init_keep(tallies).contains(word);
        self.set_kept(tallies, word, !kept)
    }

    /// Picks a caught fragment for a category. Fragments never caught in that
    /// category are ignored.
    pub fn choose_fragment(
        &mut self,
        tallies: &Tallies,
        cat: StoryCategory,
        text: &str,
        rng: &mut fastrand::Rng,
    ) -> bool {
        let Some((&text, _)) = tallies.bucket(cat).and_then(|b| b.get_key_value(text)) else {
            return false;
        };
        self.init_choices(tallies, rng);
        if let Some(choices) = self.choices.as_mut() {
            choices.insert(cat, text);
        }
        self.stale = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measure(w: &str, size: f64) -> f64 {
        w.len() as f64 * size * 0.5
    }

    fn cloud(view: SummaryView) -> CloudView {
        match view {
            SummaryView::Cloud(c) => c,
            SummaryView::Story(_) => panic!("expected cloud"),
        }
    }

    fn story(view: SummaryView) -> StoryView {
        match view {
            SummaryView::Story(s) => s,
            SummaryView::Cloud(_) => panic!("expected story"),
        }
    }

    #[test]
    fn cloud_defaults_keep_everything() {
        let mut t = Tallies::default();
        for _ in 0..3 {
            t.record("matcha", None);
        }
        t.record("sea", None);
        let mut rng = fastrand::Rng::with_seed(4);
        let mut c = SummaryComposer::new();
        let view = cloud(c.compose(Mode::Cloud, &t, &Playfield::default(), measure, &mut rng));
        assert_eq!(view.entries, vec![("matcha", 3), ("sea", 1)]);
        let keep: BTreeSet<_> = ["matcha", "sea"].into_iter().collect();
        assert_eq!(c.keep_set(), Some(&keep));
        assert!(!c.is_stale());
    }

    #[test]
    fn deselecting_everything_does_not_reselect() {
        let mut t = Tallies::default();
        t.record("sea", None);
        let mut rng = fastrand::Rng::with_seed(4);
        let mut c = SummaryComposer::new();
        c.compose(Mode::Cloud, &t, &Playfield::default(), measure, &mut rng);
        assert!(c.toggle_word(&t, "sea"));
        assert!(c.is_stale());
        let view = cloud(c.compose(Mode::Cloud, &t, &Playfield::default(), measure, &mut rng));
        assert!(view.entries.is_empty());
        assert_eq!(view.headline, "You caught 1 words.");
        assert!(!view.controls[0].kept);
    }

    #[test]
    fn unknown_words_are_not_kept() {
        let t = Tallies::default();
        let mut c = SummaryComposer::new();
        assert!(!c.set_kept(&t, "ghost", true));
    }

    #[test]
    fn story_defaults_are_computed_once() {
        let mut t = Tallies::default();
        t.record("tonight", Some(StoryCategory::Time));
        let mut rng = fastrand::Rng::with_seed(8);
        let mut c = SummaryComposer::new();
        let first = story(c.compose(Mode::Story, &t, &Playfield::default(), measure, &mut rng));
        let choices_before = c.story_choices().cloned();
        for _ in 0..5 {
            let again = story(c.compose(Mode::Story, &t, &Playfield::default(), measure, &mut rng));
            assert_eq!(again.lines, first.lines);
        }
        assert_eq!(c.story_choices().cloned(), choices_before);
        // mood was not caught, so it fell back to a pool fragment
        let mood = choices_before.as_ref().and_then(|ch| ch.get(&StoryCategory::Mood));
        assert!(mood.is_some_and(|m| StoryCategory::Mood.pool().contains(m)));
        assert_eq!(first.lines.len(), 1);
        assert!(first.lines[0].starts_with("tonight, "));
    }

    #[test]
    fn choosing_a_fragment_recomposes() {
        let mut t = Tallies::default();
        t.record("today", Some(StoryCategory::Time));
        t.record("today", Some(StoryCategory::Time));
        t.record("tonight", Some(StoryCategory::Time));
        t.record("it feels foggy", Some(StoryCategory::Mood));
        let mut rng = fastrand::Rng::with_seed(8);
        let mut c = SummaryComposer::new();
        let view = story(c.compose(Mode::Story, &t, &Playfield::default(), measure, &mut rng));
        assert_eq!(view.lines, vec!["today, it feels foggy."]);
        assert_eq!(view.selectors.len(), 1);

        assert!(!c.choose_fragment(&t, StoryCategory::Time, "lately", &mut rng));
        assert!(c.choose_fragment(&t, StoryCategory::Time, "tonight", &mut rng));
        assert!(c.is_stale());
        let view = story(c.compose(Mode::Story, &t, &Playfield::default(), measure, &mut rng));
        assert_eq!(view.lines, vec!["tonight, it feels foggy."]);
        assert_eq!(view.selectors[0].chosen, Some("tonight"));
    }
}
