// Five-slot story built from one fragment per category.

use std::collections::BTreeMap;

use crate::content::StoryCategory;
use crate::round::catch::Tallies;

pub const NO_FRAGMENTS_MESSAGE: &str = "No fragments caught this round. Try again!";
pub const STORY_HEADER: &str = "Story preview above. Adjust lines below.";

pub type StoryChoices = BTreeMap<StoryCategory, &'static str>;

/// Dropdown for a category where more than one fragment was caught.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorySelector {
    pub category: StoryCategory,
    pub options: Vec<(&'static str, u32)>,
    pub chosen: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoryView {
    pub header: String,
    pub lines: Vec<String>,
    pub selectors: Vec<StorySelector>,
}

/// Time and mood open the story and always get a fragment; the other slots
/// only appear when something was caught for them.
pub fn is_required(cat: StoryCategory) -> bool {
    matches!(cat, StoryCategory::Time | StoryCategory::Mood)
}

/// Story lines for the current choices. Empty when no fragment was caught at
/// all during the round.
pub fn build_story_lines(tallies: &Tallies, choices: &StoryChoices) -> Vec<String> {
    if tallies.total_fragments() == 0 {
        return Vec::new();
    }
    let slot = |cat: StoryCategory| choices.get(&cat).copied().filter(|s| !s.is_empty());

    let mut lines = vec![format!(
        "{}, {}.",
        slot(StoryCategory::Time).unwrap_or_default(),
        slot(StoryCategory::Mood).unwrap_or_default()
    )];
    if let Some(me) = slot(StoryCategory::Myself) {
        lines.push(format!("I'm {me}."));
    }
    if let Some(want) = slot(StoryCategory::Desire) {
        lines.push(format!("I want {want}."));
    }
    if let Some(go) = slot(StoryCategory::Movement) {
        lines.push(format!("so I {go}."));
    }
    lines
}

pub fn selectors(tallies: &Tallies, choices: &StoryChoices) -> Vec<StorySelector> {
    StoryCategory::ALL
        .iter()
        .filter_map(|&category| {
            let options = tallies.ranked_fragments(category);
            (options.len() > 1).then(|| StorySelector {
                category,
                options,
                chosen: choices.get(&category).copied(),
            })
        })
        .collect()
}

pub fn header(lines: &[String]) -> &'static str {
    if lines.is_empty() {
        NO_FRAGMENTS_MESSAGE
    } else {
        STORY_HEADER
    }
}
