// Circular catch zone around the pouncing cat, plus the round's capture tallies.

use std::collections::BTreeMap;

use super::cat::Cat;
use super::word::Word;
use crate::content::StoryCategory;

/// Vertical offset of the zone center above the cat's feet.
pub const ZONE_LIFT: f64 = 40.0;
pub const ZONE_RADIUS: f64 = 90.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CatchZone {
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

impl CatchZone {
    /// The zone exists only while the pounce timer is running.
    pub fn around(cat: &Cat) -> Option<Self> {
        cat.is_pouncing().then(|| Self {
            x: cat.x,
            y: cat.y - ZONE_LIFT,
            r: ZONE_RADIUS,
        })
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        let dx = x - self.x;
        let dy = y - self.y;
        dx * dx + dy * dy <= self.r * self.r
    }
}

/// Capture counts for one round. Keyed maps keep enumeration order stable
/// (lexicographic) across renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tallies {
    pub words: BTreeMap<&'static str, u32>,
    pub by_category: BTreeMap<StoryCategory, BTreeMap<&'static str, u32>>,
}

impl Tallies {
    pub fn record(&mut self, text: &'static str, category: Option<StoryCategory>) {
        *self.words.entry(text).or_insert(0) += 1;
        if let Some(cat) = category {
            *self
                .by_category
                .entry(cat)
                .or_default()
                .entry(text)
                .or_insert(0) += 1;
        }
    }

    /// Sum over every caught word, regardless of any summary filter.
    pub fn total(&self) -> u32 {
        self.words.values().sum()
    }

    pub fn total_fragments(&self) -> u32 {
        self.by_category.values().flat_map(|b| b.values()).sum()
    }

    pub fn bucket(&self, cat: StoryCategory) -> Option<&BTreeMap<&'static str, u32>> {
        self.by_category.get(&cat).filter(|b| !b.is_empty())
    }

    /// Fragments caught in one category, most caught first. Ties keep the
    /// bucket's enumeration order.
    pub fn ranked_fragments(&self, cat: StoryCategory) -> Vec<(&'static str, u32)> {
        let mut ranked: Vec<(&'static str, u32)> = self
            .bucket(cat)
            .map(|b| b.iter().map(|(t, c)| (*t, *c)).collect())
            .unwrap_or_default();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

/// Marks every uncaught word inside the zone as caught and records it.
/// Returns how many were caught this call.
pub fn resolve_catches(zone: Option<CatchZone>, words: &mut [Word], tallies: &mut Tallies) -> usize {
    let Some(zone) = zone else {
        return 0;
    };
    let mut caught = 0;
    for w in words.iter_mut().filter(|w| !w.caught) {
        if zone.contains(w.x, w.y) {
            w.caught = true;
            tallies.record(w.text, w.category);
            log::debug!("caught {:?}", w.text);
            caught += 1;
        }
    }
    caught
}
