// Content pool invariants. Native-friendly; no wasm/browser APIs.

use std::collections::HashSet;

use pounce_words::StoryCategory;
use pounce_words::content::{
    PLAYFUL_SILLINESS, RANDOM_WORDS, SECRET, TINY_HOPES, WARM_GROUNDING, WEIGHTED_POOLS,
    choose_story_fragment, choose_word,
};

fn assert_clean_pool(name: &str, pool: &[&str]) {
    assert!(!pool.is_empty(), "pool '{}' is empty", name);
    let mut seen = HashSet::new();
    for w in pool {
        assert!(!w.trim().is_empty(), "blank entry in pool '{}'", name);
        assert_eq!(w.trim(), *w, "entry '{}' in pool '{}' has stray whitespace", w, name);
        assert!(seen.insert(*w), "duplicate '{}' in pool '{}'", w, name);
    }
}

#[test]
fn word_pools_are_clean() {
    assert_clean_pool("warm grounding", WARM_GROUNDING);
    assert_clean_pool("tiny hopes", TINY_HOPES);
    assert_clean_pool("playful silliness", PLAYFUL_SILLINESS);
    assert_clean_pool("random words", RANDOM_WORDS);
    assert_clean_pool("secret", SECRET);
}

#[test]
fn story_pools_are_clean() {
    for cat in StoryCategory::ALL {
        assert_clean_pool(cat.label(), cat.pool());
    }
}

#[test]
fn pool_weights_ascend_to_one() {
    let mut last = 0.0;
    for (threshold, pool) in WEIGHTED_POOLS {
        assert!(threshold > last, "threshold {} does not ascend", threshold);
        assert!(!pool.is_empty());
        last = threshold;
    }
    assert_eq!(last, 1.0);
}

#[test]
fn drawn_words_come_from_some_pool() {
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..500 {
        let w = choose_word(&mut rng);
        assert!(
            WEIGHTED_POOLS.iter().any(|(_, pool)| pool.contains(&w)),
            "'{}' is not in any pool",
            w
        );
    }
}

#[test]
fn drawn_fragments_match_their_category() {
    let mut rng = fastrand::Rng::with_seed(11);
    let mut seen = HashSet::new();
    for _ in 0..500 {
        let c = choose_story_fragment(&mut rng);
        let cat = c.category.expect("story fragments always carry a category");
        assert!(cat.pool().contains(&c.text));
        seen.insert(cat);
    }
    assert_eq!(seen.len(), StoryCategory::ALL.len());
}
