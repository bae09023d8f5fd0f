// Integration tests (native) for the `pounce-words` crate.
// These drive the public `Game` API without any browser types, so they run
// under `cargo test` on the host.

use pounce_words::input::Key;
use pounce_words::round::cat::{AnimState, POUNCE_SECS};
use pounce_words::round::format_clock;
use pounce_words::{
    Catchable, CloudView, Game, Mode, Phase, Playfield, RoundConfig, SoundCue, StoryCategory,
    StoryView, SummaryView,
};

const FRAME_MS: f64 = 1000.0 / 60.0;

fn game(mode: Mode, duration_secs: f64) -> Game {
    let config = RoundConfig {
        duration_secs,
        mode,
    };
    Game::new(
        Playfield::default(),
        config,
        fastrand::Rng::with_seed(42),
        0.0,
    )
}

fn measure(text: &str, size: f64) -> f64 {
    text.chars().count() as f64 * size * 0.55
}

fn word(text: &'static str) -> Catchable {
    Catchable {
        text,
        category: None,
    }
}

fn fragment(text: &'static str, category: StoryCategory) -> Catchable {
    Catchable {
        text,
        category: Some(category),
    }
}

fn cloud(view: SummaryView) -> CloudView {
    match view {
        SummaryView::Cloud(c) => c,
        SummaryView::Story(_) => panic!("expected a cloud summary"),
    }
}

fn story(view: SummaryView) -> StoryView {
    match view {
        SummaryView::Story(s) => s,
        SummaryView::Cloud(_) => panic!("expected a story summary"),
    }
}

/// Runs frames at 60 Hz until the phase changes or `max_frames` pass.
fn run_frames(g: &mut Game, start_ms: f64, max_frames: usize) -> f64 {
    let mut now = start_ms;
    for _ in 0..max_frames {
        now += FRAME_MS;
        if g.frame(now) != Phase::Play {
            break;
        }
    }
    now
}

#[test]
fn story_with_time_and_mood_is_a_single_line() {
    let mut g = game(Mode::Story, 30.0);
    assert!(g.start(0.0));
    g.record_catch(fragment("tonight", StoryCategory::Time));
    g.record_catch(fragment("the room is soft", StoryCategory::Mood));
    g.finish_round();
    assert_eq!(g.phase(), Phase::Summary);

    let view = story(g.compose_summary(measure));
    assert_eq!(view.lines, vec!["tonight, the room is soft."]);
    assert!(view.selectors.is_empty());
}

#[test]
fn story_without_fragments_shows_message() {
    let mut g = game(Mode::Story, 30.0);
    g.start(0.0);
    g.finish_round();
    let view = story(g.compose_summary(measure));
    assert!(view.lines.is_empty());
    assert_eq!(view.header, pounce_words::summary::story::NO_FRAGMENTS_MESSAGE);
}

#[test]
fn story_optional_lines_follow_catches() {
    let mut g = game(Mode::Story, 30.0);
    g.start(0.0);
    g.record_catch(fragment("today", StoryCategory::Time));
    g.record_catch(fragment("it feels foggy", StoryCategory::Mood));
    g.record_catch(fragment("still here", StoryCategory::Myself));
    g.record_catch(fragment("a small yes", StoryCategory::Desire));
    g.finish_round();
    let view = story(g.compose_summary(measure));
    assert_eq!(
        view.lines,
        vec!["today, it feels foggy.", "I'm still here.", "I want a small yes."]
    );
}

#[test]
fn cloud_defaults_keep_every_caught_word() {
    let mut g = game(Mode::Cloud, 30.0);
    g.start(0.0);
    for _ in 0..3 {
        g.record_catch(word("matcha"));
    }
    g.record_catch(word("sea"));
    g.finish_round();

    let view = cloud(g.compose_summary(measure));
    assert_eq!(view.entries, vec![("matcha", 3), ("sea", 1)]);
    assert_eq!(view.headline, "You caught 4 words.");
    let keep = g.summary().keep_set().map(|k| k.iter().copied().collect::<Vec<_>>());
    assert_eq!(keep, Some(vec!["matcha", "sea"]));
    // every laid-out word is one of the kept entries
    assert!(
        view.placements
            .iter()
            .all(|p| p.word == "matcha" || p.word == "sea")
    );
}

#[test]
fn cloud_deselect_then_reselect() {
    let mut g = game(Mode::Cloud, 30.0);
    g.start(0.0);
    g.record_catch(word("matcha"));
    g.record_catch(word("sea"));
    g.finish_round();
    g.compose_summary(measure);

    assert!(g.set_word_kept("sea", false));
    assert!(g.summary_stale());
    let view = cloud(g.compose_summary(measure));
    assert_eq!(view.entries, vec![("matcha", 1)]);
    assert_eq!(view.controls.len(), 2);

    assert!(g.set_word_kept("sea", true));
    let view = cloud(g.compose_summary(measure));
    assert_eq!(view.entries.len(), 2);
}

#[test]
fn composing_twice_is_stable() {
    let mut g = game(Mode::Story, 30.0);
    g.start(0.0);
    g.record_catch(fragment("lately", StoryCategory::Time));
    g.finish_round();
    let first = story(g.compose_summary(measure));
    assert!(!g.summary_stale());
    let second = story(g.compose_summary(measure));
    assert_eq!(first, second);
}

#[test]
fn summary_edits_are_ignored_outside_summary() {
    let mut g = game(Mode::Cloud, 30.0);
    g.start(0.0);
    g.record_catch(word("sea"));
    assert!(!g.set_word_kept("sea", false));
    assert!(!g.choose_fragment(StoryCategory::Time, "today"));
}

#[test]
fn time_left_never_goes_negative() {
    let mut g = game(Mode::Cloud, 15.0);
    g.start(0.0);
    // one huge gap is clamped by the frame clock
    g.frame(16.0);
    g.frame(60_000.0);
    assert!(g.round().time_left > 0.0);

    for _ in 0..50 {
        g.tick(1.0, 0.0);
        assert!(g.round().time_left >= 0.0);
    }
    assert_eq!(g.round().time_left, 0.0);
    assert_eq!(g.phase(), Phase::Summary);
    assert_eq!(format_clock(g.round().time_left), "00:00");
}

#[test]
fn round_ends_on_its_own() {
    let mut g = game(Mode::Cloud, 1.0);
    g.start(0.0);
    run_frames(&mut g, 0.0, 200);
    assert_eq!(g.phase(), Phase::Summary);
}

#[test]
fn cat_stays_inside_the_walk_band() {
    let field = Playfield::default();
    let mut g = game(Mode::Cloud, 90.0);
    g.start(0.0);
    g.key_down(Key::Right, 0.0);
    let mut now = 0.0;
    for _ in 0..600 {
        now += FRAME_MS;
        g.frame(now);
        let cat = &g.round().cat;
        assert!(cat.x >= field.left_bound() && cat.x <= field.right_bound());
        assert!(cat.y <= field.ground_y());
    }
    assert_eq!(g.round().cat.x, field.right_bound());

    g.key_up(Key::Right);
    g.key_down(Key::Left, now);
    for _ in 0..600 {
        now += FRAME_MS;
        g.frame(now);
    }
    assert_eq!(g.round().cat.x, field.left_bound());
}

#[test]
fn pounce_lasts_its_window() {
    let mut g = game(Mode::Cloud, 30.0);
    g.start(0.0);
    g.frame(0.0);
    g.key_down(Key::Pounce, 0.0);
    assert!(g.round().cat.is_pouncing());
    g.tick(POUNCE_SECS / 2.0, 10.0);
    assert_eq!(g.round().cat.state, AnimState::Pounce);
    g.tick(POUNCE_SECS, 20.0);
    assert!(!g.round().cat.is_pouncing());
    assert_ne!(g.round().cat.state, AnimState::Pounce);
}

#[test]
fn jump_only_from_the_ground() {
    let mut g = game(Mode::Cloud, 30.0);
    g.start(0.0);
    g.key_down(Key::Jump, 0.0);
    g.tick(0.016, 16.0);
    let airborne_vy = g.round().cat.vy;
    assert!(airborne_vy < 0.0);
    assert!(!g.round().cat.on_ground);
    // a second press mid-air changes nothing
    g.key_down(Key::Jump, 16.0);
    assert_eq!(g.round().cat.vy, airborne_vy);
}

#[test]
fn actions_do_nothing_before_the_round() {
    let mut g = game(Mode::Cloud, 30.0);
    g.key_down(Key::Pounce, 0.0);
    g.pointer_down(0.0);
    assert!(!g.round().cat.is_pouncing());
    assert_eq!(g.phase(), Phase::Idle);
}

#[test]
fn escape_returns_to_start_from_play_and_summary() {
    let mut g = game(Mode::Cloud, 30.0);
    g.start(0.0);
    g.key_down(Key::Cancel, 0.0);
    assert_eq!(g.phase(), Phase::Idle);

    g.start(0.0);
    g.finish_round();
    g.key_down(Key::Cancel, 0.0);
    assert_eq!(g.phase(), Phase::Idle);
    assert_eq!(g.caught_total(), 0);
}

#[test]
fn restart_gives_a_fresh_round() {
    let mut g = game(Mode::Cloud, 30.0);
    g.start(0.0);
    g.record_catch(word("sea"));
    g.tick(2.0, 2_000.0);
    assert!(g.restart_round(2_000.0));
    assert_eq!(g.caught_total(), 0);
    assert_eq!(g.round().time_left, 30.0);
    assert!(g.round().words.is_empty());
    assert!(!g.start(2_000.0));
}

#[test]
fn config_is_captured_at_round_start() {
    let mut g = game(Mode::Cloud, 30.0);
    g.start(0.0);
    g.set_mode_str("story");
    g.set_duration_str("60");
    assert_eq!(g.round().mode, Mode::Cloud);
    assert_eq!(g.round().time_left, 30.0);
    assert_eq!(g.display_mode(), Mode::Cloud);

    g.return_to_idle();
    assert_eq!(g.display_mode(), Mode::Story);
    g.start(0.0);
    assert_eq!(g.round().mode, Mode::Story);
    assert_eq!(g.round().time_left, 60.0);
}

#[test]
fn spawned_words_follow_the_round_mode() {
    let mut g = game(Mode::Story, 30.0);
    g.start(0.0);
    run_frames(&mut g, 0.0, 180);
    assert!(!g.round().words.is_empty());
    assert!(g.round().words.iter().all(|w| w.category.is_some()));

    let mut g = game(Mode::Cloud, 30.0);
    g.start(0.0);
    run_frames(&mut g, 0.0, 180);
    assert!(!g.round().words.is_empty());
    assert!(g.round().words.iter().all(|w| w.category.is_none()));
}

#[test]
fn sound_toggle_queues_music_and_meow_schedule() {
    let mut g = game(Mode::Cloud, 30.0);
    assert!(g.take_cues().is_empty());
    g.start(0.0);
    assert_eq!(g.take_cues(), vec![SoundCue::MusicOn]);
    let ticket = g.take_ambient_ticket();
    assert!(ticket.is_some());

    g.toggle_sound();
    assert!(!g.sound_on());
    assert_eq!(g.take_cues(), vec![SoundCue::MusicOff]);
    assert!(g.take_ambient_ticket().is_none());

    // the timer armed before muting is stale now
    if let Some(t) = ticket {
        g.fire_ambient(t.generation);
    }
    assert!(g.take_cues().is_empty());
}

#[test]
fn ambient_meow_fires_and_rearms_while_playing() {
    let mut g = game(Mode::Cloud, 30.0);
    g.start(0.0);
    g.take_cues();
    let ticket = g.take_ambient_ticket().map(|t| t.generation);
    if let Some(generation) = ticket {
        g.fire_ambient(generation);
    }
    assert_eq!(g.take_cues(), vec![SoundCue::Meow]);
    assert!(g.take_ambient_ticket().is_some());

    g.finish_round();
    if let Some(generation) = ticket {
        g.fire_ambient(generation);
    }
    assert!(g.take_cues().is_empty());
}

#[test]
fn words_past_the_removal_line_are_dropped() {
    let field = Playfield::default();
    let mut g = game(Mode::Cloud, 30.0);
    g.start(0.0);
    let mut rng = fastrand::Rng::with_seed(3);
    let mut falling = pounce_words::round::word::Word::spawn(word("sinking"), &field, &mut rng);
    falling.y = field.removal_y() - 1.0;
    falling.vx = 0.0;
    falling.vy = 60.0;
    g.round_mut().words.push(falling);

    // 0.6 px down: still on screen
    g.tick(0.01, 10.0);
    assert!(g.round().words.iter().any(|w| w.text == "sinking"));
    // 3 px more: below the line
    g.tick(0.05, 60.0);
    assert!(g.round().words.iter().all(|w| w.text != "sinking"));
    assert_eq!(g.caught_total(), 0);
}

#[test]
fn cat_falls_asleep_and_any_key_wakes_it() {
    let mut g = game(Mode::Cloud, 30.0);
    g.start(0.0);
    let now = run_frames(&mut g, 0.0, 200);
    assert!(now > 3_000.0);
    assert_eq!(g.round().cat.state, AnimState::Sleep);

    g.key_down(Key::Other, now);
    g.frame(now + FRAME_MS);
    assert_eq!(g.round().cat.state, AnimState::Idle);
}
