//! Round state machine and the simulation it drives.
//!
//! `Game` owns everything a session needs: configuration, the current phase,
//! the per-round context (cat, falling words, tallies, spawner, timer), input
//! state, summary selections, and the sound schedule. There is no ambient
//! global state here; the browser shell keeps a single `Game` in its own cell
//! and tests build as many as they like.
//!
//! Phases: `Idle -> Play -> Summary -> Idle`, with `Play -> Idle` on cancel and
//! `Play -> Play` on restart.

pub mod cat;
pub mod catch;
pub mod spawner;
pub mod word;

use crate::ambient::{AmbientTicket, AmbientTimer, Fire};
use crate::clock::FrameClock;
use crate::config::{Mode, RoundConfig};
use crate::content::{Catchable, StoryCategory, choose_story_fragment, choose_word};
use crate::input::{Action, InputState, Key};
use crate::summary::{SummaryComposer, SummaryView};

use cat::Cat;
use catch::{CatchZone, Tallies, resolve_catches};
use spawner::Spawner;
use word::Word;

/// Fixed-size playfield in canvas units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Playfield {
    pub width: f64,
    pub height: f64,
    /// Horizontal inset for the cat's walk band and word spawn band.
    pub inset: f64,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 600.0,
            inset: 120.0,
        }
    }
}

impl Playfield {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn ground_y(&self) -> f64 {
        self.height - 100.0
    }

    pub fn left_bound(&self) -> f64 {
        self.inset
    }

    pub fn right_bound(&self) -> f64 {
        self.width - self.inset
    }

    /// Words below this line are dropped.
    pub fn removal_y(&self) -> f64 {
        self.height - 80.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Play,
    Summary,
}

/// Audio side effects for the host to perform. Failures on the host side are
/// not reported back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    MusicOn,
    MusicOff,
    Meow,
}

/// State that lives exactly as long as one round.
#[derive(Clone, Debug)]
pub struct RoundContext {
    pub cat: Cat,
    pub words: Vec<Word>,
    pub tallies: Tallies,
    pub spawner: Spawner,
    pub time_left: f64,
    /// Mode captured at round start; later config changes wait for the next round.
    pub mode: Mode,
}

impl RoundContext {
    pub fn new(field: &Playfield, config: &RoundConfig) -> Self {
        Self {
            cat: Cat::new(field),
            words: Vec::new(),
            tallies: Tallies::default(),
            spawner: Spawner::default(),
            time_left: config.duration_secs,
            mode: config.mode,
        }
    }

    fn spawn_content(&self, rng: &mut fastrand::Rng) -> Catchable {
        match self.mode {
            Mode::Story => choose_story_fragment(rng),
            Mode::Cloud => Catchable {
                text: choose_word(rng),
                category: None,
            },
        }
    }

    /// Moves the cat, spawns, integrates words, resolves catches, then drops
    /// caught and fallen words.
    fn simulate(
        &mut self,
        field: &Playfield,
        input: &InputState,
        idle_secs: f64,
        dt: f64,
        rng: &mut fastrand::Rng,
    ) {
        self.cat.step(field, input.horizontal(), idle_secs, dt);

        if self.spawner.tick(dt, rng) {
            let content = self.spawn_content(rng);
            self.words.push(Word::spawn(content, field, rng));
        }

        for w in &mut self.words {
            w.step(dt);
        }
        resolve_catches(CatchZone::around(&self.cat), &mut self.words, &mut self.tallies);
        self.words.retain(|w| !w.caught && !w.fell_out(field));
    }
}

pub struct Game {
    field: Playfield,
    config: RoundConfig,
    phase: Phase,
    round: RoundContext,
    input: InputState,
    summary: SummaryComposer,
    sound_on: bool,
    ambient: AmbientTimer,
    pending_ambient: Option<AmbientTicket>,
    cues: Vec<SoundCue>,
    clock: FrameClock,
    rng: fastrand::Rng,
}

impl Game {
    pub fn new(field: Playfield, config: RoundConfig, rng: fastrand::Rng, now_ms: f64) -> Self {
        Self {
            field,
            config,
            phase: Phase::Idle,
            round: RoundContext::new(&field, &config),
            input: InputState::new(now_ms),
            summary: SummaryComposer::new(),
            sound_on: true,
            ambient: AmbientTimer::default(),
            pending_ambient: None,
            cues: Vec::new(),
            clock: FrameClock::new(),
            rng,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn field(&self) -> &Playfield {
        &self.field
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    pub fn round(&self) -> &RoundContext {
        &self.round
    }

    pub fn sound_on(&self) -> bool {
        self.sound_on
    }

    pub fn caught_total(&self) -> u32 {
        self.round.tallies.total()
    }

    /// Mode shown on the HUD: the running round's while playing, the
    /// configured one otherwise.
    pub fn display_mode(&self) -> Mode {
        match self.phase {
            Phase::Play | Phase::Summary => self.round.mode,
            Phase::Idle => self.config.mode,
        }
    }

    fn reset_round(&mut self) {
        self.round = RoundContext::new(&self.field, &self.config);
        self.summary = SummaryComposer::new();
        self.input.left = false;
        self.input.right = false;
        self.clock.reset();
    }

    fn begin_play(&mut self, now_ms: f64) {
        self.reset_round();
        self.phase = Phase::Play;
        self.input.touch(now_ms);
        self.apply_sound_state();
        log::info!(
            "round started: {}s, {} mode",
            self.round.time_left,
            self.round.mode.label()
        );
    }

    /// Idle -> Play.
    pub fn start(&mut self, now_ms: f64) -> bool {
        if self.phase != Phase::Idle {
            log::debug!("start ignored in {:?}", self.phase);
            return false;
        }
        self.begin_play(now_ms);
        true
    }

    /// Play -> Play with a fresh round.
    pub fn restart_round(&mut self, now_ms: f64) -> bool {
        if self.phase != Phase::Play {
            log::debug!("restart ignored in {:?}", self.phase);
            return false;
        }
        self.begin_play(now_ms);
        true
    }

    /// Play or Summary -> Idle.
    pub fn return_to_idle(&mut self) -> bool {
        if self.phase == Phase::Idle {
            return false;
        }
        self.reset_round();
        self.phase = Phase::Idle;
        self.apply_sound_state();
        log::info!("back to start screen");
        true
    }

    fn end_round(&mut self) {
        self.phase = Phase::Summary;
        self.ambient.cancel();
        self.pending_ambient = None;
        log::info!(
            "round over: {} caught ({} story fragments)",
            self.round.tallies.total(),
            self.round.tallies.total_fragments()
        );
    }

    pub fn set_duration_str(&mut self, raw: &str) {
        self.config.set_duration_str(raw);
        if self.phase != Phase::Play {
            self.round.time_left = self.config.duration_secs;
        }
    }

    pub fn set_mode_str(&mut self, raw: &str) {
        self.config.set_mode_str(raw);
    }

    pub fn set_config(&mut self, config: RoundConfig) {
        self.config = config;
        if self.phase == Phase::Idle {
            self.round.time_left = config.duration_secs;
        }
    }

    pub fn toggle_sound(&mut self) {
        self.sound_on = !self.sound_on;
        self.apply_sound_state();
    }

    fn apply_sound_state(&mut self) {
        if self.sound_on {
            self.cues.push(SoundCue::MusicOn);
        } else {
            self.cues.push(SoundCue::MusicOff);
        }
        self.pending_ambient =
            self.ambient
                .schedule(self.sound_on, self.phase == Phase::Play, &mut self.rng);
    }

    /// Audio cues queued since the last call.
    pub fn take_cues(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.cues)
    }

    /// Timer the host should arm, if the schedule changed since the last call.
    pub fn take_ambient_ticket(&mut self) -> Option<AmbientTicket> {
        self.pending_ambient.take()
    }

    /// Host timer callback. Queues a meow and the next ticket when still live.
    pub fn fire_ambient(&mut self, generation: u64) {
        let playing = self.phase == Phase::Play;
        if let Fire::Fired { meow, next } =
            self.ambient
                .fire(generation, self.sound_on, playing, &mut self.rng)
        {
            if meow {
                self.cues.push(SoundCue::Meow);
            }
            self.pending_ambient = next;
        }
    }

    pub fn key_down(&mut self, key: Key, now_ms: f64) {
        self.input.set_held(key, true);
        if let Some(action) = key.action() {
            self.act(action, now_ms);
        }
        self.input.touch(now_ms);
    }

    pub fn key_up(&mut self, key: Key) {
        self.input.set_held(key, false);
    }

    pub fn pointer_down(&mut self, now_ms: f64) {
        self.act(Action::Pounce, now_ms);
        self.input.touch(now_ms);
    }

    pub fn act(&mut self, action: Action, now_ms: f64) {
        match action {
            Action::Cancel => {
                self.return_to_idle();
            }
            Action::Jump if self.phase == Phase::Play => {
                if self.round.cat.jump() {
                    self.input.touch(now_ms);
                }
            }
            Action::Pounce if self.phase == Phase::Play => {
                self.round.cat.pounce();
                self.input.touch(now_ms);
            }
            _ => {}
        }
    }

    /// One play-phase step. The countdown runs first; the tick that reaches
    /// zero ends the round without moving anything.
    pub fn tick(&mut self, dt: f64, now_ms: f64) {
        if self.phase != Phase::Play {
            return;
        }
        let dt = dt.max(0.0);
        self.round.time_left = (self.round.time_left - dt).max(0.0);
        if self.round.time_left <= 0.0 {
            self.end_round();
            return;
        }
        let idle = self.input.idle_secs(now_ms);
        self.round
            .simulate(&self.field, &self.input, idle, dt, &mut self.rng);
    }

    /// Per-frame entry: converts the timestamp to a clamped delta and steps
    /// the simulation. Returns the phase after the step.
    pub fn frame(&mut self, now_ms: f64) -> Phase {
        let dt = self.clock.delta(now_ms);
        self.tick(dt, now_ms);
        self.phase
    }

    /// True while in summary and the view needs (re)composing.
    pub fn summary_stale(&self) -> bool {
        self.phase == Phase::Summary && self.summary.is_stale()
    }

    pub fn compose_summary(&mut self, measure: impl FnMut(&str, f64) -> f64) -> SummaryView {
        self.summary.compose(
            self.round.mode,
            &self.round.tallies,
            &self.field,
            measure,
            &mut self.rng,
        )
    }

    pub fn summary(&self) -> &SummaryComposer {
        &self.summary
    }

    pub fn set_word_kept(&mut self, word: &str, kept: bool) -> bool {
        self.phase == Phase::Summary && self.summary.set_kept(&self.round.tallies, word, kept)
    }

    pub fn toggle_word(&mut self, word: &str) -> bool {
        self.phase == Phase::Summary && self.summary.toggle_word(&self.round.tallies, word)
    }

    pub fn choose_fragment(&mut self, category: StoryCategory, text: &str) -> bool {
        self.phase == Phase::Summary
            && self
                .summary
                .choose_fragment(&self.round.tallies, category, text, &mut self.rng)
    }

    /// Test and debug hook: records a catch as if the cat had pounced on it.
    pub fn record_catch(&mut self, content: Catchable) {
        self.round.tallies.record(content.text, content.category);
    }

    /// Test and debug hook: ends the round immediately.
    pub fn finish_round(&mut self) {
        if self.phase == Phase::Play {
            self.round.time_left = 0.0;
            self.end_round();
        }
    }

    pub fn round_mut(&mut self) -> &mut RoundContext {
        &mut self.round
    }
}

/// `MM:SS`, floored.
pub fn format_clock(secs: f64) -> String {
    let whole = secs.max(0.0).floor() as u64;
    format!("{:02}:{:02}", whole / 60, whole % 60)
}
