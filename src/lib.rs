//! Pounce Words core crate.
//!
//! A cat walks, jumps, and pounces under falling words for a timed round,
//! then the catch becomes either a word cloud or a five-line story. The
//! gameplay core (`round`, `summary`, `content`, `config`, `ambient`) is plain
//! Rust with no browser types; `web` is the canvas and DOM shell around it.

use wasm_bindgen::prelude::*;

pub mod ambient;
pub mod clock;
pub mod config;
pub mod content;
pub mod input;
pub mod round;
pub mod summary;
mod web;

pub use config::{Mode, RoundConfig};
pub use content::{Catchable, StoryCategory};
pub use round::{Game, Phase, Playfield, SoundCue};
pub use summary::{CloudView, StoryView, SummaryView};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // a second init (e.g. under wasm-bindgen-test) keeps the first logger
    #[cfg(target_arch = "wasm32")]
    let _ = console_log::init_with_level(log::Level::Info);
}

// -----------------------------------------------------------------------------
// Page entrypoints
// -----------------------------------------------------------------------------

/// Mounts the game on `#game-canvas` (created if absent) with default settings.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    web::start(RoundConfig::default())
}

/// Like `start_game`, with settings from a JSON object such as
/// `{"duration_secs": 60, "mode": "cloud"}`. Bad input falls back to defaults.
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    web::start(RoundConfig::from_json(json))
}

#[wasm_bindgen]
pub fn start_round() {
    web::act(|game| {
        game.start(web::now());
    });
}

#[wasm_bindgen]
pub fn restart_round() {
    web::act(|game| {
        game.restart_round(web::now());
    });
}

#[wasm_bindgen]
pub fn return_to_start() {
    web::act(|game| {
        game.return_to_idle();
    });
}

#[wasm_bindgen]
pub fn toggle_sound() {
    web::act(Game::toggle_sound);
}

#[wasm_bindgen]
pub fn set_mode(mode: &str) {
    web::act(|game| game.set_mode_str(mode));
}

#[wasm_bindgen]
pub fn set_duration(seconds: &str) {
    web::act(|game| game.set_duration_str(seconds));
}
