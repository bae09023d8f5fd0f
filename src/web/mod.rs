//! Browser shell: owns the single live `Game`, drives it from
//! `requestAnimationFrame`, and wires DOM input, canvas drawing, and audio.
//!
//! All mutation happens on the page's one thread, either inside the frame
//! callback or inside an input handler, never both at once.

mod audio;
mod dom;
mod render;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlInputElement, KeyboardEvent, window};

use crate::ambient::AmbientTicket;
use crate::config::RoundConfig;
use crate::input::Key;
use crate::round::{Game, Phase, Playfield};
use crate::summary::SummaryView;

use audio::Audio;
use dom::{Hud, inputs, on};
use render::Assets;

const CANVAS_ID: &str = "game-canvas";

pub(crate) struct App {
    pub(crate) game: Game,
    ctx: CanvasRenderingContext2d,
    assets: Assets,
    audio: Audio,
    hud: Hud,
    shown_phase: Option<Phase>,
    ambient_handle: Option<i32>,
    rng: fastrand::Rng,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// Runs `f` against the live app. Returns `None` before `start_game` or when
/// the app is already borrowed further up the stack.
pub(crate) fn with_app<R>(f: impl FnOnce(&mut App) -> R) -> Option<R> {
    APP.with(|cell| {
        let mut guard = cell.try_borrow_mut().ok()?;
        let app = guard.as_mut()?;
        Some(f(app))
    })
}

pub(crate) fn now() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Seeds from the host's crypto source, falling back to the clock.
fn seeded_rng() -> fastrand::Rng {
    let mut seed = [0u8; 8];
    match getrandom::getrandom(&mut seed) {
        Ok(()) => fastrand::Rng::with_seed(u64::from_le_bytes(seed)),
        Err(e) => {
            log::warn!("getrandom unavailable ({e}); seeding from the clock");
            fastrand::Rng::with_seed(js_sys::Date::now().to_bits() ^ now().to_bits())
        }
    }
}

fn canvas() -> Result<HtmlCanvasElement, JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    if let Some(el) = doc.get_element_by_id(CANVAS_ID) {
        return el.dyn_into().map_err(JsValue::from);
    }
    let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
    c.set_id(CANVAS_ID);
    let field = Playfield::default();
    c.set_width(field.width as u32);
    c.set_height(field.height as u32);
    doc.body()
        .ok_or_else(|| JsValue::from_str("no body"))?
        .append_child(&c)?;
    Ok(c)
}

pub fn start(config: RoundConfig) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = canvas()?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    let field = Playfield::new(canvas.width() as f64, canvas.height() as f64);
    let app = App {
        game: Game::new(field, config, seeded_rng(), now()),
        ctx,
        assets: Assets::load()?,
        audio: Audio::load()?,
        hud: Hud::bind(&doc),
        shown_phase: None,
        ambient_handle: None,
        rng: seeded_rng(),
    };
    APP.with(|cell| cell.replace(Some(app)));

    bind_inputs(&doc, &canvas)?;
    start_loop();
    log::info!("pounce-words: initialized ({}x{})", field.width, field.height);
    Ok(())
}

fn bind_inputs(doc: &web_sys::Document, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;

    on(&win, "keydown", |evt: KeyboardEvent| {
        let key = Key::from_code(&evt.code());
        if key.action().is_some() {
            evt.prevent_default();
        }
        act(|game| game.key_down(key, now()));
    })?;
    on(&win, "keyup", |evt: KeyboardEvent| {
        let key = Key::from_code(&evt.code());
        act(|game| game.key_up(key));
    })?;
    on(canvas, "pointerdown", |_: web_sys::PointerEvent| {
        act(|game| game.pointer_down(now()));
    })?;

    button(doc, "start-btn", |g: &mut Game| {
        g.start(now());
    })?;
    button(doc, "restart-btn", |g: &mut Game| {
        g.return_to_idle();
    })?;
    button(doc, "back-play-btn", |g: &mut Game| {
        g.return_to_idle();
    })?;
    button(doc, "sound-btn", Game::toggle_sound)?;

    for radio in inputs(doc, "input[name=\"mode\"]") {
        let target = radio.clone();
        on(&radio, "change", move |_: web_sys::Event| {
            let value = target.value();
            act(|game| game.set_mode_str(&value));
        })?;
    }
    for radio in inputs(doc, "input[name=\"duration\"]") {
        let target: HtmlInputElement = radio.clone();
        on(&radio, "change", move |_: web_sys::Event| {
            let value = target.value();
            act(|game| game.set_duration_str(&value));
        })?;
    }
    Ok(())
}

fn button(doc: &web_sys::Document, id: &str, f: fn(&mut Game)) -> Result<(), JsValue> {
    if let Some(el) = doc.get_element_by_id(id) {
        on(&el, "click", move |_: web_sys::MouseEvent| act(f))?;
    }
    Ok(())
}

/// Applies an input-side mutation and flushes its effects right away.
pub(crate) fn act(f: impl FnOnce(&mut Game)) {
    with_app(|app| {
        f(&mut app.game);
        sync(app);
    });
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn start_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        with_app(|app| frame(app, ts));
        if let (Some(w), Some(cb)) = (window(), f.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let (Some(w), Some(cb)) = (window(), g.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

fn frame(app: &mut App, ts: f64) {
    match app.game.frame(ts) {
        Phase::Summary => {
            if app.game.summary_stale() {
                draw_summary(app);
            }
        }
        Phase::Idle | Phase::Play => {
            let field = *app.game.field();
            if let Err(e) = render::draw_play(&app.ctx, &app.assets, &field, app.game.round()) {
                log::warn!("draw failed: {e:?}");
            }
        }
    }
    sync(app);
}

fn draw_summary(app: &mut App) {
    let ctx = app.ctx.clone();
    let view = app
        .game
        .compose_summary(|text, size| render::measure(&ctx, text, size));
    let field = *app.game.field();
    let drawn = match &view {
        SummaryView::Cloud(cloud) => render::draw_cloud(&ctx, &field, cloud)
            .and_then(|_| app.hud.cloud_panel(cloud)),
        SummaryView::Story(story) => render::draw_story(&ctx, &field, story)
            .and_then(|_| app.hud.story_panel(story)),
    };
    if let Err(e) = drawn {
        log::warn!("summary draw failed: {e:?}");
    }
}

/// Pushes game-side changes out: overlays on phase change, HUD text, queued
/// sound cues, and the ambient timer.
fn sync(app: &mut App) {
    let phase = app.game.phase();
    if app.shown_phase != Some(phase) {
        app.hud.show_phase(phase);
        app.shown_phase = Some(phase);
    }
    app.hud.update(
        app.game.round().time_left,
        app.game.caught_total(),
        app.game.display_mode(),
        app.game.sound_on(),
    );
    for cue in app.game.take_cues() {
        app.audio.apply(cue, &mut app.rng);
    }
    if let Some(ticket) = app.game.take_ambient_ticket() {
        arm_ambient(app, ticket);
    } else if app.ambient_handle.is_some() && !ambient_live(app) {
        clear_ambient(app);
    }
}

fn ambient_live(app: &App) -> bool {
    app.game.sound_on() && app.game.phase() == Phase::Play
}

fn clear_ambient(app: &mut App) {
    if let (Some(handle), Some(w)) = (app.ambient_handle.take(), window()) {
        w.clear_timeout_with_handle(handle);
    }
}

fn arm_ambient(app: &mut App, ticket: AmbientTicket) {
    clear_ambient(app);
    let Some(w) = window() else {
        return;
    };
    let generation = ticket.generation;
    let callback = Closure::once_into_js(move || {
        act(|game| game.fire_ambient(generation));
    });
    match w.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        ticket.delay_ms as i32,
    ) {
        Ok(handle) => app.ambient_handle = Some(handle),
        Err(e) => log::warn!("ambient timer not armed: {e:?}"),
    }
}
