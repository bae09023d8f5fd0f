// DOM overlays, HUD text, and the summary selection panels.
// Every element except the canvas is optional; a page without it simply
// doesn't get that piece of UI.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, HtmlOptionElement,
    HtmlSelectElement,
};

use crate::config::Mode;
use crate::round::{Phase, format_clock};
use crate::summary::{CloudView, StoryView};

use super::with_app;

/// Registers `f` for `name` events on `target`; the closure lives for the page.
pub fn on<E, F>(target: &EventTarget, name: &str, mut f: F) -> Result<(), JsValue>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(move |evt: Event| {
        if let Ok(e) = evt.dyn_into::<E>() {
            f(e);
        }
    }) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub struct Hud {
    doc: Document,
    start_overlay: Option<Element>,
    end_overlay: Option<Element>,
    timer: Option<Element>,
    caught: Option<Element>,
    summary: Option<Element>,
    mode_pill: Option<Element>,
    back_play: Option<HtmlElement>,
    sound_btn: Option<Element>,
}

impl Hud {
    pub fn bind(doc: &Document) -> Self {
        let get = |id: &str| doc.get_element_by_id(id);
        Self {
            doc: doc.clone(),
            start_overlay: get("start-overlay"),
            end_overlay: get("end-overlay"),
            timer: get("timer"),
            caught: get("caught-count"),
            summary: get("summary"),
            mode_pill: get("mode-pill"),
            back_play: get("back-play-btn").and_then(|e| e.dyn_into().ok()),
            sound_btn: get("sound-btn"),
        }
    }

    /// Overlay visibility and the summary area for a newly entered phase.
    pub fn show_phase(&self, phase: Phase) {
        toggle_class(self.start_overlay.as_ref(), "visible", phase == Phase::Idle);
        toggle_class(self.end_overlay.as_ref(), "visible", phase == Phase::Summary);
        if let Some(btn) = &self.back_play {
            let display = if phase == Phase::Play { "block" } else { "none" };
            let _ = btn.style().set_property("display", display);
        }
        if phase != Phase::Summary {
            if let Some(s) = &self.summary {
                s.set_inner_html("");
            }
        }
    }

    pub fn update(&self, time_left: f64, caught: u32, mode: Mode, sound_on: bool) {
        set_text(self.timer.as_ref(), &format_clock(time_left));
        set_text(self.caught.as_ref(), &caught.to_string());
        set_text(self.mode_pill.as_ref(), mode.label());
        let sound = if sound_on { "On" } else { "Off" };
        set_text(self.sound_btn.as_ref(), &format!("Sound: {sound}"));
    }

    pub fn cloud_panel(&self, view: &CloudView) -> Result<(), JsValue> {
        let Some(summary) = &self.summary else {
            return Ok(());
        };
        summary.set_text_content(Some(&view.headline));
        if view.controls.is_empty() {
            return Ok(());
        }
        let panel = self.panel("Keep words")?;
        for control in &view.controls {
            let label = self.doc.create_element("label")?;
            label.set_class_name("selection-item");
            let input: HtmlInputElement = self.doc.create_element("input")?.dyn_into()?;
            input.set_type("checkbox");
            input.set_checked(control.kept);
            let word = control.word;
            let target = input.clone();
            on(&input, "change", move |_: Event| {
                let kept = target.checked();
                with_app(|app| app.game.set_word_kept(word, kept));
            })?;
            let text = self.doc.create_element("span")?;
            text.set_text_content(Some(&format!("{} ({})", control.word, control.count)));
            label.append_child(&input)?;
            label.append_child(&text)?;
            panel.append_child(&label)?;
        }
        summary.append_child(&panel)?;
        Ok(())
    }

    pub fn story_panel(&self, view: &StoryView) -> Result<(), JsValue> {
        let Some(summary) = &self.summary else {
            return Ok(());
        };
        summary.set_text_content(Some(&view.header));
        if view.selectors.is_empty() {
            return Ok(());
        }
        let panel = self.panel("You grabbed many! Pick one per line")?;
        for selector in &view.selectors {
            let wrapper = self.doc.create_element("div")?;
            wrapper.set_class_name("selection-item selection-select");
            let label = self.doc.create_element("div")?;
            label.set_text_content(Some(selector.category.label()));
            let select: HtmlSelectElement = self.doc.create_element("select")?.dyn_into()?;
            for (text, _count) in &selector.options {
                let opt = HtmlOptionElement::new_with_text_and_value(text, text)?;
                opt.set_selected(selector.chosen == Some(*text));
                select.append_child(&opt)?;
            }
            let category = selector.category;
            let target = select.clone();
            on(&select, "change", move |_: Event| {
                let value = target.value();
                with_app(|app| app.game.choose_fragment(category, &value));
            })?;
            wrapper.append_child(&label)?;
            wrapper.append_child(&select)?;
            panel.append_child(&wrapper)?;
        }
        summary.append_child(&panel)?;
        Ok(())
    }

    fn panel(&self, title: &str) -> Result<Element, JsValue> {
        let panel = self.doc.create_element("div")?;
        panel.set_class_name("selection-panel");
        let heading = self.doc.create_element("div")?;
        heading.set_class_name("selection-title");
        heading.set_text_content(Some(title));
        panel.append_child(&heading)?;
        Ok(panel)
    }
}

fn set_text(el: Option<&Element>, text: &str) {
    if let Some(el) = el {
        if el.text_content().as_deref() != Some(text) {
            el.set_text_content(Some(text));
        }
    }
}

fn toggle_class(el: Option<&Element>, class: &str, on: bool) {
    if let Some(el) = el {
        let list = el.class_list();
        let _ = if on {
            list.add_1(class)
        } else {
            list.remove_1(class)
        };
    }
}

/// Input elements matching a CSS selector, e.g. the mode radios.
pub fn inputs(doc: &Document, selector: &str) -> Vec<HtmlInputElement> {
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlInputElement>().ok())
        .collect()
}
