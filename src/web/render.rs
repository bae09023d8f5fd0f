// Canvas drawing for the play field and the summary screens.

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::round::cat::{AnimState, Cat};
use crate::round::{Playfield, RoundContext};
use crate::summary::{CloudView, StoryView};

const BACKGROUND_SRC: &str = "background.png";
const CAT_HEIGHT: f64 = 180.0;
const SUMMARY_FONT: &str = "'Inter', system-ui, sans-serif";

fn image(src: &str) -> Result<HtmlImageElement, JsValue> {
    let img = HtmlImageElement::new()?;
    img.set_src(src);
    Ok(img)
}

fn ready(img: &HtmlImageElement) -> bool {
    img.complete() && img.natural_width() > 0
}

pub struct Sprites {
    stand: HtmlImageElement,
    sleep: HtmlImageElement,
    walk: [HtmlImageElement; 2],
    jump: HtmlImageElement,
    grab: HtmlImageElement,
}

pub struct Assets {
    background: HtmlImageElement,
    sprites: Sprites,
}

impl Assets {
    pub fn load() -> Result<Self, JsValue> {
        Ok(Self {
            background: image(BACKGROUND_SRC)?,
            sprites: Sprites {
                stand: image("sprites/stand.png")?,
                sleep: image("sprites/sleep.png")?,
                walk: [
                    image("sprites/walk-right-1.png")?,
                    image("sprites/walk-right-2.png")?,
                ],
                jump: image("sprites/jump-up.png")?,
                grab: image("sprites/jump-up.png")?,
            },
        })
    }

    fn sprite_for(&self, cat: &Cat) -> &HtmlImageElement {
        let s = &self.sprites;
        match cat.state {
            AnimState::Pounce => &s.grab,
            AnimState::Jump => &s.jump,
            AnimState::Sleep if ready(&s.sleep) => &s.sleep,
            AnimState::Walk => &s.walk[cat.anim_frame as usize % s.walk.len()],
            _ => &s.stand,
        }
    }
}

fn draw_background(ctx: &CanvasRenderingContext2d, assets: &Assets, field: &Playfield) {
    if ready(&assets.background) {
        let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
            &assets.background,
            0.0,
            0.0,
            field.width,
            field.height,
        );
    } else {
        ctx.set_fill_style_str("#dfe7ef");
        ctx.fill_rect(0.0, 0.0, field.width, field.height);
    }
}

fn draw_cat(ctx: &CanvasRenderingContext2d, assets: &Assets, cat: &Cat) -> Result<(), JsValue> {
    let img = assets.sprite_for(cat);
    if !ready(img) {
        ctx.set_fill_style_str("#222");
        ctx.fill_rect(cat.x - 30.0, cat.y - 60.0, 60.0, 60.0);
        return Ok(());
    }
    let (target_h, y_offset) = match cat.state {
        AnimState::Jump => (CAT_HEIGHT, 30.0),
        AnimState::Pounce => (CAT_HEIGHT, 2.0),
        AnimState::Sleep => (CAT_HEIGHT * 0.65, 40.0),
        AnimState::Idle | AnimState::Walk => (CAT_HEIGHT * 0.8, 30.0),
    };
    let scale = target_h / img.natural_height() as f64;
    let w = img.natural_width() as f64 * scale;
    let h = img.natural_height() as f64 * scale;
    ctx.save();
    ctx.translate(cat.x, cat.y)?;
    ctx.scale(cat.facing, 1.0)?;
    let drawn = ctx.draw_image_with_html_image_element_and_dw_and_dh(
        img,
        -w / 2.0,
        -h + 10.0 + y_offset,
        w,
        h,
    );
    ctx.restore();
    drawn
}

fn centered_text(ctx: &CanvasRenderingContext2d) {
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
}

pub fn draw_play(
    ctx: &CanvasRenderingContext2d,
    assets: &Assets,
    field: &Playfield,
    round: &RoundContext,
) -> Result<(), JsValue> {
    draw_background(ctx, assets, field);
    centered_text(ctx);
    for w in &round.words {
        ctx.set_font(&w.style.css_font());
        ctx.set_fill_style_str(w.style.color);
        ctx.fill_text(w.text, w.x, w.y)?;
    }
    draw_cat(ctx, assets, &round.cat)
}

/// Text width at `size` px in the summary font; a rough estimate if the
/// context cannot measure.
pub fn measure(ctx: &CanvasRenderingContext2d, text: &str, size: f64) -> f64 {
    ctx.set_font(&format!("{size}px {SUMMARY_FONT}"));
    ctx.measure_text(text)
        .map(|m| m.width())
        .unwrap_or(text.chars().count() as f64 * size * 0.5)
}

pub fn draw_cloud(
    ctx: &CanvasRenderingContext2d,
    field: &Playfield,
    view: &CloudView,
) -> Result<(), JsValue> {
    ctx.set_fill_style_str("#f7f7f7");
    ctx.fill_rect(0.0, 0.0, field.width, field.height);
    centered_text(ctx);
    for p in &view.placements {
        ctx.set_font(&format!("{}px {SUMMARY_FONT}", p.size));
        ctx.set_fill_style_str(p.color);
        ctx.fill_text(p.word, p.x, p.y)?;
    }
    Ok(())
}

pub fn draw_story(
    ctx: &CanvasRenderingContext2d,
    field: &Playfield,
    view: &StoryView,
) -> Result<(), JsValue> {
    ctx.set_fill_style_str("#f7f3ec");
    ctx.fill_rect(0.0, 0.0, field.width, field.height);
    centered_text(ctx);
    ctx.set_fill_style_str("#1c2b3a");
    ctx.set_font(&format!("32px {SUMMARY_FONT}"));
    let start_y = field.height * 0.35;
    for (i, line) in view.lines.iter().enumerate() {
        ctx.fill_text(line, field.width * 0.5, start_y + i as f64 * 64.0)?;
    }
    Ok(())
}
