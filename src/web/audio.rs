// Background music and meow clips. Playback is fire-and-forget: a rejected
// `play()` promise (autoplay policy, missing file) is swallowed.

use wasm_bindgen::prelude::*;
use web_sys::HtmlAudioElement;

use crate::round::SoundCue;

const MUSIC_SRC: &str = "sounds/piano-background.mp3";
const MUSIC_VOLUME: f64 = 0.45;
const MEOW_SRCS: [&str; 2] = ["sounds/meow1.mp3", "sounds/meow2.mp3"];

pub struct Audio {
    music: HtmlAudioElement,
    meows: Vec<HtmlAudioElement>,
    swallow: Closure<dyn FnMut(JsValue)>,
}

impl Audio {
    pub fn load() -> Result<Self, JsValue> {
        let music = HtmlAudioElement::new_with_src(MUSIC_SRC)?;
        music.set_loop(true);
        music.set_volume(MUSIC_VOLUME);
        let meows = MEOW_SRCS
            .iter()
            .map(|src| HtmlAudioElement::new_with_src(src))
            .collect::<Result<Vec<_>, _>>()?;
        let swallow = Closure::wrap(Box::new(|err: JsValue| {
            log::debug!("playback rejected: {err:?}");
        }) as Box<dyn FnMut(JsValue)>);
        Ok(Self {
            music,
            meows,
            swallow,
        })
    }

    fn play(&self, el: &HtmlAudioElement) {
        if let Ok(promise) = el.play() {
            let _ = promise.catch(&self.swallow);
        }
    }

    pub fn apply(&self, cue: SoundCue, rng: &mut fastrand::Rng) {
        match cue {
            SoundCue::MusicOn => self.play(&self.music),
            SoundCue::MusicOff => {
                let _ = self.music.pause();
                for m in &self.meows {
                    let _ = m.pause();
                    m.set_current_time(0.0);
                }
            }
            SoundCue::Meow => {
                if self.meows.is_empty() {
                    return;
                }
                let m = &self.meows[rng.usize(..self.meows.len())];
                m.set_current_time(0.0);
                self.play(m);
            }
        }
    }
}
