//! Repeating ambient meow schedule tied to the round lifecycle.
//!
//! Every arm or cancel bumps a generation counter. A host timer carries the
//! generation it was armed with; when it fires with an older generation it is
//! ignored. A current-generation fire still rechecks sound and phase before
//! playing and before re-arming.

pub const MIN_DELAY_MS: f64 = 5_000.0;
pub const MAX_DELAY_MS: f64 = 15_000.0;

/// Request to the host: call back `fire` with `generation` after `delay_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientTicket {
    pub generation: u64,
    pub delay_ms: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fire {
    /// Timer belonged to a cancelled or superseded schedule.
    Stale,
    /// Current timer fired. `meow` says whether to play a sound; `next` is the
    /// re-armed ticket, if the schedule is still live.
    Fired {
        meow: bool,
        next: Option<AmbientTicket>,
    },
}

#[derive(Debug, Default)]
pub struct AmbientTimer {
    generation: u64,
    armed: bool,
}

impl AmbientTimer {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.armed = false;
    }

    /// Replaces any pending timer. Arms only while sound is on and a round
    /// is being played.
    pub fn schedule(
        &mut self,
        sound_on: bool,
        playing: bool,
        rng: &mut fastrand::Rng,
    ) -> Option<AmbientTicket> {
        self.cancel();
        if !sound_on || !playing {
            return None;
        }
        self.armed = true;
        Some(AmbientTicket {
            generation: self.generation,
            delay_ms: MIN_DELAY_MS + rng.f64() * (MAX_DELAY_MS - MIN_DELAY_MS),
        })
    }

    pub fn fire(
        &mut self,
        generation: u64,
        sound_on: bool,
        playing: bool,
        rng: &mut fastrand::Rng,
    ) -> Fire {
        if generation != self.generation || !self.armed {
            log::debug!("ambient timer {generation} is stale (current {})", self.generation);
            return Fire::Stale;
        }
        let meow = sound_on && playing;
        Fire::Fired {
            meow,
            next: self.schedule(sound_on, playing, rng),
        }
    }
}
