//! Audio seam
//!
//! The simulation only queues sound ids; the host owns the actual backend and
//! plays them through an [`AudioSink`]. Playback is fire-and-forget.

use serde::{Deserialize, Serialize};

use crate::sim::GameState;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Background music (looped from startup)
    Music,
    /// Ball destroys a regular brick
    HitNonSolid,
    /// Ball bounces off an indestructible brick
    HitSolid,
    /// Power-up collected by the paddle
    PowerUp,
    /// Ball hits paddle
    PaddleHit,
}

impl SoundEffect {
    /// Resource name the backend resolves
    pub fn name(&self) -> &'static str {
        match self {
            SoundEffect::Music => "breakout.mp3",
            SoundEffect::HitNonSolid => "bleep.mp3",
            SoundEffect::HitSolid => "solid.wav",
            SoundEffect::PowerUp => "powerup.wav",
            SoundEffect::PaddleHit => "bleep.wav",
        }
    }
}

/// A queued playback request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundEvent {
    pub effect: SoundEffect,
    pub looped: bool,
}

/// Backend that actually plays sounds
pub trait AudioSink {
    fn play_sound(&mut self, effect: SoundEffect, looped: bool);
}

/// Audio manager for the game
#[derive(Debug, Clone, Default)]
pub struct AudioManager {
    muted: bool,
    played: u64,
}

impl AudioManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mute/unmute all audio (queued events are still consumed)
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Number of sounds forwarded to a sink so far
    pub fn played(&self) -> u64 {
        self.played
    }

    /// Forward every queued sound event to the sink, returns how many were played
    pub fn flush(&mut self, state: &mut GameState, sink: &mut dyn AudioSink) -> usize {
        let events = state.take_sounds();
        if self.muted {
            return 0;
        }
        for event in &events {
            log::trace!("Playing {} (looped: {})", event.effect.name(), event.looped);
            sink.play_sound(event.effect, event.looped);
        }
        self.played += events.len() as u64;
        events.len()
    }
}
