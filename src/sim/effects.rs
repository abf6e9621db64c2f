//! Post-processing effect flags
//!
//! The simulation only flips these; the renderer's post-processor reads them.

use serde::{Deserialize, Serialize};

/// Screen-space effects currently requested
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Effects {
    /// Short screen shake (solid brick hits)
    pub shake: bool,
    /// Inverted colors and controls-flip visuals
    pub confuse: bool,
    /// Swirling edge distortion (also used for the win screen)
    pub chaos: bool,
    /// Seconds of shake left
    pub shake_time: f32,
}

impl Effects {
    /// Start (or restart) the shake timer
    pub fn trigger_shake(&mut self, duration: f32) {
        self.shake_time = duration;
        self.shake = true;
    }

    /// Count down the shake timer
    pub fn update(&mut self, dt: f32) {
        if self.shake_time > 0.0 {
            self.shake_time -= dt;
            if self.shake_time <= 0.0 {
                self.shake_time = 0.0;
                self.shake = false;
            }
        }
    }

    /// Turn confuse on unless chaos is already active. Returns whether it took effect.
    pub fn enable_confuse(&mut self) -> bool {
        if self.chaos {
            return false;
        }
        self.confuse = true;
        true
    }

    /// Turn chaos on unless confuse is already active. Returns whether it took effect.
    pub fn enable_chaos(&mut self) -> bool {
        if self.confuse {
            return false;
        }
        self.chaos = true;
        true
    }

    /// Drop confuse and chaos (player reset)
    pub fn clear_distortions(&mut self) {
        self.confuse = false;
        self.chaos = false;
    }
}
