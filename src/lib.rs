//! Brick Breaker - a classic Breakout arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, levels, collisions, power-ups, game state)
//! - `renderer`: Sprite-drawing seam implemented by the host
//! - `audio`: Sound ids and the fire-and-forget playback seam
//! - `settings`: Data-driven game tuning

pub mod audio;
pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{LevelError, SettingsError};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (60 Hz, one update per video frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Player lives at the start of a run
    pub const INITIAL_LIVES: u8 = 3;

    /// Paddle defaults
    pub const PADDLE_SIZE: Vec2 = Vec2::new(100.0, 20.0);
    /// Paddle speed (pixels/s)
    pub const PADDLE_SPEED: f32 = 500.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 12.5;
    pub const BALL_INITIAL_VELOCITY: Vec2 = Vec2::new(100.0, -350.0);
    /// How hard the paddle edge deflects the ball sideways
    pub const BOUNCE_STRENGTH: f32 = 2.0;

    /// Power-up defaults
    pub const POWERUP_SIZE: Vec2 = Vec2::new(60.0, 20.0);
    pub const POWERUP_VELOCITY: Vec2 = Vec2::new(0.0, 150.0);
    /// Speed power-up multiplier (compounds on every pickup)
    pub const SPEED_MULTIPLIER: f32 = 1.2;
    /// Paddle width gained per grow pickup
    pub const PADDLE_GROWTH: f32 = 50.0;

    /// Screen shake after a solid brick hit (seconds)
    pub const SHAKE_DURATION: f32 = 0.05;

    /// Particle pool
    pub const MAX_PARTICLES: usize = 500;
    pub const NEW_PARTICLES_PER_FRAME: usize = 2;
    pub const PARTICLE_SIZE: f32 = 10.0;
}

/// Inclusive axis-aligned overlap test for two boxes (top-left position + size)
#[inline]
pub fn aabb_overlap(pos_a: Vec2, size_a: Vec2, pos_b: Vec2, size_b: Vec2) -> bool {
    let x = pos_a.x + size_a.x >= pos_b.x && pos_b.x + size_b.x >= pos_a.x;
    let y = pos_a.y + size_a.y >= pos_b.y && pos_b.y + size_b.y >= pos_a.y;
    x && y
}

/// Clamp each component of `v` to `[-extent, extent]`
#[inline]
pub fn clamp_to_extent(v: Vec2, extent: Vec2) -> Vec2 {
    v.clamp(-extent, extent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_overlap_touching_edges() {
        // Edges touching counts as overlap (inclusive bounds)
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        assert!(aabb_overlap(a, Vec2::splat(10.0), b, Vec2::splat(10.0)));
    }

    #[test]
    fn test_aabb_overlap_separated() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.5, 0.0);
        assert!(!aabb_overlap(a, Vec2::splat(10.0), b, Vec2::splat(10.0)));
        // Overlapping on x only
        let c = Vec2::new(5.0, 30.0);
        assert!(!aabb_overlap(a, Vec2::splat(10.0), c, Vec2::splat(10.0)));
    }

    #[test]
    fn test_clamp_to_extent() {
        let clamped = clamp_to_extent(Vec2::new(30.0, -2.0), Vec2::new(10.0, 5.0));
        assert_eq!(clamped, Vec2::new(10.0, -2.0));
    }
}
