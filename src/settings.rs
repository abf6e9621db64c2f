//! Game settings and tuning
//!
//! Persisted as JSON next to the executable. Every field has a default, so a
//! partial file only overrides what it names.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// Game settings/tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Screen ===
    /// Playfield width in pixels
    pub screen_width: f32,
    /// Playfield height in pixels
    pub screen_height: f32,

    // === Player ===
    /// Lives at the start of each run
    pub lives: u8,
    /// Paddle size at spawn
    pub paddle_size: Vec2,
    /// Paddle speed (pixels/s)
    pub paddle_speed: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Velocity given to the ball on every reset
    pub ball_velocity: Vec2,
    /// Sideways deflection strength off the paddle edges
    pub bounce_strength: f32,

    // === Gameplay ===
    /// Power-ups drop from destroyed bricks
    pub powerups: bool,
    /// Seed for the simulation RNG
    pub seed: u64,

    // === Visual Effects ===
    /// Screen shake on solid brick hits
    pub screen_shake: bool,
    /// Ball trail particles
    pub particles: bool,

    // === Accessibility ===
    /// Reduced motion (suppresses shake)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            lives: INITIAL_LIVES,
            paddle_size: PADDLE_SIZE,
            paddle_speed: PADDLE_SPEED,

            ball_radius: BALL_RADIUS,
            ball_velocity: BALL_INITIAL_VELOCITY,
            bounce_strength: BOUNCE_STRENGTH,

            powerups: true,
            seed: 0x5EED_B10C,

            screen_shake: true,
            particles: true,

            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Screen size as a vector
    pub fn screen_size(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }

    /// Area bricks are laid out in (top half of the screen)
    pub fn level_area(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height / 2.0)
    }

    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }

    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize settings to pretty JSON
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file is missing or bad
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default settings: {e}");
                Self::default()
            }
        }
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "lives": 5, "powerups": false }"#).unwrap();
        assert_eq!(settings.lives, 5);
        assert!(!settings.powerups);
        assert_eq!(settings.screen_width, SCREEN_WIDTH);
        assert_eq!(settings.ball_velocity, BALL_INITIAL_VELOCITY);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = Settings::from_json("{ lives: ").unwrap_err();
        assert!(matches!(err, SettingsError::Json(_)));
    }

    #[test]
    fn test_reduced_motion_disables_shake() {
        let mut settings = Settings::default();
        assert!(settings.effective_screen_shake());
        settings.reduced_motion = true;
        assert!(!settings.effective_screen_shake());
    }

    #[test]
    fn test_level_area_is_top_half() {
        let settings = Settings::default();
        assert_eq!(settings.level_area(), Vec2::new(800.0, 300.0));
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!("brick_breaker_settings_{}.json", std::process::id()));
        let mut settings = Settings::default();
        settings.seed = 42;
        settings.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded, settings);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_or_default("/definitely/not/here.json");
        assert_eq!(settings, Settings::default());
    }
}
