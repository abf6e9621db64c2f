//! Game state and core simulation types
//!
//! One `GameState` owns everything the simulation touches. The host keeps it
//! and passes it by reference into [`super::tick::update`] every frame.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::effects::Effects;
use super::entity::{Ball, Paddle};
use super::level::Level;
use super::particles::ParticleSystem;
use super::powerup::PowerUp;
use crate::Settings;
use crate::audio::{SoundEffect, SoundEvent};
use crate::consts::*;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Level select, waiting for confirm
    Menu,
    /// Active gameplay
    Active,
    /// Level cleared, waiting for confirm
    Win,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    /// Current phase
    pub phase: GamePhase,
    /// Player lives
    pub lives: u8,
    /// Selectable levels
    pub levels: Vec<Level>,
    /// Index into `levels`
    pub level_index: usize,
    /// Player paddle
    pub paddle: Paddle,
    /// The one ball
    pub ball: Ball,
    /// Falling and active power-ups
    pub powerups: Vec<PowerUp>,
    /// Post-processing flags
    pub effects: Effects,
    /// Ball trail (not gameplay-affecting)
    pub particles: ParticleSystem,
    /// Frames simulated
    pub frame: u64,
    /// Host should stop the frame loop
    pub quit_requested: bool,
    /// Sounds waiting for the audio backend
    sounds: Vec<SoundEvent>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// New game on the bundled levels
    pub fn new(settings: Settings) -> Self {
        let levels = Level::all_builtin(settings.level_area());
        Self::with_levels(settings, levels)
    }

    /// New game on a custom level set. An empty set gets a single empty level.
    pub fn with_levels(settings: Settings, mut levels: Vec<Level>) -> Self {
        if levels.is_empty() {
            log::warn!("No levels supplied, starting with an empty field");
            levels.push(Level::from_tiles(Vec::new(), settings.level_area()));
        }

        let screen = settings.screen_size();
        let paddle = Paddle::new(screen, settings.paddle_size);
        let ball = Ball::new(
            Ball::rest_position(&paddle, settings.ball_radius),
            settings.ball_radius,
            settings.ball_velocity,
        );
        let particle_count = if settings.particles { MAX_PARTICLES } else { 0 };

        let mut state = Self {
            phase: GamePhase::Menu,
            lives: settings.lives,
            levels,
            level_index: 0,
            paddle,
            ball,
            powerups: Vec::new(),
            effects: Effects::default(),
            particles: ParticleSystem::new(particle_count),
            frame: 0,
            quit_requested: false,
            sounds: Vec::new(),
            rng: Pcg32::seed_from_u64(settings.seed),
            settings,
        };
        state.play(SoundEffect::Music, true);
        state
    }

    #[inline]
    pub fn screen_size(&self) -> Vec2 {
        self.settings.screen_size()
    }

    /// Level currently selected/played
    pub fn level(&self) -> &Level {
        &self.levels[self.level_index]
    }

    pub fn level_mut(&mut self) -> &mut Level {
        &mut self.levels[self.level_index]
    }

    /// Every destructible brick of the current level is gone
    pub fn level_completed(&self) -> bool {
        self.level().is_completed()
    }

    /// Rebuild the current level, restore lives and drop every power-up
    pub fn reset_level(&mut self) {
        self.level_mut().reset();
        self.lives = self.settings.lives;
        self.powerups.clear();
        log::info!("Level {} reset", self.level_index + 1);
    }

    /// Paddle and ball back to spawn with every power-up effect dropped.
    /// Power-ups still falling stay in play.
    pub fn reset_player(&mut self) {
        let screen = self.screen_size();
        self.paddle.reset(screen, self.settings.paddle_size);
        self.ball.reset(
            Ball::rest_position(&self.paddle, self.ball.radius),
            self.settings.ball_velocity,
        );
        self.effects.clear_distortions();
        self.powerups.retain(|p| !p.activated);
    }

    /// Menu: cycle to the next level
    pub fn select_next_level(&mut self) {
        self.level_index = (self.level_index + 1) % self.levels.len();
        log::info!("Selected level {}", self.level_index + 1);
    }

    /// Menu: cycle to the previous level
    pub fn select_previous_level(&mut self) {
        self.level_index = self
            .level_index
            .checked_sub(1)
            .unwrap_or(self.levels.len() - 1);
        log::info!("Selected level {}", self.level_index + 1);
    }

    /// Queue a sound for the audio backend
    pub fn play(&mut self, effect: SoundEffect, looped: bool) {
        self.sounds.push(SoundEvent { effect, looped });
    }

    /// Queued sounds, oldest first (drains the queue)
    pub fn take_sounds(&mut self) -> Vec<SoundEvent> {
        std::mem::take(&mut self.sounds)
    }

    /// Pending sounds without draining
    pub fn pending_sounds(&self) -> &[SoundEvent] {
        &self.sounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::powerup::PowerUpKind;

    #[test]
    fn test_new_game_starts_in_menu() {
        let state = GameState::new(Settings::default());
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.lives, INITIAL_LIVES);
        assert_eq!(state.levels.len(), 4);
        assert!(state.ball.stuck);
        assert_eq!(
            state.pending_sounds(),
            &[SoundEvent { effect: SoundEffect::Music, looped: true }]
        );
    }

    #[test]
    fn test_level_selection_wraps() {
        let mut state = GameState::new(Settings::default());
        state.select_previous_level();
        assert_eq!(state.level_index, 3);
        state.select_next_level();
        assert_eq!(state.level_index, 0);
        state.select_next_level();
        assert_eq!(state.level_index, 1);
    }

    #[test]
    fn test_reset_player_restores_spawn() {
        let mut state = GameState::new(Settings::default());
        state.paddle.entity.size.x += 50.0;
        state.paddle.move_by(-200.0, 800.0);
        state.ball.stuck = false;
        state.ball.passthrough = true;
        state.effects.confuse = true;
        let mut held = PowerUp::new(PowerUpKind::Confuse, Vec2::ZERO);
        held.activated = true;
        held.entity.destroyed = true;
        state.powerups.push(held);
        state.powerups.push(PowerUp::new(PowerUpKind::Chaos, Vec2::new(10.0, 100.0)));

        state.reset_player();

        assert_eq!(state.paddle.size(), PADDLE_SIZE);
        assert_eq!(state.paddle.position(), Vec2::new(350.0, 580.0));
        assert!(state.ball.stuck && !state.ball.passthrough);
        assert_eq!(state.ball.position(), Vec2::new(387.5, 555.0));
        assert_eq!(state.ball.velocity(), BALL_INITIAL_VELOCITY);
        assert!(!state.effects.confuse);
        assert_eq!(state.powerups.len(), 1);
        assert_eq!(state.powerups[0].kind, PowerUpKind::Chaos);
        assert!(!state.powerups[0].activated);
    }

    #[test]
    fn test_reset_level_restores_lives_and_bricks() {
        let mut state = GameState::new(Settings::default());
        state.lives = 1;
        state.powerups.push(PowerUp::new(PowerUpKind::Speed, Vec2::ZERO));
        for brick in state.level_mut().bricks.iter_mut() {
            brick.entity.destroyed = true;
        }
        assert!(state.level_completed());

        state.reset_level();
        assert_eq!(state.lives, INITIAL_LIVES);
        assert!(!state.level_completed());
        assert!(state.powerups.is_empty());
    }

    #[test]
    fn test_empty_level_set_gets_placeholder() {
        let state = GameState::with_levels(Settings::default(), Vec::new());
        assert_eq!(state.levels.len(), 1);
        assert!(state.level_completed());
    }
}
