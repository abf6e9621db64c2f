//! Per-frame simulation update
//!
//! Frame order is fixed: input, ball movement, collisions (bricks, power-ups,
//! paddle), particle and shake timers, power-up timers, loss check, win check.
//! Loss and win are judged on this frame's post-collision state.

use glam::Vec2;

use super::collision::{
    bounce_off_paddle, check_circle_box_collision, passes_through, resolve_ball_box,
};
use super::powerup::{collect_powerups, roll_spawns, update_powerups};
use super::state::{GamePhase, GameState};
use crate::audio::SoundEffect;
use crate::consts::*;

/// Input commands for a single frame (one-shot flags are cleared by the host)
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Move paddle left (held)
    pub left: bool,
    /// Move paddle right (held)
    pub right: bool,
    /// Release a stuck ball
    pub launch: bool,
    /// Start from the menu / leave the win screen
    pub confirm: bool,
    /// Menu: next level
    pub next_level: bool,
    /// Menu: previous level
    pub previous_level: bool,
    /// Reset level and player (debug)
    pub reset: bool,
    /// Stop the game loop
    pub quit: bool,
    /// Idle/demo mode - AI plays the game
    pub idle_mode: bool,
}

impl FrameInput {
    /// Input the demo AI would give for this state
    pub fn autopilot(state: &GameState) -> Self {
        let mut input = FrameInput::default();
        match state.phase {
            GamePhase::Menu | GamePhase::Win => input.confirm = true,
            GamePhase::Active => {
                if state.ball.stuck {
                    input.launch = true;
                }
                // Track the ball with a small dead zone to avoid jitter
                let target = state.ball.center().x;
                let center = state.paddle.center_x();
                input.left = target < center - 5.0;
                input.right = target > center + 5.0;
            }
        }
        input
    }
}

/// Something notable that ended this frame's play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Ball fell out, play continues
    LifeLost { lives_left: u8 },
    /// Last life lost; level reloaded and back to the menu
    GameOver,
    /// Every destructible brick destroyed
    LevelCleared,
}

/// Advance the game state by one frame
pub fn update(state: &mut GameState, input: &FrameInput, dt: f32) -> Option<FrameOutcome> {
    let mut input = input.clone();
    if input.idle_mode {
        input = FrameInput {
            quit: input.quit,
            ..FrameInput::autopilot(state)
        };
    }
    process_input(state, &input, dt);
    if state.quit_requested {
        return None;
    }

    state.frame += 1;
    let active = state.phase == GamePhase::Active;

    if active {
        let width = state.settings.screen_width;
        state.ball.advance(dt, width);
        resolve_collisions(state);
    }

    // Particles trail the ball in every phase
    let offset = Vec2::splat(state.ball.radius / 2.0);
    state
        .particles
        .update(&mut state.rng, dt, &state.ball, NEW_PARTICLES_PER_FRAME, offset);
    state.effects.update(dt);

    if !active {
        return None;
    }

    update_powerups(
        &mut state.powerups,
        &mut state.ball,
        &mut state.paddle,
        &mut state.effects,
        dt,
    );

    if state.ball.position().y >= state.settings.screen_height {
        return Some(lose_life(state));
    }

    if state.level_completed() {
        state.reset_level();
        state.reset_player();
        state.effects.chaos = true;
        state.phase = GamePhase::Win;
        log::info!("Level {} cleared", state.level_index + 1);
        return Some(FrameOutcome::LevelCleared);
    }

    None
}

fn process_input(state: &mut GameState, input: &FrameInput, dt: f32) {
    if input.quit {
        log::info!("Quit requested");
        state.quit_requested = true;
        return;
    }
    if input.reset {
        log::info!("Manual reset");
        state.reset_level();
        state.reset_player();
    }

    match state.phase {
        GamePhase::Menu => {
            if input.confirm {
                state.phase = GamePhase::Active;
                log::info!("Starting level {}", state.level_index + 1);
            } else if input.next_level {
                state.select_next_level();
            } else if input.previous_level {
                state.select_previous_level();
            }
        }
        GamePhase::Active => {
            let step = state.settings.paddle_speed * dt;
            let mut dx = 0.0;
            if input.left {
                dx -= step;
            }
            if input.right {
                dx += step;
            }
            if dx != 0.0 {
                let moved = state.paddle.move_by(dx, state.settings.screen_width);
                if state.ball.stuck {
                    state.ball.entity.position.x += moved;
                }
            }
            if input.launch {
                state.ball.stuck = false;
            }
        }
        GamePhase::Win => {
            if input.confirm {
                state.effects.chaos = false;
                state.phase = GamePhase::Menu;
            }
        }
    }
}

/// Ball vs bricks, power-ups vs paddle, then ball vs paddle
pub fn resolve_collisions(state: &mut GameState) {
    let shake = state.settings.effective_screen_shake();
    let powerups_enabled = state.settings.powerups;
    let mut sounds = Vec::new();

    let level = &mut state.levels[state.level_index];
    for brick in level.bricks.iter_mut().filter(|b| !b.is_destroyed()) {
        let result = check_circle_box_collision(&state.ball, &brick.entity);
        if !result.collided {
            continue;
        }

        if brick.is_solid {
            if shake {
                state.effects.trigger_shake(SHAKE_DURATION);
            }
            sounds.push(SoundEffect::HitSolid);
        } else {
            brick.entity.destroyed = true;
            if powerups_enabled {
                let drops = roll_spawns(&mut state.rng, brick.entity.position);
                state.powerups.extend(drops);
            }
            sounds.push(SoundEffect::HitNonSolid);
        }

        if !passes_through(&state.ball, brick) {
            resolve_ball_box(&mut state.ball, &result);
        }
    }

    collect_powerups(
        &mut state.powerups,
        &mut state.ball,
        &mut state.paddle,
        &mut state.effects,
        state.settings.screen_size(),
        &mut sounds,
    );

    if !state.ball.stuck {
        let result = check_circle_box_collision(&state.ball, &state.paddle.entity);
        if result.collided {
            bounce_off_paddle(
                &mut state.ball,
                &state.paddle,
                state.settings.ball_velocity,
                state.settings.bounce_strength,
            );
            sounds.push(SoundEffect::PaddleHit);
        }
    }

    for effect in sounds {
        state.play(effect, false);
    }
}

fn lose_life(state: &mut GameState) -> FrameOutcome {
    state.lives = state.lives.saturating_sub(1);
    let outcome = if state.lives == 0 {
        log::info!("Out of lives");
        state.reset_level();
        state.phase = GamePhase::Menu;
        FrameOutcome::GameOver
    } else {
        log::info!("Ball lost, {} lives left", state.lives);
        FrameOutcome::LifeLost {
            lives_left: state.lives,
        }
    };
    state.reset_player();
    outcome
}
