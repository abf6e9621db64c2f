//! Power-ups dropped by destroyed bricks
//!
//! Every destructible brick rolls once per power-up kind, so a single brick can
//! drop several. Collected power-ups stay in the list (destroyed but activated)
//! until their timer runs out; only then is the effect reverted, and only when
//! no other active power-up of the same kind still holds it.

use glam::{Vec2, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::check_aabb_overlap;
use super::effects::Effects;
use super::entity::{Ball, Entity, Paddle, Sprite};
use crate::audio::SoundEffect;
use crate::consts::*;

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    Speed,
    Sticky,
    Passthrough,
    PaddleGrow,
    Confuse,
    Chaos,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 6] = [
        PowerUpKind::Speed,
        PowerUpKind::Sticky,
        PowerUpKind::Passthrough,
        PowerUpKind::PaddleGrow,
        PowerUpKind::Confuse,
        PowerUpKind::Chaos,
    ];

    /// Drop chance is 1 in this many per destroyed brick
    pub fn spawn_odds(&self) -> u32 {
        match self {
            PowerUpKind::Confuse | PowerUpKind::Chaos => 15,
            _ => 75,
        }
    }

    /// Seconds the effect lasts once collected (0 = instant)
    pub fn duration(&self) -> f32 {
        match self {
            PowerUpKind::Speed => 0.0,
            PowerUpKind::Sticky => 20.0,
            PowerUpKind::Passthrough => 10.0,
            PowerUpKind::PaddleGrow => 0.0,
            PowerUpKind::Confuse => 15.0,
            PowerUpKind::Chaos => 15.0,
        }
    }

    pub fn color(&self) -> Vec3 {
        match self {
            PowerUpKind::Speed => Vec3::new(0.5, 0.5, 1.0),
            PowerUpKind::Sticky => Vec3::new(1.0, 0.5, 1.0),
            PowerUpKind::Passthrough => Vec3::new(0.5, 1.0, 0.5),
            PowerUpKind::PaddleGrow => Vec3::new(1.0, 0.6, 0.4),
            PowerUpKind::Confuse => Vec3::new(1.0, 0.3, 0.3),
            PowerUpKind::Chaos => Vec3::new(0.9, 0.25, 0.25),
        }
    }

    pub fn sprite(&self) -> Sprite {
        match self {
            PowerUpKind::Speed => Sprite::PowerupSpeed,
            PowerUpKind::Sticky => Sprite::PowerupSticky,
            PowerUpKind::Passthrough => Sprite::PowerupPassthrough,
            PowerUpKind::PaddleGrow => Sprite::PowerupIncrease,
            PowerUpKind::Confuse => Sprite::PowerupConfuse,
            PowerUpKind::Chaos => Sprite::PowerupChaos,
        }
    }
}

/// Paddle tint while sticky
pub const STICKY_PADDLE_COLOR: Vec3 = Vec3::new(1.0, 0.5, 1.0);
/// Ball tint while passthrough
pub const PASSTHROUGH_BALL_COLOR: Vec3 = Vec3::new(1.0, 0.5, 0.5);

/// A falling (or collected and ticking) power-up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    pub entity: Entity,
    pub kind: PowerUpKind,
    /// Effect is currently applied
    pub activated: bool,
    /// Seconds of effect left
    pub duration: f32,
}

impl PowerUp {
    /// Falling power-up at `position`
    pub fn new(kind: PowerUpKind, position: Vec2) -> Self {
        Self {
            entity: Entity::new(position, POWERUP_SIZE, kind.sprite())
                .with_color(kind.color())
                .with_velocity(POWERUP_VELOCITY),
            kind,
            activated: false,
            duration: kind.duration(),
        }
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.entity.destroyed
    }

    /// Gone from the field and no longer holding an effect
    #[inline]
    pub fn is_spent(&self) -> bool {
        self.entity.destroyed && !self.activated
    }
}

/// Uniform `[0, 1)` draw below `1 / one_in`
pub fn should_spawn<R: Rng + ?Sized>(rng: &mut R, one_in: u32) -> bool {
    let draw: f32 = rng.random();
    draw < 1.0 / one_in as f32
}

/// Independent roll for every kind; returns whatever dropped
pub fn roll_spawns<R: Rng + ?Sized>(rng: &mut R, position: Vec2) -> Vec<PowerUp> {
    PowerUpKind::ALL
        .iter()
        .filter(|kind| should_spawn(rng, kind.spawn_odds()))
        .map(|&kind| PowerUp::new(kind, position))
        .collect()
}

/// Mark the power-up active and apply its effect
pub fn activate(
    powerup: &mut PowerUp,
    ball: &mut Ball,
    paddle: &mut Paddle,
    effects: &mut Effects,
    screen_width: f32,
) {
    powerup.activated = true;
    match powerup.kind {
        PowerUpKind::Speed => {
            ball.entity.velocity *= SPEED_MULTIPLIER;
        }
        PowerUpKind::Sticky => {
            ball.sticky = true;
            paddle.entity.color = STICKY_PADDLE_COLOR;
        }
        PowerUpKind::Passthrough => {
            ball.passthrough = true;
            ball.entity.color = PASSTHROUGH_BALL_COLOR;
        }
        PowerUpKind::PaddleGrow => {
            paddle.entity.size.x += PADDLE_GROWTH;
            // Grown paddle must stay on screen; a stuck ball rides along
            let moved = paddle.move_by(0.0, screen_width);
            if ball.stuck {
                ball.entity.position.x += moved;
            }
        }
        PowerUpKind::Confuse => {
            if !effects.enable_confuse() {
                log::debug!("Confuse suppressed while chaos is active");
            }
        }
        PowerUpKind::Chaos => {
            if !effects.enable_chaos() {
                log::debug!("Chaos suppressed while confuse is active");
            }
        }
    }
    log::debug!("Activated {:?} for {:.1}s", powerup.kind, powerup.duration);
}

/// Undo a timed effect. Speed and paddle growth are permanent.
fn deactivate(kind: PowerUpKind, ball: &mut Ball, paddle: &mut Paddle, effects: &mut Effects) {
    match kind {
        PowerUpKind::Sticky => {
            ball.sticky = false;
            paddle.entity.color = Vec3::ONE;
        }
        PowerUpKind::Passthrough => {
            ball.passthrough = false;
            ball.entity.color = Vec3::ONE;
        }
        PowerUpKind::Confuse => effects.confuse = false,
        PowerUpKind::Chaos => effects.chaos = false,
        PowerUpKind::Speed | PowerUpKind::PaddleGrow => {}
    }
}

/// Collect power-ups touching the paddle; drop ones that fell off screen.
/// Queues a sound per collected power-up.
pub fn collect_powerups(
    powerups: &mut [PowerUp],
    ball: &mut Ball,
    paddle: &mut Paddle,
    effects: &mut Effects,
    screen: Vec2,
    sounds: &mut Vec<SoundEffect>,
) {
    for powerup in powerups.iter_mut().filter(|p| !p.is_destroyed()) {
        if powerup.entity.position.y >= screen.y {
            powerup.entity.destroyed = true;
        }
        if check_aabb_overlap(&paddle.entity, &powerup.entity) {
            activate(powerup, ball, paddle, effects, screen.x);
            powerup.entity.destroyed = true;
            sounds.push(SoundEffect::PowerUp);
        }
    }
}

/// Move power-ups, run down active timers, revert expired effects and sweep
/// spent power-ups out of the list.
pub fn update_powerups(
    powerups: &mut Vec<PowerUp>,
    ball: &mut Ball,
    paddle: &mut Paddle,
    effects: &mut Effects,
    dt: f32,
) {
    for i in 0..powerups.len() {
        let powerup = &mut powerups[i];
        powerup.entity.position += powerup.entity.velocity * dt;
        if !powerup.activated {
            continue;
        }

        powerup.duration -= dt;
        if powerup.duration <= 0.0 {
            powerup.activated = false;
            let kind = powerup.kind;
            let still_held = powerups.iter().any(|p| p.activated && p.kind == kind);
            if still_held {
                log::debug!("{kind:?} expired, another pickup keeps it active");
            } else {
                deactivate(kind, ball, paddle, effects);
                log::debug!("{kind:?} expired");
            }
        }
    }
    powerups.retain(|p| !p.is_spent());
}
