//! Entity records: the shared sprite shape plus paddle, ball and brick
//!
//! Each specialised record holds its [`Entity`] as a named field and forwards
//! the accessors it needs.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Sprite textures the renderer resolves by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sprite {
    Background,
    Block,
    BlockSolid,
    Paddle,
    Ball,
    Particle,
    PowerupSpeed,
    PowerupSticky,
    PowerupPassthrough,
    PowerupIncrease,
    PowerupConfuse,
    PowerupChaos,
}

impl Sprite {
    /// Texture resource name
    pub fn name(&self) -> &'static str {
        match self {
            Sprite::Background => "background",
            Sprite::Block => "block",
            Sprite::BlockSolid => "block_solid",
            Sprite::Paddle => "paddle",
            Sprite::Ball => "face",
            Sprite::Particle => "particle",
            Sprite::PowerupSpeed => "powerup_speed",
            Sprite::PowerupSticky => "powerup_sticky",
            Sprite::PowerupPassthrough => "powerup_passthrough",
            Sprite::PowerupIncrease => "powerup_increase",
            Sprite::PowerupConfuse => "powerup_confuse",
            Sprite::PowerupChaos => "powerup_chaos",
        }
    }
}

/// Base shape shared by every drawable object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Top-left corner
    pub position: Vec2,
    pub size: Vec2,
    pub velocity: Vec2,
    /// RGB tint
    pub color: Vec3,
    /// Rotation in degrees
    pub rotation: f32,
    pub sprite: Sprite,
    /// Soft-destroyed (kept in its container, no longer simulated or drawn)
    pub destroyed: bool,
}

impl Entity {
    pub fn new(position: Vec2, size: Vec2, sprite: Sprite) -> Self {
        Self {
            position,
            size,
            velocity: Vec2::ZERO,
            color: Vec3::ONE,
            rotation: 0.0,
            sprite,
            destroyed: false,
        }
    }

    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = color;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Center of the bounding box
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.position + self.size / 2.0
    }

    /// Half-extents of the bounding box
    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.size / 2.0
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub entity: Entity,
}

impl Paddle {
    /// Paddle centered at the bottom of the screen
    pub fn new(screen: Vec2, size: Vec2) -> Self {
        Self {
            entity: Entity::new(Self::spawn_position(screen, size), size, Sprite::Paddle),
        }
    }

    /// Spawn point: horizontally centered, resting on the bottom edge
    pub fn spawn_position(screen: Vec2, size: Vec2) -> Vec2 {
        Vec2::new(screen.x / 2.0 - size.x / 2.0, screen.y - size.y)
    }

    /// Restore spawn size, position and color
    pub fn reset(&mut self, screen: Vec2, size: Vec2) {
        self.entity.size = size;
        self.entity.position = Self::spawn_position(screen, size);
        self.entity.color = Vec3::ONE;
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.entity.position
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.entity.size
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.entity.position.x + self.entity.size.x / 2.0
    }

    /// Move horizontally, clamped to `[0, screen_width - width]`.
    /// Returns the distance actually moved.
    pub fn move_by(&mut self, dx: f32, screen_width: f32) -> f32 {
        let max_x = (screen_width - self.entity.size.x).max(0.0);
        let old_x = self.entity.position.x;
        self.entity.position.x = (old_x + dx).clamp(0.0, max_x);
        self.entity.position.x - old_x
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub entity: Entity,
    pub radius: f32,
    /// Glued to the paddle, waiting for launch
    pub stuck: bool,
    /// Re-sticks to the paddle on the next paddle contact
    pub sticky: bool,
    /// Ignores collision response against non-solid bricks
    pub passthrough: bool,
}

impl Ball {
    /// A fresh ball, stuck until launched
    pub fn new(position: Vec2, radius: f32, velocity: Vec2) -> Self {
        Self {
            entity: Entity::new(position, Vec2::splat(radius * 2.0), Sprite::Ball)
                .with_velocity(velocity),
            radius,
            stuck: true,
            sticky: false,
            passthrough: false,
        }
    }

    /// Resting position on top of the paddle's center
    pub fn rest_position(paddle: &Paddle, radius: f32) -> Vec2 {
        paddle.position() + Vec2::new(paddle.size().x / 2.0 - radius, -radius * 2.0)
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.entity.position
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.entity.velocity
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.entity.position + Vec2::splat(self.radius)
    }

    /// Advance by velocity and reflect off the left, right and top edges.
    /// A stuck ball does not move.
    pub fn advance(&mut self, dt: f32, window_width: f32) -> Vec2 {
        if self.stuck {
            return self.entity.position;
        }
        let e = &mut self.entity;
        e.position += e.velocity * dt;

        if e.position.x <= 0.0 {
            e.velocity.x = -e.velocity.x;
            e.position.x = 0.0;
        } else if e.position.x + e.size.x >= window_width {
            e.velocity.x = -e.velocity.x;
            e.position.x = window_width - e.size.x;
        }
        if e.position.y <= 0.0 {
            e.velocity.y = -e.velocity.y;
            e.position.y = 0.0;
        }
        e.position
    }

    /// Back to a stuck ball at `position` with every power-up flag cleared
    pub fn reset(&mut self, position: Vec2, velocity: Vec2) {
        self.entity.position = position;
        self.entity.velocity = velocity;
        self.entity.color = Vec3::ONE;
        self.stuck = true;
        self.sticky = false;
        self.passthrough = false;
    }
}

/// A brick in a level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub entity: Entity,
    /// Indestructible, doesn't count for level completion
    pub is_solid: bool,
}

impl Brick {
    pub fn new(position: Vec2, size: Vec2, color: Vec3, is_solid: bool) -> Self {
        let sprite = if is_solid {
            Sprite::BlockSolid
        } else {
            Sprite::Block
        };
        Self {
            entity: Entity::new(position, size, sprite).with_color(color),
            is_solid,
        }
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.entity.destroyed
    }

    /// Returns true if this brick must be destroyed to clear the level
    #[inline]
    pub fn counts_for_clear(&self) -> bool {
        !self.is_solid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn test_paddle_spawns_centered_at_bottom() {
        let paddle = Paddle::new(SCREEN, Vec2::new(100.0, 20.0));
        assert_eq!(paddle.position(), Vec2::new(350.0, 580.0));
        assert_eq!(paddle.center_x(), 400.0);
    }

    #[test]
    fn test_paddle_move_is_clamped() {
        let mut paddle = Paddle::new(SCREEN, Vec2::new(100.0, 20.0));
        let moved = paddle.move_by(-1000.0, SCREEN.x);
        assert_eq!(moved, -350.0);
        assert_eq!(paddle.position().x, 0.0);

        let moved = paddle.move_by(2000.0, SCREEN.x);
        assert_eq!(moved, 700.0);
        assert_eq!(paddle.position().x, 700.0);
    }

    #[test]
    fn test_paddle_wider_than_screen_pins_left() {
        let mut paddle = Paddle::new(SCREEN, Vec2::new(900.0, 20.0));
        paddle.move_by(10.0, SCREEN.x);
        assert_eq!(paddle.position().x, 0.0);
    }

    #[test]
    fn test_stuck_ball_does_not_move() {
        let mut ball = Ball::new(Vec2::new(100.0, 100.0), 12.5, Vec2::new(100.0, -350.0));
        assert!(ball.stuck);
        ball.advance(0.5, SCREEN.x);
        assert_eq!(ball.position(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_ball_reflects_off_walls() {
        let mut ball = Ball::new(Vec2::new(5.0, 5.0), 12.5, Vec2::new(-100.0, -100.0));
        ball.stuck = false;
        ball.advance(0.1, SCREEN.x);
        assert_eq!(ball.position(), Vec2::ZERO);
        assert_eq!(ball.velocity(), Vec2::new(100.0, 100.0));

        let mut ball = Ball::new(Vec2::new(770.0, 300.0), 12.5, Vec2::new(100.0, 0.0));
        ball.stuck = false;
        ball.advance(0.1, SCREEN.x);
        assert_eq!(ball.position().x, 775.0);
        assert_eq!(ball.velocity().x, -100.0);
    }

    #[test]
    fn test_ball_reset_clears_flags() {
        let mut ball = Ball::new(Vec2::ZERO, 12.5, Vec2::ZERO);
        ball.stuck = false;
        ball.sticky = true;
        ball.passthrough = true;
        ball.entity.color = Vec3::new(1.0, 0.5, 0.5);

        ball.reset(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        assert!(ball.stuck);
        assert!(!ball.sticky);
        assert!(!ball.passthrough);
        assert_eq!(ball.entity.color, Vec3::ONE);
        assert_eq!(ball.velocity(), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_ball_rests_on_paddle_center() {
        let paddle = Paddle::new(SCREEN, Vec2::new(100.0, 20.0));
        let pos = Ball::rest_position(&paddle, 12.5);
        assert_eq!(pos, Vec2::new(387.5, 555.0));
    }
}
