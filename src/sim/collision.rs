//! Collision detection and response for boxes and the ball
//!
//! Discrete tests only: the ball is checked at its post-move position each
//! frame. There is no swept test, so a fast ball (or a long frame) can tunnel
//! through thin bricks.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Ball, Brick, Entity, Paddle};
use crate::{aabb_overlap, clamp_to_extent};

/// Compass direction of the face the ball struck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Classification order; earlier entries win ties
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit vector for this direction
    #[inline]
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, 1.0),
            Direction::Right => Vec2::new(1.0, 0.0),
            Direction::Down => Vec2::new(0.0, -1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
        }
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Direction whose unit vector best matches `target`.
/// A zero vector classifies as `Up`.
pub fn vector_direction(target: Vec2) -> Direction {
    let normalized = target.normalize_or_zero();
    let mut best = Direction::Up;
    let mut max = 0.0;
    for dir in Direction::ALL {
        let dot = normalized.dot(dir.unit());
        if dot > max {
            max = dot;
            best = dir;
        }
    }
    best
}

/// Result of a circle-vs-box check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub collided: bool,
    /// Face that was struck
    pub direction: Direction,
    /// Closest box point minus ball center
    pub difference: Vec2,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            collided: false,
            direction: Direction::Up,
            difference: Vec2::ZERO,
        }
    }
}

/// Inclusive AABB overlap of two entities
#[inline]
pub fn check_aabb_overlap(a: &Entity, b: &Entity) -> bool {
    aabb_overlap(a.position, a.size, b.position, b.size)
}

/// Check the ball against a box.
///
/// Finds the point on the box closest to the ball center; the ball collides
/// when that point is strictly closer than its radius.
pub fn check_circle_box_collision(ball: &Ball, target: &Entity) -> CollisionResult {
    let center = ball.center();
    let half = target.half_extents();
    let box_center = target.position + half;

    let clamped = clamp_to_extent(center - box_center, half);
    let closest = box_center + clamped;
    let difference = closest - center;

    if difference.length() < ball.radius {
        CollisionResult {
            collided: true,
            direction: vector_direction(difference),
            difference,
        }
    } else {
        CollisionResult::miss()
    }
}

/// Passthrough balls skip the bounce against destructible bricks
#[inline]
pub fn passes_through(ball: &Ball, brick: &Brick) -> bool {
    ball.passthrough && !brick.is_solid
}

/// Reflect the ball off the struck face and push it back out of the box
pub fn resolve_ball_box(ball: &mut Ball, result: &CollisionResult) {
    let e = &mut ball.entity;
    if result.direction.is_horizontal() {
        e.velocity.x = -e.velocity.x;
        let penetration = ball.radius - result.difference.x.abs();
        if result.direction == Direction::Left {
            e.position.x += penetration;
        } else {
            e.position.x -= penetration;
        }
    } else {
        e.velocity.y = -e.velocity.y;
        let penetration = ball.radius - result.difference.y.abs();
        if result.direction == Direction::Up {
            e.position.y -= penetration;
        } else {
            e.position.y += penetration;
        }
    }
}

/// Redirect the ball off the paddle.
///
/// Horizontal speed follows the impact offset from the paddle center, the ball
/// always leaves upward, and its speed is kept constant. A sticky ball glues
/// back onto the paddle.
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle, initial_velocity: Vec2, strength: f32) {
    let half_width = paddle.size().x / 2.0;
    let distance = ball.position().x + ball.radius - paddle.center_x();
    let percentage = distance / half_width;

    let old_speed = ball.velocity().length();
    let v = &mut ball.entity.velocity;
    v.x = initial_velocity.x * percentage * strength;
    v.y = -v.y.abs();
    *v = v.normalize_or_zero() * old_speed;

    ball.stuck = ball.sticky;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::Sprite;
    use proptest::prelude::*;

    fn boxed(x: f32, y: f32, w: f32, h: f32) -> Entity {
        Entity::new(Vec2::new(x, y), Vec2::new(w, h), Sprite::Block)
    }

    /// Free ball whose center is at (cx, cy)
    fn ball_at(cx: f32, cy: f32, vel: Vec2) -> Ball {
        let mut ball = Ball::new(Vec2::new(cx - 10.0, cy - 10.0), 10.0, vel);
        ball.stuck = false;
        ball
    }

    #[test]
    fn test_direction_table() {
        assert_eq!(vector_direction(Vec2::new(0.0, 1.0)), Direction::Up);
        assert_eq!(vector_direction(Vec2::new(0.0, -3.0)), Direction::Down);
        assert_eq!(vector_direction(Vec2::new(2.0, 0.5)), Direction::Right);
        assert_eq!(vector_direction(Vec2::new(-2.0, 0.5)), Direction::Left);
    }

    #[test]
    fn test_zero_vector_is_up() {
        assert_eq!(vector_direction(Vec2::ZERO), Direction::Up);
    }

    #[test]
    fn test_diagonal_tie_prefers_table_order() {
        assert_eq!(vector_direction(Vec2::new(1.0, 1.0)), Direction::Up);
        assert_eq!(vector_direction(Vec2::new(1.0, -1.0)), Direction::Right);
    }

    #[test]
    fn test_tangent_ball_does_not_collide() {
        let target = boxed(0.0, 0.0, 100.0, 20.0);
        // Center 10 below the bottom edge, radius 10: distance == radius
        let ball = ball_at(50.0, 30.0, Vec2::ZERO);
        let result = check_circle_box_collision(&ball, &target);
        assert!(!result.collided);
    }

    #[test]
    fn test_ball_below_box_hits_bottom_face() {
        let target = boxed(0.0, 0.0, 100.0, 20.0);
        let ball = ball_at(50.0, 26.0, Vec2::new(0.0, -100.0));
        let result = check_circle_box_collision(&ball, &target);
        assert!(result.collided);
        // Closest point is above the ball center (negative y)
        assert_eq!(result.difference, Vec2::new(0.0, -6.0));
        assert_eq!(result.direction, Direction::Down);
    }

    #[test]
    fn test_resolve_vertical_pushes_out() {
        let target = boxed(0.0, 0.0, 100.0, 20.0);
        let mut ball = ball_at(50.0, 26.0, Vec2::new(30.0, -100.0));
        let result = check_circle_box_collision(&ball, &target);
        resolve_ball_box(&mut ball, &result);

        assert_eq!(ball.velocity(), Vec2::new(30.0, 100.0));
        // Penetration 10 - 6 = 4 pushes the ball down
        assert_eq!(ball.center(), Vec2::new(50.0, 30.0));
        assert!(!check_circle_box_collision(&ball, &target).collided);
    }

    #[test]
    fn test_resolve_horizontal_pushes_out() {
        let target = boxed(100.0, 0.0, 50.0, 50.0);
        // Ball left of the box moving right
        let mut ball = ball_at(93.0, 25.0, Vec2::new(200.0, 10.0));
        let result = check_circle_box_collision(&ball, &target);
        assert!(result.collided);
        assert_eq!(result.direction, Direction::Right);

        resolve_ball_box(&mut ball, &result);
        assert_eq!(ball.velocity(), Vec2::new(-200.0, 10.0));
        assert_eq!(ball.center().x, 90.0);
    }

    #[test]
    fn test_passthrough_only_for_destructible() {
        let mut ball = ball_at(0.0, 0.0, Vec2::ZERO);
        let soft = Brick::new(Vec2::ZERO, Vec2::ONE, glam::Vec3::ONE, false);
        let solid = Brick::new(Vec2::ZERO, Vec2::ONE, glam::Vec3::ONE, true);
        assert!(!passes_through(&ball, &soft));
        ball.passthrough = true;
        assert!(passes_through(&ball, &soft));
        assert!(!passes_through(&ball, &solid));
    }

    #[test]
    fn test_paddle_bounce_center_goes_straight_up() {
        let paddle = Paddle::new(Vec2::new(800.0, 600.0), Vec2::new(100.0, 20.0));
        let mut ball = ball_at(paddle.center_x(), 575.0, Vec2::new(50.0, 300.0));
        let speed = ball.velocity().length();

        bounce_off_paddle(&mut ball, &paddle, Vec2::new(100.0, -350.0), 2.0);
        assert!(ball.velocity().x.abs() < 1e-4);
        assert!(ball.velocity().y < 0.0);
        assert!((ball.velocity().length() - speed).abs() < 1e-3);
    }

    #[test]
    fn test_paddle_bounce_edge_deflects_sideways() {
        let paddle = Paddle::new(Vec2::new(800.0, 600.0), Vec2::new(100.0, 20.0));
        // Right edge of the paddle
        let mut ball = ball_at(paddle.center_x() + 50.0, 575.0, Vec2::new(0.0, 300.0));
        bounce_off_paddle(&mut ball, &paddle, Vec2::new(100.0, -350.0), 2.0);
        assert!(ball.velocity().x > 0.0);
        assert!(ball.velocity().y < 0.0);
    }

    #[test]
    fn test_paddle_bounce_sticky_restick() {
        let paddle = Paddle::new(Vec2::new(800.0, 600.0), Vec2::new(100.0, 20.0));
        let mut ball = ball_at(paddle.center_x(), 575.0, Vec2::new(0.0, 300.0));
        ball.sticky = true;
        bounce_off_paddle(&mut ball, &paddle, Vec2::new(100.0, -350.0), 2.0);
        assert!(ball.stuck);

        ball.sticky = false;
        bounce_off_paddle(&mut ball, &paddle, Vec2::new(100.0, -350.0), 2.0);
        assert!(!ball.stuck);
    }

    fn arb_box() -> impl Strategy<Value = Entity> {
        (-500.0f32..500.0, -500.0f32..500.0, 0.0f32..200.0, 0.0f32..200.0)
            .prop_map(|(x, y, w, h)| boxed(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_aabb_overlap_symmetric(a in arb_box(), b in arb_box()) {
            prop_assert_eq!(check_aabb_overlap(&a, &b), check_aabb_overlap(&b, &a));
        }

        #[test]
        fn prop_paddle_bounce_keeps_speed(
            offset in -60.0f32..60.0,
            vx in -400.0f32..400.0,
            vy in 50.0f32..400.0,
        ) {
            let paddle = Paddle::new(Vec2::new(800.0, 600.0), Vec2::new(100.0, 20.0));
            let mut ball = ball_at(paddle.center_x() + offset, 575.0, Vec2::new(vx, vy));
            let speed = ball.velocity().length();
            bounce_off_paddle(&mut ball, &paddle, Vec2::new(100.0, -350.0), 2.0);
            prop_assert!(ball.velocity().y <= 0.0);
            prop_assert!((ball.velocity().length() - speed).abs() < speed * 1e-4 + 1e-3);
        }

        #[test]
        fn prop_collision_never_nan(cx in -100.0f32..300.0, cy in -100.0f32..300.0) {
            let target = boxed(0.0, 0.0, 100.0, 100.0);
            let ball = ball_at(cx, cy, Vec2::ZERO);
            let result = check_circle_box_collision(&ball, &target);
            prop_assert!(!result.difference.is_nan());
        }
    }
}
