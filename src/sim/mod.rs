//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep only
//! - Seeded RNG only
//! - Stable iteration order (level and spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod effects;
pub mod entity;
pub mod level;
pub mod particles;
pub mod powerup;
pub mod state;
pub mod tick;

pub use collision::{
    CollisionResult, Direction, check_aabb_overlap, check_circle_box_collision, vector_direction,
};
pub use effects::Effects;
pub use entity::{Ball, Brick, Entity, Paddle, Sprite};
pub use level::{BUILTIN_LEVELS, Level, parse_tiles};
pub use particles::{Particle, ParticleSystem};
pub use powerup::{PowerUp, PowerUpKind, should_spawn};
pub use state::{GamePhase, GameState};
pub use tick::{FrameInput, FrameOutcome, resolve_collisions, update};
