//! Rendering seam
//!
//! The host supplies a sprite renderer; the game only says what to draw and
//! in which order. Later draws sit on top of earlier ones.

pub mod textures;

pub use textures::{TextureHandle, TextureLookup, TextureRegistry};

use glam::{Vec2, Vec3, Vec4};

use crate::consts::PARTICLE_SIZE;
use crate::sim::{Entity, GameState, Sprite};

/// Sprite renderer implemented by the host
pub trait Renderer {
    /// Draw one textured quad. `position` is the top-left corner, `rotation`
    /// is in degrees around the quad center.
    fn draw_sprite(
        &mut self,
        position: Vec2,
        size: Vec2,
        rotation: f32,
        texture: TextureHandle,
        color: Vec4,
    );
}

#[inline]
fn opaque(color: Vec3) -> Vec4 {
    color.extend(1.0)
}

fn draw_entity(renderer: &mut dyn Renderer, textures: &dyn TextureLookup, entity: &Entity) {
    renderer.draw_sprite(
        entity.position,
        entity.size,
        entity.rotation,
        textures.get_texture(entity.sprite.name()),
        opaque(entity.color),
    );
}

/// Draw the whole scene: background, bricks, paddle, power-ups, particles, ball
pub fn render(state: &GameState, renderer: &mut dyn Renderer, textures: &dyn TextureLookup) {
    renderer.draw_sprite(
        Vec2::ZERO,
        state.screen_size(),
        0.0,
        textures.get_texture(Sprite::Background.name()),
        Vec4::ONE,
    );

    for brick in state.level().bricks.iter().filter(|b| !b.is_destroyed()) {
        draw_entity(renderer, textures, &brick.entity);
    }

    draw_entity(renderer, textures, &state.paddle.entity);

    for powerup in state.powerups.iter().filter(|p| !p.is_destroyed()) {
        draw_entity(renderer, textures, &powerup.entity);
    }

    let particle_texture = textures.get_texture(Sprite::Particle.name());
    for particle in state.particles.alive() {
        renderer.draw_sprite(
            particle.position,
            Vec2::splat(PARTICLE_SIZE),
            0.0,
            particle_texture,
            particle.color,
        );
    }

    draw_entity(renderer, textures, &state.ball.entity);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;
    use crate::sim::{Level, PowerUp, PowerUpKind};

    #[derive(Default)]
    struct Recorder {
        draws: Vec<TextureHandle>,
    }

    impl Renderer for Recorder {
        fn draw_sprite(&mut self, _: Vec2, _: Vec2, _: f32, texture: TextureHandle, _: Vec4) {
            self.draws.push(texture);
        }
    }

    fn registry() -> TextureRegistry {
        let mut registry = TextureRegistry::new();
        for sprite in [
            Sprite::Background,
            Sprite::Block,
            Sprite::BlockSolid,
            Sprite::Paddle,
            Sprite::Ball,
            Sprite::PowerupChaos,
        ] {
            registry.register(sprite.name());
        }
        registry
    }

    #[test]
    fn test_painters_order() {
        let settings = Settings {
            particles: false,
            ..Settings::default()
        };
        let level = Level::parse("1 2 2", settings.level_area());
        let mut state = GameState::with_levels(settings, vec![level]);
        state.level_mut().bricks[2].entity.destroyed = true;
        state.powerups.push(PowerUp::new(PowerUpKind::Chaos, Vec2::new(10.0, 10.0)));

        let textures = registry();
        let mut recorder = Recorder::default();
        render(&state, &mut recorder, &textures);

        let expected: Vec<TextureHandle> = [
            Sprite::Background,
            Sprite::BlockSolid,
            Sprite::Block,
            Sprite::Paddle,
            Sprite::PowerupChaos,
            Sprite::Ball,
        ]
        .iter()
        .map(|s| textures.get_texture(s.name()))
        .collect();
        assert_eq!(recorder.draws, expected);
    }

    #[test]
    fn test_missing_textures_still_draw() {
        let state = GameState::new(Settings::default());
        let textures = TextureRegistry::new();
        let mut recorder = Recorder::default();
        render(&state, &mut recorder, &textures);
        assert!(!recorder.draws.is_empty());
        assert!(recorder.draws.iter().all(|&t| t == TextureHandle::FALLBACK));
    }
}
