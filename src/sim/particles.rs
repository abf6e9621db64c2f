//! Ball trail particles
//!
//! Fixed-size pool: a few dead slots are recycled every frame at the ball's
//! position, live ones drift and fade. Purely visual.

use glam::{Vec2, Vec4};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::Ball;

/// A single trail particle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// RGBA, alpha fades with life
    pub color: Vec4,
    /// Seconds left; dead at <= 0
    pub life: f32,
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            color: Vec4::ONE,
            life: 0.0,
        }
    }
}

impl Particle {
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

/// Particle pool trailing the ball
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    /// Where the last dead-slot search ended
    last_used: usize,
}

impl ParticleSystem {
    pub fn new(amount: usize) -> Self {
        Self {
            particles: vec![Particle::default(); amount],
            last_used: 0,
        }
    }

    /// Respawn `new_particles` at the ball and age the whole pool
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        dt: f32,
        ball: &Ball,
        new_particles: usize,
        offset: Vec2,
    ) {
        if self.particles.is_empty() {
            return;
        }
        for _ in 0..new_particles {
            let slot = self.first_unused();
            respawn(&mut self.particles[slot], rng, ball, offset);
        }
        for p in self.particles.iter_mut() {
            p.life -= dt;
            if p.is_alive() {
                p.position -= p.velocity * dt;
                p.color.w -= dt * 2.5;
            }
        }
    }

    /// Next dead slot, searching from the last hit. Overwrites slot 0 when the
    /// pool is full.
    fn first_unused(&mut self) -> usize {
        let len = self.particles.len();
        let found = (self.last_used..len)
            .chain(0..self.last_used)
            .find(|&i| !self.particles[i].is_alive());
        self.last_used = found.unwrap_or(0);
        self.last_used
    }

    /// Live particles in pool order
    pub fn alive(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter().filter(|p| p.is_alive())
    }

    /// Kill every particle
    pub fn clear(&mut self) {
        for p in self.particles.iter_mut() {
            p.life = 0.0;
        }
        self.last_used = 0;
    }

    pub fn capacity(&self) -> usize {
        self.particles.len()
    }
}

fn respawn<R: Rng + ?Sized>(particle: &mut Particle, rng: &mut R, ball: &Ball, offset: Vec2) {
    let jitter = rng.random_range(-50..50) as f32 / 10.0;
    let shade = (0.5 + rng.random_range(0..100) as f32 / 100.0).min(1.0);
    particle.position = ball.position() + Vec2::splat(jitter) + offset;
    particle.color = Vec4::new(shade, shade, shade, 1.0);
    particle.life = 1.0;
    particle.velocity = ball.velocity() * 0.1;
}
