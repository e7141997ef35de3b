//! Cosmetic particle bursts
//!
//! Driven by `GameEvent::FoodEaten`. Runs on its own RNG so effects never
//! disturb the gameplay stream.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::ParticleBurst;

/// Maximum live particles
pub const MAX_PARTICLES: usize = 256;

/// Downward pull per frame (pixels/frame²)
const GRAVITY: f32 = 0.15;
/// Horizontal velocity kept per frame
const DRAG: f32 = 0.96;
/// Initial upward kick
const LIFT: f32 = 1.5;

#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// RGB colour
    pub color: u32,
    /// 1 at spawn, removed at 0
    pub life: f32,
    pub decay: f32,
    /// Square edge in pixels
    pub size: f32,
}

#[derive(Debug, Clone)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    rng: Pcg32,
}

impl ParticleSystem {
    pub fn new(seed: u64) -> Self {
        Self {
            particles: Vec::with_capacity(MAX_PARTICLES),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Spawn a burst. Anything over `MAX_PARTICLES` is dropped.
    pub fn emit(&mut self, burst: &ParticleBurst) {
        if burst.palette.is_empty() {
            return;
        }
        let room = MAX_PARTICLES.saturating_sub(self.particles.len());
        for _ in 0..(burst.count as usize).min(room) {
            let angle = self.rng.random_range(0.0..std::f32::consts::TAU);
            let speed = self.rng.random_range(0.5..4.0);
            let color = burst.palette[self.rng.random_range(0..burst.palette.len())];
            self.particles.push(Particle {
                pos: burst.origin,
                vel: Vec2::new(angle.cos() * speed, angle.sin() * speed - LIFT),
                color,
                life: 1.0,
                decay: self.rng.random_range(0.025..0.055),
                size: (2 + self.rng.random_range(0..3) * 2) as f32,
            });
        }
    }

    /// Advance one rendered frame
    pub fn update(&mut self) {
        for p in self.particles.iter_mut() {
            p.pos += p.vel;
            p.vel.y += GRAVITY;
            p.vel.x *= DRAG;
            p.life -= p.decay;
        }
        self.particles.retain(|p| p.life > 0.0);
    }
}
