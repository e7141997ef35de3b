//! Rewind Snake - grid snake with a rewind timeline
//!
//! Core modules:
//! - `sim`: Deterministic simulation (snake, food, history, tick)
//! - `game`: State machine driving the simulation and the rewind cursor
//! - `config`: Board size and pacing
//! - `particles`: Cosmetic particle bursts
//! - `platform`: Input translation and best-score storage
//! - `renderer`: Overlay text and the browser canvas renderer

pub mod config;
pub mod game;
pub mod particles;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use game::{Game, RenderView, Timeline};
pub use particles::ParticleSystem;

/// Game configuration constants
pub mod consts {
    /// Points awarded per food
    pub const SCORE_PER_FOOD: u32 = 10;
    /// Tick interval shrinks by this much per point scored
    pub const SPEEDUP_MS_PER_POINT: f64 = 0.5;
    /// Fastest allowed tick interval
    pub const MIN_TICK_INTERVAL_MS: f64 = 80.0;
    /// Longest frame delta accepted by one `advance` call (tab switches, stalls)
    pub const MAX_FRAME_MS: f64 = 250.0;

    /// Ledger entries moved per scrub pulse
    pub const REWIND_SCRUB_STEP: usize = 1;

    /// Random placement tries before falling back to a linear scan
    pub const MAX_FOOD_PLACEMENT_ATTEMPTS: u32 = 64;

    /// Particles spawned when food is eaten
    pub const FOOD_PARTICLE_COUNT: u32 = 14;
    /// RGB colours for food particles
    pub const FOOD_PARTICLE_PALETTE: [u32; 5] = [0xff4444, 0xff8844, 0xffcc00, 0x00ff88, 0xffffff];
}
