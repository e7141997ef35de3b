//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete step per tick, no wall-clock reads
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod food;
pub mod grid;
pub mod history;
pub mod snake;
pub mod state;
pub mod tick;

pub use food::Food;
pub use grid::{Direction, GridPos};
pub use history::{History, Snapshot};
pub use snake::Snake;
pub use state::{GameEvent, GamePhase, ParticleBurst, World};
pub use tick::{StepOutcome, step, tick_interval_ms};
