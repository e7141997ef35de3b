//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (keys, swipes) translated into game intents
//! - Storage (LocalStorage on web) for the best score

pub mod input;
pub mod storage;

pub use input::{InputState, KeyAction, Swipe, map_key};
pub use storage::{BestScore, parse_best_score};
