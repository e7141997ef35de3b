//! Food placement

use rand::Rng;

use super::grid::GridPos;
use crate::config::MAX_DIMENSION;
use crate::consts::MAX_FOOD_PLACEMENT_ATTEMPTS;

#[derive(Debug, Clone)]
pub struct Food {
    position: GridPos,
}

impl Food {
    /// Spawn on a random free cell. A board with no free cell falls back to
    /// the origin.
    pub fn new<R: Rng + ?Sized>(cols: u32, rows: u32, exclude: &[GridPos], rng: &mut R) -> Self {
        let position = random_free_cell(cols, rows, exclude, rng).unwrap_or_else(|| {
            log::warn!("No free cell for food on a {}x{} board", cols, rows);
            GridPos::default()
        });
        Self { position }
    }

    pub fn position(&self) -> GridPos {
        self.position
    }

    pub fn set_position(&mut self, pos: GridPos) {
        self.position = pos;
    }

    /// Move to a new random free cell, staying put if the board is full
    pub fn respawn<R: Rng + ?Sized>(&mut self, cols: u32, rows: u32, exclude: &[GridPos], rng: &mut R) {
        match random_free_cell(cols, rows, exclude, rng) {
            Some(pos) => self.position = pos,
            None => log::warn!(
                "No free cell for food on a {}x{} board, keeping {:?}",
                cols,
                rows,
                self.position
            ),
        }
    }
}

/// Pick a uniformly random cell outside `exclude`.
///
/// Rejection sampling is capped; after that the first free cell in
/// row-major order is used so a crowded board still terminates.
fn random_free_cell<R: Rng + ?Sized>(
    cols: u32,
    rows: u32,
    exclude: &[GridPos],
    rng: &mut R,
) -> Option<GridPos> {
    if cols == 0 || rows == 0 {
        return None;
    }
    // Coordinates are i32; cells past that edge are unreachable
    let cols = cols.min(MAX_DIMENSION);
    let rows = rows.min(MAX_DIMENSION);

    for _ in 0..MAX_FOOD_PLACEMENT_ATTEMPTS {
        let pos = GridPos::new(
            rng.random_range(0..cols) as i32,
            rng.random_range(0..rows) as i32,
        );
        if !exclude.contains(&pos) {
            return Some(pos);
        }
    }

    log::debug!("Food sampling exhausted, scanning for a free cell");
    (0..rows as i32)
        .flat_map(|y| (0..cols as i32).map(move |x| GridPos::new(x, y)))
        .find(|pos| !exclude.contains(pos))
}
