//! Rewind history
//!
//! One snapshot per completed tick of the current run. Snapshots are deep
//! copies, so nothing in the ledger aliases the live snake.

use serde::{Deserialize, Serialize};

use super::food::Food;
use super::grid::{Direction, GridPos};
use super::snake::Snake;

/// Full simulation state at the end of one tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub body: Vec<GridPos>,
    pub direction: Direction,
    pub food: GridPos,
    pub score: u32,
}

impl Snapshot {
    pub fn capture(snake: &Snake, food: &Food, score: u32) -> Self {
        Self {
            body: snake.body().to_vec(),
            direction: snake.direction(),
            food: food.position(),
            score,
        }
    }
}

/// Ordered snapshots of the current run, oldest first
#[derive(Debug, Clone, Default)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    /// Keep `[0, index]` and drop everything after it.
    ///
    /// Indices past the end leave the ledger untouched.
    pub fn truncate_at(&mut self, index: usize) {
        self.snapshots.truncate(index.saturating_add(1));
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    pub fn latest(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// Index of the newest snapshot, `None` when empty
    pub fn last_index(&self) -> Option<usize> {
        self.snapshots.len().checked_sub(1)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn ledger_of(n: u32) -> History {
        let mut history = History::new();
        for score in 0..n {
            history.push(Snapshot {
                body: vec![GridPos::new(score as i32, 0)],
                direction: Direction::Right,
                food: GridPos::new(0, 5),
                score,
            });
        }
        history
    }

    #[test]
    fn test_capture_is_deep_copy() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut snake = Snake::new(12, 10);
        let mut food = Food::new(25, 20, snake.body(), &mut rng);
        let snap = Snapshot::capture(&snake, &food, 30);

        snake.move_forward(true);
        food.set_position(GridPos::new(0, 0));

        assert_eq!(snap.body, vec![GridPos::new(12, 10), GridPos::new(11, 10), GridPos::new(10, 10)]);
        assert_ne!(snap.food, GridPos::new(0, 0));
        assert_eq!(snap.score, 30);
        assert_eq!(snap.direction, Direction::Right);
    }

    #[test]
    fn test_truncate_then_append() {
        let mut history = ledger_of(10);
        history.truncate_at(4);
        assert_eq!(history.len(), 5);
        assert_eq!(history.latest().map(|s| s.score), Some(4));

        history.push(Snapshot {
            body: vec![GridPos::new(99, 0)],
            direction: Direction::Up,
            food: GridPos::new(1, 1),
            score: 99,
        });
        assert_eq!(history.len(), 6);
        assert_eq!(history.get(5).map(|s| s.score), Some(99));
    }

    #[test]
    fn test_truncate_past_end_is_noop() {
        let mut history = ledger_of(3);
        history.truncate_at(10);
        assert_eq!(history.len(), 3);
        history.truncate_at(usize::MAX);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_last_index_and_clear() {
        let mut history = ledger_of(3);
        assert_eq!(history.last_index(), Some(2));
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.last_index(), None);
        assert!(history.latest().is_none());
    }
}
