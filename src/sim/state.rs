//! Game phases, events, and the live simulation world

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::food::Food;
use super::grid::GridPos;
use super::history::Snapshot;
use super::snake::Snake;
use crate::config::GameConfig;
use crate::consts::{FOOD_PARTICLE_COUNT, FOOD_PARTICLE_PALETTE};

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first input
    Idle,
    /// Live simulation
    Running,
    /// Frozen by the player
    Paused,
    /// Dead; scrubbing through history. The newest entry is the last safe frame.
    Rewind,
}

/// A burst request for the particle layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleBurst {
    /// Pixel-space origin
    pub origin: Vec2,
    pub count: u32,
    pub palette: &'static [u32],
}

impl ParticleBurst {
    pub fn food(origin: Vec2) -> Self {
        Self {
            origin,
            count: FOOD_PARTICLE_COUNT,
            palette: &FOOD_PARTICLE_PALETTE,
        }
    }
}

/// Things the platform layer reacts to (particles, storage, sound)
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Started,
    FoodEaten { cell: GridPos, burst: ParticleBurst },
    NewBestScore(u32),
    Died { score: u32, rewind_index: usize },
    Resumed { index: usize, score: u32 },
    Restarted,
}

/// Live entities plus the gameplay RNG
#[derive(Debug, Clone)]
pub struct World {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub best_score: u32,
    rng: Pcg32,
}

impl World {
    pub fn new(config: &GameConfig, best_score: u32, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let (x, y) = config.start_cell();
        let snake = Snake::new(x, y);
        let food = Food::new(config.columns, config.rows, snake.body(), &mut rng);
        Self {
            snake,
            food,
            score: 0,
            best_score,
            rng,
        }
    }

    /// Fresh snake, fresh food, zero score. The RNG keeps its stream.
    pub fn reset(&mut self, config: &GameConfig) {
        let (x, y) = config.start_cell();
        self.snake.reset(x, y);
        self.food
            .respawn(config.columns, config.rows, self.snake.body(), &mut self.rng);
        self.score = 0;
    }

    pub fn respawn_food(&mut self, config: &GameConfig) {
        self.food
            .respawn(config.columns, config.rows, self.snake.body(), &mut self.rng);
    }

    /// Overwrite snake, food and score from a recorded tick
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.snake.restore(&snapshot.body, snapshot.direction);
        self.food.set_position(snapshot.food);
        self.score = snapshot.score;
    }

    pub fn capture(&self) -> Snapshot {
        Snapshot::capture(&self.snake, &self.food, self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::Direction;

    #[test]
    fn test_new_world_layout() {
        let config = GameConfig::default();
        let world = World::new(&config, 70, 1);
        assert_eq!(world.snake.head(), GridPos::new(12, 10));
        assert!(!world.snake.body().contains(&world.food.position()));
        assert_eq!(world.score, 0);
        assert_eq!(world.best_score, 70);
    }

    #[test]
    fn test_same_seed_same_food() {
        let config = GameConfig::default();
        let a = World::new(&config, 0, 1234);
        let b = World::new(&config, 0, 1234);
        assert_eq!(a.food.position(), b.food.position());
    }

    #[test]
    fn test_restore_round_trip() {
        let config = GameConfig::default();
        let mut world = World::new(&config, 0, 5);
        let snapshot = Snapshot {
            body: vec![GridPos::new(3, 3), GridPos::new(3, 4), GridPos::new(3, 5), GridPos::new(3, 6)],
            direction: Direction::Up,
            food: GridPos::new(8, 8),
            score: 40,
        };
        world.restore(&snapshot);
        assert_eq!(world.capture(), snapshot);
    }

    #[test]
    fn test_food_burst_uses_fixed_palette() {
        let burst = ParticleBurst::food(Vec2::new(1.0, 2.0));
        assert_eq!(burst.count, 14);
        assert_eq!(burst.palette, &FOOD_PARTICLE_PALETTE[..]);
    }
}
