//! One discrete simulation step
//!
//! Movement, eating, scoring and collision for a single tick. The game
//! state machine decides when to call this; nothing here looks at time.

use super::history::History;
use super::state::{GameEvent, ParticleBurst, World};
use crate::config::GameConfig;
use crate::consts::{MIN_TICK_INTERVAL_MS, SCORE_PER_FOOD, SPEEDUP_MS_PER_POINT};

/// How a tick ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Snake is alive and the tick was recorded
    Alive { ate: bool },
    /// Head hit a wall or the body; nothing was recorded
    Collided,
}

/// Tick interval for a given score: faster as the score climbs, never below
/// `MIN_TICK_INTERVAL_MS`.
pub fn tick_interval_ms(base_speed_ms: u32, score: u32) -> f64 {
    (base_speed_ms as f64 - score as f64 * SPEEDUP_MS_PER_POINT).max(MIN_TICK_INTERVAL_MS)
}

/// Advance the world by one tick and record it.
///
/// Eating is decided from the cell the head is about to enter, read before
/// anything moves. A fatal tick leaves the ledger untouched so its newest
/// entry is the last safe frame.
pub fn step(
    world: &mut World,
    history: &mut History,
    config: &GameConfig,
    events: &mut Vec<GameEvent>,
) -> StepOutcome {
    let food = world.food.position();
    let ate = world.snake.next_head() == food;

    world.snake.move_forward(ate);

    if ate {
        world.score += SCORE_PER_FOOD;
        if world.score > world.best_score {
            world.best_score = world.score;
            events.push(GameEvent::NewBestScore(world.best_score));
        }
        events.push(GameEvent::FoodEaten {
            cell: food,
            burst: ParticleBurst::food(food.pixel_center(config.cell_size)),
        });
        world.respawn_food(config);
        log::debug!("Ate food at {:?}, score {}", food, world.score);
    }

    if world.snake.hits_wall(config.columns, config.rows) || world.snake.hits_self() {
        log::debug!("Collision at {:?}", world.snake.head());
        return StepOutcome::Collided;
    }

    history.push(world.capture());
    StepOutcome::Alive { ate }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::{Direction, GridPos};
    use crate::sim::history::Snapshot;
    use proptest::prelude::*;

    fn setup() -> (World, History, GameConfig) {
        let config = GameConfig::default();
        let world = World::new(&config, 0, 42);
        let mut history = History::new();
        history.push(world.capture());
        (world, history, config)
    }

    #[test]
    fn test_speed_curve() {
        assert_eq!(tick_interval_ms(200, 0), 200.0);
        assert_eq!(tick_interval_ms(200, 100), 150.0);
        assert_eq!(tick_interval_ms(200, 240), 80.0);
        assert_eq!(tick_interval_ms(200, 300), 80.0);
        assert_eq!(tick_interval_ms(60, 0), 80.0);
    }

    #[test]
    fn test_plain_move_records_tick() {
        let (mut world, mut history, config) = setup();
        world.food.set_position(GridPos::new(0, 0));
        let mut events = Vec::new();

        let outcome = step(&mut world, &mut history, &config, &mut events);
        assert_eq!(outcome, StepOutcome::Alive { ate: false });
        assert_eq!(history.len(), 2);
        assert_eq!(history.latest().map(|s| s.body[0]), Some(GridPos::new(13, 10)));
        assert!(events.is_empty());
    }

    #[test]
    fn test_eating_grows_and_scores() {
        let (mut world, mut history, config) = setup();
        world.food.set_position(GridPos::new(13, 10));
        let mut events = Vec::new();

        let outcome = step(&mut world, &mut history, &config, &mut events);
        assert_eq!(outcome, StepOutcome::Alive { ate: true });
        assert_eq!(world.score, 10);
        assert_eq!(world.best_score, 10);
        assert_eq!(world.snake.len(), 4);
        assert_ne!(world.food.position(), GridPos::new(13, 10));
        assert!(!world.snake.body().contains(&world.food.position()));

        assert_eq!(events[0], GameEvent::NewBestScore(10));
        match &events[1] {
            GameEvent::FoodEaten { cell, burst } => {
                assert_eq!(*cell, GridPos::new(13, 10));
                assert_eq!(burst.count, 14);
                assert!((burst.origin.x - (13.0 * 28.0 + 14.0)).abs() < 0.001);
                assert!((burst.origin.y - (10.0 * 28.0 + 14.0)).abs() < 0.001);
            }
            other => panic!("expected FoodEaten, got {other:?}"),
        }
    }

    #[test]
    fn test_best_score_only_when_exceeded() {
        let config = GameConfig::default();
        let mut world = World::new(&config, 500, 42);
        let mut history = History::new();
        world.food.set_position(GridPos::new(13, 10));
        let mut events = Vec::new();
        step(&mut world, &mut history, &config, &mut events);
        assert_eq!(world.best_score, 500);
        assert!(!events.iter().any(|e| matches!(e, GameEvent::NewBestScore(_))));
    }

    #[test]
    fn test_eating_uses_pending_turn() {
        let (mut world, mut history, config) = setup();
        world.food.set_position(GridPos::new(12, 9));
        world.snake.set_direction(Direction::Up);
        let mut events = Vec::new();
        let outcome = step(&mut world, &mut history, &config, &mut events);
        assert_eq!(outcome, StepOutcome::Alive { ate: true });
        assert_eq!(world.snake.head(), GridPos::new(12, 9));
    }

    #[test]
    fn test_wall_collision_not_recorded() {
        let (mut world, mut history, config) = setup();
        world.food.set_position(GridPos::new(0, 0));
        world.snake.restore(
            &[GridPos::new(24, 5), GridPos::new(23, 5), GridPos::new(22, 5)],
            Direction::Right,
        );
        let mut events = Vec::new();
        let before = history.len();

        let outcome = step(&mut world, &mut history, &config, &mut events);
        assert_eq!(outcome, StepOutcome::Collided);
        assert_eq!(history.len(), before);
        assert_eq!(world.snake.head(), GridPos::new(25, 5));
    }

    #[test]
    fn test_self_collision_not_recorded() {
        let (mut world, mut history, config) = setup();
        world.food.set_position(GridPos::new(0, 0));
        // Hook shape: turning down runs into the body
        world.snake.restore(
            &[
                GridPos::new(5, 5),
                GridPos::new(4, 5),
                GridPos::new(4, 6),
                GridPos::new(5, 6),
                GridPos::new(6, 6),
            ],
            Direction::Right,
        );
        world.snake.set_direction(Direction::Down);
        let mut events = Vec::new();
        let outcome = step(&mut world, &mut history, &config, &mut events);
        assert_eq!(outcome, StepOutcome::Collided);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_chasing_tail_is_safe() {
        let (mut world, mut history, config) = setup();
        world.food.set_position(GridPos::new(0, 0));
        // 2x2 loop: head moves into the cell the tail is leaving
        world.snake.restore(
            &[
                GridPos::new(5, 5),
                GridPos::new(5, 6),
                GridPos::new(6, 6),
                GridPos::new(6, 5),
            ],
            Direction::Up,
        );
        world.snake.set_direction(Direction::Right);
        let mut events = Vec::new();
        let outcome = step(&mut world, &mut history, &config, &mut events);
        assert_eq!(outcome, StepOutcome::Alive { ate: false });
    }

    #[test]
    fn test_recorded_snapshot_matches_world() {
        let (mut world, mut history, config) = setup();
        world.food.set_position(GridPos::new(0, 0));
        let mut events = Vec::new();
        step(&mut world, &mut history, &config, &mut events);
        let expected: Snapshot = world.capture();
        assert_eq!(history.latest(), Some(&expected));
    }

    proptest! {
        #[test]
        fn prop_interval_floored_and_monotonic(base in 1u32..2000, score in 0u32..100_000) {
            let now = tick_interval_ms(base, score);
            let later = tick_interval_ms(base, score + SCORE_PER_FOOD);
            prop_assert!(now >= MIN_TICK_INTERVAL_MS);
            prop_assert!(later <= now);
        }
    }
}
