//! The player's snake
//!
//! Body is stored head-first. The heading only changes when the snake
//! actually moves, so at most one turn lands per tick no matter how many
//! inputs arrive in between.

use super::grid::{Direction, GridPos};

/// Segments in a freshly spawned snake
pub const START_LENGTH: usize = 3;

#[derive(Debug, Clone)]
pub struct Snake {
    /// Segments, head first
    body: Vec<GridPos>,
    /// Heading used by the last move
    direction: Direction,
    /// Heading the next move will commit (last write wins)
    pending: Direction,
}

impl Snake {
    /// Horizontal 3-segment snake with its head at (x, y), facing right
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            body: start_body(x, y),
            direction: Direction::Right,
            pending: Direction::Right,
        }
    }

    pub fn body(&self) -> &[GridPos] {
        &self.body
    }

    pub fn head(&self) -> GridPos {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending
    }

    /// Cell the head will enter on the next move
    pub fn next_head(&self) -> GridPos {
        self.head().step(self.pending)
    }

    /// Queue a turn. Reversing straight into the neck is silently ignored.
    pub fn set_direction(&mut self, dir: Direction) {
        if dir != self.direction.opposite() {
            self.pending = dir;
        }
    }

    /// Advance one cell, keeping the tail when growing
    pub fn move_forward(&mut self, grow: bool) {
        self.direction = self.pending;
        let new_head = self.head().step(self.direction);
        self.body.insert(0, new_head);
        if !grow {
            self.body.pop();
        }
    }

    pub fn hits_self(&self) -> bool {
        let head = self.head();
        self.body[1..].contains(&head)
    }

    pub fn hits_wall(&self, cols: u32, rows: u32) -> bool {
        !self.head().in_bounds(cols, rows)
    }

    pub fn reset(&mut self, x: i32, y: i32) {
        self.body = start_body(x, y);
        self.direction = Direction::Right;
        self.pending = Direction::Right;
    }

    /// Overwrite body and heading from a recorded snapshot.
    ///
    /// No movement rules are applied; the caller supplies a body that was
    /// valid when it was captured. An empty body is ignored.
    pub fn restore(&mut self, body: &[GridPos], direction: Direction) {
        if body.is_empty() {
            log::warn!("Ignoring restore with an empty body");
            return;
        }
        self.body = body.to_vec();
        self.direction = direction;
        self.pending = direction;
    }
}

fn start_body(x: i32, y: i32) -> Vec<GridPos> {
    (0..START_LENGTH as i32)
        .map(|i| GridPos::new(x - i, y))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn direction_strategy() -> impl Strategy<Value = Direction> {
        prop::sample::select(Direction::ALL.to_vec())
    }

    /// Snake heading `dir` with nothing pending
    fn snake_facing(dir: Direction) -> Snake {
        let mut snake = Snake::new(10, 10);
        snake.restore(&[GridPos::new(10, 10), GridPos::new(9, 10), GridPos::new(8, 10)], dir);
        snake
    }

    #[test]
    fn test_new_layout() {
        let snake = Snake::new(12, 10);
        assert_eq!(
            snake.body(),
            &[GridPos::new(12, 10), GridPos::new(11, 10), GridPos::new(10, 10)]
        );
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.pending_direction(), Direction::Right);
    }

    #[test]
    fn test_reverse_rejected() {
        let mut snake = Snake::new(12, 10);
        snake.set_direction(Direction::Left);
        assert_eq!(snake.pending_direction(), Direction::Right);
        snake.set_direction(Direction::Up);
        assert_eq!(snake.pending_direction(), Direction::Up);
    }

    #[test]
    fn test_reverse_checked_against_current_not_pending() {
        let mut snake = Snake::new(12, 10);
        // Down then Up within one tick: Up reverses the pending heading but
        // not the current one, so it is accepted.
        snake.set_direction(Direction::Down);
        snake.set_direction(Direction::Up);
        assert_eq!(snake.pending_direction(), Direction::Up);
        // Left still reverses the current heading
        snake.set_direction(Direction::Left);
        assert_eq!(snake.pending_direction(), Direction::Up);
    }

    #[test]
    fn test_turn_commits_on_move() {
        let mut snake = Snake::new(12, 10);
        snake.set_direction(Direction::Down);
        assert_eq!(snake.direction(), Direction::Right);
        snake.move_forward(false);
        assert_eq!(snake.direction(), Direction::Down);
        assert_eq!(snake.head(), GridPos::new(12, 11));
    }

    #[test]
    fn test_move_without_growth_drops_tail() {
        let mut snake = Snake::new(12, 10);
        snake.move_forward(false);
        assert_eq!(snake.len(), 3);
        assert_eq!(
            snake.body(),
            &[GridPos::new(13, 10), GridPos::new(12, 10), GridPos::new(11, 10)]
        );
    }

    #[test]
    fn test_move_with_growth_keeps_tail() {
        let mut snake = Snake::new(12, 10);
        snake.move_forward(true);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.body()[3], GridPos::new(10, 10));
        assert_eq!(snake.head(), GridPos::new(13, 10));
    }

    #[test]
    fn test_self_collision() {
        let mut snake = Snake::new(0, 0);
        snake.restore(
            &[
                GridPos::new(5, 5),
                GridPos::new(4, 5),
                GridPos::new(3, 5),
                GridPos::new(5, 5),
            ],
            Direction::Right,
        );
        assert!(snake.hits_self());

        let snake = Snake::new(12, 10);
        assert!(!snake.hits_self());
    }

    #[test]
    fn test_wall_collision() {
        let (cols, rows) = (25, 20);
        let mut snake = Snake::new(0, 0);
        for head in [
            GridPos::new(-1, 5),
            GridPos::new(cols as i32, 5),
            GridPos::new(5, -1),
            GridPos::new(5, rows as i32),
        ] {
            snake.restore(&[head], Direction::Right);
            assert!(snake.hits_wall(cols, rows), "{head:?} should be outside");
        }
        for head in [GridPos::new(0, 0), GridPos::new(24, 19), GridPos::new(12, 10)] {
            snake.restore(&[head], Direction::Right);
            assert!(!snake.hits_wall(cols, rows), "{head:?} should be inside");
        }
    }

    #[test]
    fn test_restore_is_a_copy() {
        let mut snake = Snake::new(12, 10);
        let mut recorded = vec![GridPos::new(3, 3), GridPos::new(3, 4), GridPos::new(3, 5)];
        snake.restore(&recorded, Direction::Up);
        recorded[0] = GridPos::new(0, 0);
        assert_eq!(snake.head(), GridPos::new(3, 3));
        assert_eq!(snake.direction(), Direction::Up);
        assert_eq!(snake.pending_direction(), Direction::Up);
    }

    #[test]
    fn test_reset_restores_start_layout() {
        let mut snake = Snake::new(12, 10);
        snake.set_direction(Direction::Up);
        snake.move_forward(true);
        snake.reset(12, 10);
        assert_eq!(snake.len(), START_LENGTH);
        assert_eq!(snake.head(), GridPos::new(12, 10));
        assert_eq!(snake.direction(), Direction::Right);
    }

    proptest! {
        #[test]
        fn prop_opposite_never_queued(current in direction_strategy()) {
            let mut snake = snake_facing(current);
            snake.set_direction(current.opposite());
            prop_assert_eq!(snake.pending_direction(), current);
        }

        #[test]
        fn prop_non_opposite_always_queued(current in direction_strategy(), next in direction_strategy()) {
            prop_assume!(next != current.opposite());
            let mut snake = snake_facing(current);
            snake.set_direction(next);
            prop_assert_eq!(snake.pending_direction(), next);
        }
    }
}
