//! Grid primitives: cell positions and headings

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A cell coordinate on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `dir`
    #[inline]
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.offset();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Whether the cell lies inside a `cols` x `rows` board
    #[inline]
    pub fn in_bounds(self, cols: u32, rows: u32) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as i64) < cols as i64 && (self.y as i64) < rows as i64
    }

    /// Pixel-space centre of the cell
    pub fn pixel_center(self, cell_size: u32) -> Vec2 {
        let cs = cell_size as f32;
        Vec2::new(self.x as f32 * cs + cs / 2.0, self.y as f32 * cs + cs / 2.0)
    }
}

/// Snake heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit vector in grid space (y grows downward)
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involution() {
        for dir in Direction::ALL {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_step_follows_offset() {
        let p = GridPos::new(5, 5);
        assert_eq!(p.step(Direction::Up), GridPos::new(5, 4));
        assert_eq!(p.step(Direction::Down), GridPos::new(5, 6));
        assert_eq!(p.step(Direction::Left), GridPos::new(4, 5));
        assert_eq!(p.step(Direction::Right), GridPos::new(6, 5));
    }

    #[test]
    fn test_in_bounds_edges() {
        assert!(GridPos::new(0, 0).in_bounds(25, 20));
        assert!(GridPos::new(24, 19).in_bounds(25, 20));
        assert!(!GridPos::new(-1, 0).in_bounds(25, 20));
        assert!(!GridPos::new(25, 0).in_bounds(25, 20));
        assert!(!GridPos::new(0, 20).in_bounds(25, 20));
    }

    #[test]
    fn test_pixel_center() {
        let c = GridPos::new(2, 3).pixel_center(28);
        assert!((c.x - 70.0).abs() < 0.001);
        assert!((c.y - 98.0).abs() < 0.001);
    }
}
