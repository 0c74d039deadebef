use std::fmt;

use crate::infra::{DiggerError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Four-connected neighbours, in the order left, right, up, down.
    pub fn neighbors(&self) -> [Position; 4] {
        [
            Position::new(self.x - 1, self.y), // Left
            Position::new(self.x + 1, self.y), // Right
            Position::new(self.x, self.y - 1), // Up
            Position::new(self.x, self.y + 1), // Down
        ]
    }

    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.distance(other) == 1
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Position {
        Position::new(self.x + dx, self.y + dy)
    }

    pub fn step(&self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Inclusive rectangle of positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl Bounds {
    pub fn new(min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Smallest bounds covering every position, or None for an empty set.
    pub fn enclosing<'a, I>(positions: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Position>,
    {
        positions.into_iter().fold(None, |bounds, pos| {
            Some(match bounds {
                None => Bounds::new(pos.x, pos.x, pos.y, pos.y),
                Some(b) => Bounds::new(
                    b.min_x.min(pos.x),
                    b.max_x.max(pos.x),
                    b.min_y.min(pos.y),
                    b.max_y.max(pos.y),
                ),
            })
        })
    }

    pub fn expand(&self, margin: i32) -> Self {
        Bounds::new(
            self.min_x - margin,
            self.max_x + margin,
            self.min_y - margin,
            self.max_y + margin,
        )
    }

    pub fn contains(&self, pos: &Position) -> bool {
        pos.x >= self.min_x && pos.x <= self.max_x && pos.y >= self.min_y && pos.y <= self.max_y
    }
}

/// The four moves a digger can answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    /// Direction of a single axis-aligned unit step.
    pub fn from_delta(dx: i32, dy: i32) -> Result<Self> {
        match (dx, dy) {
            (-1, 0) => Ok(Direction::Left),
            (1, 0) => Ok(Direction::Right),
            (0, -1) => Ok(Direction::Up),
            (0, 1) => Ok(Direction::Down),
            _ => Err(DiggerError::InvalidMoveDelta { dx, dy }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_unit_deltas() {
        for direction in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            let (dx, dy) = direction.delta();
            assert_eq!(Direction::from_delta(dx, dy).unwrap(), direction);
        }
    }

    #[test]
    fn test_direction_rejects_non_unit_delta() {
        for (dx, dy) in [(0, 0), (1, 1), (2, 0), (0, -2), (-1, 1)] {
            let err = Direction::from_delta(dx, dy).unwrap_err();
            assert!(
                matches!(err, DiggerError::InvalidMoveDelta { dx: a, dy: b } if a == dx && b == dy),
                "Delta ({}, {}) should be rejected",
                dx,
                dy
            );
        }
    }

    #[test]
    fn test_bounds_enclosing() {
        let positions = [Position::new(2, -1), Position::new(-3, 4), Position::new(0, 0)];
        let bounds = Bounds::enclosing(&positions).unwrap();
        assert_eq!(bounds, Bounds::new(-3, 2, -1, 4));
        assert!(bounds.contains(&Position::new(-3, 4)));
        assert!(!bounds.contains(&Position::new(3, 0)));
        assert!(Bounds::enclosing(&Vec::<Position>::new()).is_none());
    }

    #[test]
    fn test_step_matches_neighbors() {
        let pos = Position::new(5, 5);
        let stepped = [
            pos.step(Direction::Left),
            pos.step(Direction::Right),
            pos.step(Direction::Up),
            pos.step(Direction::Down),
        ];
        assert_eq!(stepped, pos.neighbors());
        assert!(stepped.iter().all(|p| p.is_adjacent(&pos)));
    }
}
