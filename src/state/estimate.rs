//! Belief about where the goal is.
//!
//! Each axis of the goal position is an [`UncertainScalar`]: a small set of
//! still-possible values that collapses to one value once some disclosure
//! pins it down. Nothing here ever guesses at random; a value is either
//! resolved or the caller asks explicitly for a working hypothesis.

use std::fmt;

use crate::infra::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const BOTH: [Axis; 2] = [Axis::X, Axis::Y];

    pub fn of(self, pos: Position) -> i32 {
        match self {
            Axis::X => pos.x,
            Axis::Y => pos.y,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }
}

/// One coordinate of the goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UncertainScalar {
    /// Two or more candidates, in the order they were seeded.
    Unresolved(Vec<i32>),
    Resolved(i32),
}

impl UncertainScalar {
    pub fn new(first: i32, second: i32) -> Self {
        if first == second {
            UncertainScalar::Resolved(first)
        } else {
            UncertainScalar::Unresolved(vec![first, second])
        }
    }

    pub fn known(value: i32) -> Self {
        UncertainScalar::Resolved(value)
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, UncertainScalar::Resolved(_))
    }

    /// Collapse to `value`, whatever the candidates were.
    pub fn determine(&mut self, value: i32) {
        *self = UncertainScalar::Resolved(value);
    }

    pub fn resolved(&self) -> Option<i32> {
        match self {
            UncertainScalar::Resolved(value) => Some(*value),
            UncertainScalar::Unresolved(_) => None,
        }
    }

    pub fn candidates(&self) -> &[i32] {
        match self {
            UncertainScalar::Resolved(value) => std::slice::from_ref(value),
            UncertainScalar::Unresolved(values) => values,
        }
    }

    /// The candidate closest to `to`; ties go to the earliest-seeded one.
    pub fn nearest_candidate(&self, to: i32) -> i32 {
        match self {
            UncertainScalar::Resolved(value) => *value,
            UncertainScalar::Unresolved(values) => values
                .iter()
                .copied()
                .reduce(|best, v| {
                    if (v - to).abs() < (best - to).abs() {
                        v
                    } else {
                        best
                    }
                })
                .unwrap_or(to),
        }
    }
}

impl fmt::Display for UncertainScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UncertainScalar::Resolved(value) => write!(f, "{}", value),
            UncertainScalar::Unresolved(values) => {
                let joined: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                write!(f, "{{{}}}", joined.join("|"))
            }
        }
    }
}

/// Where the goal may be, one scalar per axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalEstimate {
    x: UncertainScalar,
    y: UncertainScalar,
}

impl GoalEstimate {
    /// Seed from a distance report taken at `origin`; distances are made absolute.
    pub fn seed(origin: Position, distance: [i32; 2]) -> Self {
        let [dx, dy] = distance.map(i32::abs);
        Self {
            x: UncertainScalar::new(origin.x + dx, origin.x - dx),
            y: UncertainScalar::new(origin.y + dy, origin.y - dy),
        }
    }

    pub fn axis(&self, axis: Axis) -> &UncertainScalar {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    pub fn axis_mut(&mut self, axis: Axis) -> &mut UncertainScalar {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.x.is_resolved() && self.y.is_resolved()
    }

    /// The goal position, once both axes are known.
    pub fn resolved(&self) -> Option<Position> {
        Some(Position::new(self.x.resolved()?, self.y.resolved()?))
    }

    /// Best current guess of the goal as seen from `from`.
    ///
    /// Resolved axes use their value; unresolved axes use the candidate
    /// nearest to `from`.
    pub fn target(&self, from: Position) -> Position {
        Position::new(
            self.x.nearest_candidate(from.x),
            self.y.nearest_candidate(from.y),
        )
    }

    /// Every position the goal may still occupy, nearest to `from` first.
    ///
    /// Equally distant positions keep seeding order, x before y.
    pub fn candidate_positions(&self, from: Position) -> Vec<Position> {
        let mut positions: Vec<Position> = self
            .x
            .candidates()
            .iter()
            .flat_map(|&x| self.y.candidates().iter().map(move |&y| Position::new(x, y)))
            .collect();
        positions.sort_by_key(|pos| pos.distance(&from));
        positions
    }
}

impl fmt::Display for GoalEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
