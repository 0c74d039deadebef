//! Narrowing down the goal position from what a single turn discloses.
//!
//! Four rules are tried in a fixed order. A rule only touches axes that are
//! still unresolved and simply does nothing when its inputs do not pin a
//! coordinate down.

use tracing::debug;

use crate::infra::{Direction, Position};
use crate::state::{Axis, GoalEstimate, Surroundings};

/// The rule that resolved an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The goal is in the 3x3 window
    Sighting,
    /// Zero distance on the axis
    SharedAxis,
    /// An edge next to the digger bounds the board on that side
    Edge,
    /// The total distance changed after the last move
    Movement,
}

/// The previous turn's move and the distance reported before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastMove {
    pub direction: Direction,
    pub distance: [i32; 2],
}

/// Everything known about the current turn.
#[derive(Debug, Clone, Copy)]
pub struct TurnFacts<'a> {
    /// Where the digger stands now, after the last move was applied
    pub position: Position,
    /// Absolute per-axis distance to the goal
    pub distance: [i32; 2],
    pub surroundings: &'a Surroundings,
    pub last_move: Option<LastMove>,
}

impl TurnFacts<'_> {
    fn distance_on(&self, axis: Axis) -> i32 {
        self.distance[axis.index()]
    }
}

pub struct GoalInference;

impl GoalInference {
    /// Apply every rule to `estimate`, returning the axes resolved this turn.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn refine(estimate: &mut GoalEstimate, facts: &TurnFacts) -> Vec<(Axis, Rule)> {
        let mut resolved = Vec::new();

        // Seeing the goal discloses everything
        if let Ok((dx, dy)) = facts.surroundings.goal_offset() {
            let goal = facts.position.offset(dx, dy);
            for axis in Axis::BOTH {
                Self::resolve(estimate, axis, axis.of(goal), Rule::Sighting, &mut resolved);
            }
            return resolved;
        }

        for axis in Axis::BOTH {
            if facts.distance_on(axis) == 0 {
                let value = axis.of(facts.position);
                Self::resolve(estimate, axis, value, Rule::SharedAxis, &mut resolved);
            }
        }

        if facts.surroundings.edge_visible() {
            for (axis, value) in Self::edge_disclosures(facts) {
                Self::resolve(estimate, axis, value, Rule::Edge, &mut resolved);
            }
        }

        if let Some((axis, value)) = Self::movement_disclosure(facts) {
            Self::resolve(estimate, axis, value, Rule::Movement, &mut resolved);
        }

        resolved
    }

    fn resolve(
        estimate: &mut GoalEstimate,
        axis: Axis,
        value: i32,
        rule: Rule,
        resolved: &mut Vec<(Axis, Rule)>,
    ) {
        let scalar = estimate.axis_mut(axis);
        if scalar.is_resolved() {
            return;
        }
        debug!("Goal {:?} = {} ({:?}, candidates were {})", axis, value, rule, scalar);
        scalar.determine(value);
        resolved.push((axis, rule));
    }

    /// A goal can only lie away from a board edge, so the distance fixes it.
    fn edge_disclosures(facts: &TurnFacts) -> Vec<(Axis, i32)> {
        let s = facts.surroundings;
        let [dx, dy] = facts.distance;
        let Position { x, y } = facts.position;

        [
            (s.edge_left(), Axis::X, x + dx),
            (s.edge_right(), Axis::X, x - dx),
            (s.edge_up(), Axis::Y, y + dy),
            (s.edge_down(), Axis::Y, y - dy),
        ]
        .into_iter()
        .filter(|(visible, ..)| *visible)
        .map(|(_, axis, value)| (axis, value))
        .collect()
    }

    /// Solve the axis the last move ran along from whether it brought the
    /// digger closer or farther.
    fn movement_disclosure(facts: &TurnFacts) -> Option<(Axis, i32)> {
        let last = facts.last_move?;
        let now: i32 = facts.distance.iter().sum();
        let before: i32 = last.distance.iter().map(|d| d.abs()).sum();
        if now == before {
            return None;
        }
        let sign = if now < before { 1 } else { -1 };

        let (mx, my) = last.direction.delta();
        let (axis, step) = if mx != 0 {
            (Axis::X, mx)
        } else if my != 0 {
            (Axis::Y, my)
        } else {
            return None;
        };

        let value = axis.of(facts.position) + facts.distance_on(axis) * step * sign;
        Some((axis, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open() -> Surroundings {
        Surroundings::from_rows(["OOO", "OPO", "OOO"])
    }

    #[test]
    fn test_sighting_resolves_both_axes() {
        let position = Position::new(4, 7);
        let mut estimate = GoalEstimate::seed(position, [1, 1]);
        let s = Surroundings::from_rows(["OOR", "OPO", "OOO"]);
        let facts = TurnFacts {
            position,
            distance: [1, 1],
            surroundings: &s,
            last_move: None,
        };

        let resolved = GoalInference::refine(&mut estimate, &facts);

        assert_eq!(estimate.resolved(), Some(Position::new(5, 6)));
        assert_eq!(resolved, vec![(Axis::X, Rule::Sighting), (Axis::Y, Rule::Sighting)]);
    }

    #[test]
    fn test_zero_distance_resolves_shared_axis() {
        let position = Position::new(2, 3);
        let mut estimate = GoalEstimate::seed(Position::new(0, 0), [2, 6]);
        let s = open();
        let facts = TurnFacts {
            position,
            distance: [0, 4],
            surroundings: &s,
            last_move: None,
        };

        let resolved = GoalInference::refine(&mut estimate, &facts);

        assert_eq!(estimate.axis(Axis::X).resolved(), Some(2));
        assert!(!estimate.axis(Axis::Y).is_resolved());
        assert_eq!(resolved, vec![(Axis::X, Rule::SharedAxis)]);
    }

    #[test]
    fn test_left_edge_pins_x_to_the_right() {
        // Initial report [3, -13] next to the left edge
        let position = Position::new(0, 0);
        let mut estimate = GoalEstimate::seed(position, [3, -13]);
        let s = Surroundings::from_rows(["EOO", "EPO", "EOO"]);
        let facts = TurnFacts {
            position,
            distance: [3, 13],
            surroundings: &s,
            last_move: None,
        };

        GoalInference::refine(&mut estimate, &facts);

        assert_eq!(estimate.axis(Axis::X).resolved(), Some(3));
        assert!(!estimate.axis(Axis::Y).is_resolved());
        assert_eq!(estimate.axis(Axis::Y).candidates(), &[13, -13]);
    }

    #[test]
    fn test_each_edge_direction() {
        let position = Position::new(10, 10);
        let cases = [
            (["OOO", "OPE", "OOO"], Axis::X, 7),
            (["OEO", "OPO", "OOO"], Axis::Y, 12),
            (["OOO", "OPO", "OEO"], Axis::Y, 8),
        ];
        for (rows, axis, expected) in cases {
            let mut estimate = GoalEstimate::seed(position, [3, 2]);
            let s = Surroundings::from_rows(rows);
            let facts = TurnFacts {
                position,
                distance: [3, 2],
                surroundings: &s,
                last_move: None,
            };
            GoalInference::refine(&mut estimate, &facts);
            assert_eq!(
                estimate.axis(axis).resolved(),
                Some(expected),
                "Surroundings {:?}",
                rows
            );
        }
    }

    #[test]
    fn test_diagonal_edge_discloses_nothing() {
        let position = Position::new(0, 0);
        let mut estimate = GoalEstimate::seed(position, [3, 2]);
        let s = Surroundings::from_rows(["EOO", "OPO", "OOO"]);
        let facts = TurnFacts {
            position,
            distance: [3, 2],
            surroundings: &s,
            last_move: None,
        };
        assert!(GoalInference::refine(&mut estimate, &facts).is_empty());
        assert!(!estimate.axis(Axis::X).is_resolved());
        assert!(!estimate.axis(Axis::Y).is_resolved());
    }

    #[test]
    fn test_moving_closer_resolves_towards_motion() {
        // Moved right from (0, 0) and the distance dropped from 4 to 3
        let position = Position::new(1, 0);
        let mut estimate = GoalEstimate::seed(Position::new(0, 0), [4, 5]);
        let s = open();
        let facts = TurnFacts {
            position,
            distance: [3, 5],
            surroundings: &s,
            last_move: Some(LastMove {
                direction: Direction::Right,
                distance: [4, 5],
            }),
        };

        let resolved = GoalInference::refine(&mut estimate, &facts);

        assert_eq!(resolved, vec![(Axis::X, Rule::Movement)]);
        assert_eq!(estimate.axis(Axis::X).resolved(), Some(4));
    }

    #[test]
    fn test_moving_away_resolves_against_motion() {
        // Moved up from (0, 0) and the distance grew from 5 to 6
        let position = Position::new(0, -1);
        let mut estimate = GoalEstimate::seed(Position::new(0, 0), [4, 5]);
        let s = open();
        let facts = TurnFacts {
            position,
            distance: [4, 6],
            surroundings: &s,
            last_move: Some(LastMove {
                direction: Direction::Up,
                distance: [4, -5],
            }),
        };

        GoalInference::refine(&mut estimate, &facts);

        assert_eq!(estimate.axis(Axis::Y).resolved(), Some(5));
        assert!(!estimate.axis(Axis::X).is_resolved());
    }

    #[test]
    fn test_unchanged_distance_discloses_nothing() {
        let position = Position::new(1, 0);
        let mut estimate = GoalEstimate::seed(Position::new(0, 0), [4, 5]);
        let s = open();
        let facts = TurnFacts {
            position,
            distance: [4, 5],
            surroundings: &s,
            last_move: Some(LastMove {
                direction: Direction::Right,
                distance: [4, 5],
            }),
        };
        assert!(GoalInference::refine(&mut estimate, &facts).is_empty());
    }

    #[test]
    fn test_resolved_axes_are_not_reevaluated() {
        let position = Position::new(0, 0);
        let mut estimate = GoalEstimate::seed(position, [3, 2]);
        estimate.axis_mut(Axis::X).determine(-3);

        // A left edge would claim x = 3, but x is already settled
        let s = Surroundings::from_rows(["OOO", "EPO", "OOO"]);
        let facts = TurnFacts {
            position,
            distance: [3, 2],
            surroundings: &s,
            last_move: None,
        };
        assert!(GoalInference::refine(&mut estimate, &facts).is_empty());
        assert_eq!(estimate.axis(Axis::X).resolved(), Some(-3));
    }

    #[test]
    fn test_rules_apply_in_priority_order() {
        // Zero y distance and a right edge in the same turn
        let position = Position::new(6, 2);
        let mut estimate = GoalEstimate::seed(position, [2, 0]);
        estimate.axis_mut(Axis::Y).determine(9); // wrong on purpose, must stay
        let mut estimate_fresh = GoalEstimate::seed(Position::new(0, 0), [8, 2]);
        let s = Surroundings::from_rows(["OOO", "OPE", "OOO"]);
        let facts = TurnFacts {
            position,
            distance: [2, 0],
            surroundings: &s,
            last_move: None,
        };

        GoalInference::refine(&mut estimate, &facts);
        assert_eq!(estimate.resolved(), Some(Position::new(4, 9)));

        let resolved = GoalInference::refine(&mut estimate_fresh, &facts);
        assert_eq!(resolved, vec![(Axis::Y, Rule::SharedAxis), (Axis::X, Rule::Edge)]);
        assert_eq!(estimate_fresh.resolved(), Some(Position::new(4, 2)));
    }
}
