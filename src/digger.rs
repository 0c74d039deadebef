//! The StarDigger: optimistic A* over whatever terrain it has seen so far,
//! re-planned from scratch every turn.

use tracing::debug;

use crate::infra::{DiggerError, Direction, Position, Result, path_to_direction};
use crate::state::{ExploredMap, GoalEstimate, GoalInference, LastMove, Surroundings, TurnFacts};

#[derive(Debug, Clone, Default)]
pub struct StarDigger {
    /// Dead-reckoned position, the first turn is at (0, 0)
    position: Position,
    goal: Option<GoalEstimate>,
    map: ExploredMap,
    last_move: Option<LastMove>,
}

impl StarDigger {
    pub const NAME: &'static str = "StarDigger";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn goal_estimate(&self) -> Option<&GoalEstimate> {
        self.goal.as_ref()
    }

    pub fn map(&self) -> &ExploredMap {
        &self.map
    }

    /// Same as [`StarDigger::decide_move`], reading the raw symbol matrix.
    pub fn move_with_symbols<R, S>(&mut self, distance: [i32; 2], matrix: &[R]) -> Result<Direction>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let surroundings = Surroundings::parse(matrix)?;
        self.decide_move(distance, &surroundings)
    }

    /// Pick the next move given the distance to the goal and the 3x3 window.
    ///
    /// An error means the digger cannot go on and forfeits the game.
    #[tracing::instrument(level = "trace", skip(self, surroundings))]
    pub fn decide_move(
        &mut self,
        distance: [i32; 2],
        surroundings: &Surroundings,
    ) -> Result<Direction> {
        // Distances may arrive signed
        let distance = distance.map(i32::abs);

        if let Some(last) = self.last_move {
            self.position = self.position.step(last.direction);
        }
        let position = self.position;

        let estimate = self
            .goal
            .get_or_insert_with(|| GoalEstimate::seed(position, distance));

        let facts = TurnFacts {
            position,
            distance,
            surroundings,
            last_move: self.last_move,
        };
        GoalInference::refine(estimate, &facts);

        self.map.merge_observation(position, surroundings);
        if let Some(goal) = estimate.resolved() {
            self.map.mark_goal(goal);
        }

        debug!(
            "At {} with distance {:?}, goal estimate {}",
            position, distance, estimate
        );

        let targets = estimate.candidate_positions(position);
        let path = targets
            .iter()
            .find_map(|&target| self.map.path_to(target))
            .ok_or_else(|| DiggerError::NoPath {
                from: position,
                to: estimate.target(position),
            })?;
        let direction = path_to_direction(&path)?;

        debug!("Heading {} on a {} step path", direction, path.len() - 1);

        self.last_move = Some(LastMove {
            direction,
            distance,
        });
        Ok(direction)
    }
}
