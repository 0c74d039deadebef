mod estimate;
mod inference;
mod map;
mod surroundings;
mod tile;

pub use estimate::{Axis, GoalEstimate, UncertainScalar};
pub use inference::{GoalInference, LastMove, Rule, TurnFacts};
pub use map::ExploredMap;
pub use surroundings::Surroundings;
pub use tile::Tile;
