pub mod config;
pub mod digger;
pub mod game;
pub mod infra;
pub mod state;

// Re-export commonly used types for convenience
pub use config::Config;
pub use digger::StarDigger;
pub use game::{Board, Game, Outcome};
pub use infra::{AStar, DiggerError, Direction, Position};
pub use state::{ExploredMap, GoalEstimate, UncertainScalar};
