mod default_observer;
mod error;
mod game_observer;
mod pathfinding;
mod types;

pub use default_observer::DefaultObserver;
pub use error::{DiggerError, Result};
pub use game_observer::TurnObserver;
pub use pathfinding::{AStar, path_cost};
pub use types::{Bounds, Direction, Position};

// ============================================================================
// Helper functions
// ============================================================================

/// Direction of the first step of `path`, which must start at the digger.
pub fn path_to_direction(path: &[Position]) -> Result<Direction> {
    match path {
        [current, next, ..] => Direction::from_delta(next.x - current.x, next.y - current.y),
        _ => Err(DiggerError::InvalidMoveDelta { dx: 0, dy: 0 }),
    }
}
