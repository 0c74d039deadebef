use thiserror::Error;

use crate::infra::Position;

pub type Result<T> = std::result::Result<T, DiggerError>;

/// Everything that can stop a digger from answering a turn.
#[derive(Debug, Error)]
pub enum DiggerError {
    #[error("Goal is not visible in the surroundings")]
    NotFound,
    #[error("No path from {from} to {to} through the known map")]
    NoPath { from: Position, to: Position },
    #[error("No move available to travel delta ({dx}, {dy})")]
    InvalidMoveDelta { dx: i32, dy: i32 },
    #[error("Unknown terrain symbol {0:?}")]
    UnknownSymbol(String),
    #[error("Surroundings must be 3x3, got {rows} rows with row lengths {cols:?}")]
    MalformedSurroundings { rows: usize, cols: Vec<usize> },
    #[error("{0} environment variable is required, see README.md")]
    MissingEnv(&'static str),
    #[error("Invalid value {value:?} for {key}")]
    InvalidEnv { key: &'static str, value: String },
    #[error("Invalid board: {0}")]
    Board(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
