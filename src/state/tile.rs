use std::fmt;
use std::str::FromStr;

use crate::infra::DiggerError;

/// Terrain of a single board cell.
///
/// Cells nobody has seen yet are not a variant: the explored map simply has
/// no entry for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Open,
    /// Crossing costs an extra turn
    Fleegol,
    /// Destroys the digger
    Geegol,
    /// Outside the board, destroys the digger
    Edge,
    Goal,
    /// The digger's own cell, before anyone has seen its real terrain
    Digger,
}

impl Tile {
    pub fn symbol(self) -> char {
        match self {
            Tile::Open => 'O',
            Tile::Fleegol => 'F',
            Tile::Geegol => 'G',
            Tile::Edge => 'E',
            Tile::Goal => 'R',
            Tile::Digger => 'P',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Tile> {
        match symbol.to_ascii_uppercase() {
            'O' => Some(Tile::Open),
            'F' => Some(Tile::Fleegol),
            'G' => Some(Tile::Geegol),
            'E' => Some(Tile::Edge),
            'R' => Some(Tile::Goal),
            'P' => Some(Tile::Digger),
            _ => None,
        }
    }

    /// Stepping onto this tile ends the game for the digger.
    pub fn is_deadly(self) -> bool {
        matches!(self, Tile::Edge | Tile::Geegol)
    }
}

impl FromStr for Tile {
    type Err = DiggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => {
                Tile::from_symbol(symbol).ok_or_else(|| DiggerError::UnknownSymbol(s.to_string()))
            }
            _ => Err(DiggerError::UnknownSymbol(s.to_string())),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
