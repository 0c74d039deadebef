//! Decoding of the 3x3 window the game master hands the digger every turn.

use std::fmt;

use crate::infra::{DiggerError, Result};
use crate::state::Tile;

/// The eight offsets around the digger, row by row.
const COVERED: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// The immediate surroundings of the digger.
///
/// Offsets are `(dx, dy)` relative to the digger with `dy = -1` being the top
/// row. The center cell is always the digger itself and is never reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surroundings {
    cells: [[Tile; 3]; 3],
}

impl Surroundings {
    pub fn new(mut cells: [[Tile; 3]; 3]) -> Self {
        cells[1][1] = Tile::Digger;
        Self { cells }
    }

    /// Parse a symbol matrix such as `[["O", "O", "F"], ["G", "P", "O"], ...]`.
    pub fn parse<R, S>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let malformed = || DiggerError::MalformedSurroundings {
            rows: rows.len(),
            cols: rows.iter().map(|row| row.as_ref().len()).collect(),
        };

        if rows.len() != 3 || rows.iter().any(|row| row.as_ref().len() != 3) {
            return Err(malformed());
        }

        let mut cells = [[Tile::Digger; 3]; 3];
        for (y, row) in rows.iter().enumerate() {
            for (x, symbol) in row.as_ref().iter().enumerate() {
                if (x, y) != (1, 1) {
                    cells[y][x] = symbol.as_ref().parse()?;
                }
            }
        }
        Ok(Self::new(cells))
    }

    pub fn goal_visible(&self) -> bool {
        self.goal_offset().is_ok()
    }

    /// Offset of the goal, scanning row by row.
    pub fn goal_offset(&self) -> Result<(i32, i32)> {
        COVERED
            .into_iter()
            .find(|&(dx, dy)| self.terrain_at(dx, dy) == Some(Tile::Goal))
            .ok_or(DiggerError::NotFound)
    }

    pub fn edge_visible(&self) -> bool {
        COVERED
            .into_iter()
            .any(|(dx, dy)| self.terrain_at(dx, dy) == Some(Tile::Edge))
    }

    pub fn edge_left(&self) -> bool {
        self.terrain_at(-1, 0) == Some(Tile::Edge)
    }

    pub fn edge_right(&self) -> bool {
        self.terrain_at(1, 0) == Some(Tile::Edge)
    }

    pub fn edge_up(&self) -> bool {
        self.terrain_at(0, -1) == Some(Tile::Edge)
    }

    pub fn edge_down(&self) -> bool {
        self.terrain_at(0, 1) == Some(Tile::Edge)
    }

    /// Terrain at an offset in `-1..=1` on both axes, None outside the window.
    pub fn terrain_at(&self, dx: i32, dy: i32) -> Option<Tile> {
        let col = usize::try_from(dx + 1).ok()?;
        let row = usize::try_from(dy + 1).ok()?;
        self.cells.get(row)?.get(col).copied()
    }

    pub fn covered_positions(&self) -> impl Iterator<Item = (i32, i32)> {
        COVERED.into_iter()
    }

    /// Build from three rows of symbols such as `["OOF", "GPO", "OOO"]`.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: [&str; 3]) -> Self {
        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.chars().map(|c| c.to_string()).collect())
            .collect();
        Self::parse(&cells).unwrap()
    }
}

impl fmt::Display for Surroundings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            for tile in row {
                write!(f, "{}", tile)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(rows: [[&str; 3]; 3]) -> Surroundings {
        Surroundings::parse(&rows).unwrap()
    }

    #[test]
    fn test_from_rows_matches_parse() {
        let s = Surroundings::from_rows(["OOF", "GPO", "OOO"]);
        assert_eq!(s, parse([["O", "O", "F"], ["G", "P", "O"], ["O", "O", "O"]]));
        assert_eq!(s.to_string(), "OOF/GPO/OOO");
    }

    #[test]
    fn test_parse_reads_rows_top_to_bottom() {
        let s = parse([["O", "O", "F"], ["G", "P", "O"], ["O", "O", "O"]]);
        assert_eq!(s.terrain_at(1, -1), Some(Tile::Fleegol));
        assert_eq!(s.terrain_at(-1, 0), Some(Tile::Geegol));
        assert_eq!(s.terrain_at(0, 0), Some(Tile::Digger));
        assert_eq!(s.terrain_at(2, 0), None);
        assert_eq!(s.to_string(), "OOF/GPO/OOO");
    }

    #[test]
    fn test_parse_accepts_owned_strings() {
        let rows: Vec<Vec<String>> = vec![
            vec!["o".into(), "o".into(), "o".into()],
            vec!["o".into(), "p".into(), "o".into()],
            vec!["e".into(), "e".into(), "e".into()],
        ];
        let s = Surroundings::parse(&rows).unwrap();
        assert!(s.edge_down());
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        let rows = vec![vec!["O", "O"], vec!["O", "P", "O"], vec!["O", "O", "O"]];
        match Surroundings::parse(&rows) {
            Err(DiggerError::MalformedSurroundings { rows, cols }) => {
                assert_eq!(rows, 3);
                assert_eq!(cols, vec![2, 3, 3]);
            }
            other => panic!("Expected malformed surroundings, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_symbol() {
        let rows = [["O", "O", "O"], ["O", "P", "X"], ["O", "O", "O"]];
        assert!(matches!(
            Surroundings::parse(&rows),
            Err(DiggerError::UnknownSymbol(_))
        ));
    }

    #[test]
    fn test_goal_offset() {
        let s = parse([["O", "O", "R"], ["O", "P", "O"], ["O", "O", "O"]]);
        assert!(s.goal_visible());
        assert_eq!(s.goal_offset().unwrap(), (1, -1));

        let s = parse([["O", "O", "O"], ["O", "P", "O"], ["O", "O", "O"]]);
        assert!(!s.goal_visible());
        assert!(matches!(s.goal_offset(), Err(DiggerError::NotFound)));
    }

    #[test]
    fn test_edges_only_count_cardinal_neighbours() {
        // Corner of the board: edges above and to the left
        let s = parse([["E", "E", "E"], ["E", "P", "O"], ["E", "O", "O"]]);
        assert!(s.edge_visible());
        assert!(s.edge_left());
        assert!(s.edge_up());
        assert!(!s.edge_right());
        assert!(!s.edge_down());

        // Only a diagonal edge
        let s = parse([["O", "O", "O"], ["O", "P", "O"], ["O", "O", "E"]]);
        assert!(s.edge_visible());
        assert!(!s.edge_left() && !s.edge_right() && !s.edge_up() && !s.edge_down());
    }

    #[test]
    fn test_covered_positions_exclude_center() {
        let s = parse([["O", "O", "O"], ["O", "P", "O"], ["O", "O", "O"]]);
        let covered: Vec<_> = s.covered_positions().collect();
        assert_eq!(covered.len(), 8);
        assert!(!covered.contains(&(0, 0)));
        assert!(covered.iter().all(|&(dx, dy)| dx.abs() <= 1 && dy.abs() <= 1));
    }
}
