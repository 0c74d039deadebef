use std::collections::HashMap;

use tracing::{debug, warn};

use crate::infra::{AStar, Bounds, Position};
use crate::state::{Surroundings, Tile};

/// Everything the digger has seen so far, in absolute coordinates.
///
/// Known terrain is never forgotten or contradicted: a merge only fills
/// cells that are still unknown or hold the digger's own placeholder.
#[derive(Clone, Debug, Default)]
pub struct ExploredMap {
    tiles: HashMap<Position, Tile>,
    // Diagnostics only, search never looks at these
    player_path: Vec<Position>,
    planned_path: Option<Vec<Position>>,
}

impl ExploredMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, pos: &Position) -> Option<Tile> {
        self.tiles.get(pos).copied()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Position, &Tile)> {
        self.tiles.iter()
    }

    /// Every position the digger reported from, oldest first.
    pub fn player_path(&self) -> &[Position] {
        &self.player_path
    }

    pub fn current_position(&self) -> Option<Position> {
        self.player_path.last().copied()
    }

    pub fn planned_path(&self) -> Option<&[Position]> {
        self.planned_path.as_deref()
    }

    /// Record what the digger sees standing at `center`.
    #[tracing::instrument(level = "trace", skip(self, surroundings))]
    pub fn merge_observation(&mut self, center: Position, surroundings: &Surroundings) {
        self.player_path.push(center);
        self.tiles.entry(center).or_insert(Tile::Digger);

        for (dx, dy) in surroundings.covered_positions() {
            let Some(tile) = surroundings.terrain_at(dx, dy) else {
                continue;
            };
            let pos = center.offset(dx, dy);

            match self.tiles.get(&pos) {
                None | Some(Tile::Digger) => {
                    self.tiles.insert(pos, tile);
                }
                Some(&known) if known != tile => {
                    warn!(
                        "Ignoring {:?} at {} which is already known as {:?}",
                        tile, pos, known
                    );
                }
                Some(_) => {}
            }
        }
    }

    /// Force the goal marker at `pos`, whatever was recorded there before.
    pub fn mark_goal(&mut self, pos: Position) {
        if let Some(previous) = self.tiles.insert(pos, Tile::Goal)
            && previous != Tile::Goal
        {
            debug!("Goal at {} replaces {:?}", pos, previous);
        }
    }

    /// Cost of stepping onto a cell, None when it cannot be entered.
    ///
    /// Unknown cells are assumed to be open.
    pub fn terrain_cost(tile: Option<Tile>) -> Option<u32> {
        match tile {
            None | Some(Tile::Open | Tile::Goal | Tile::Digger) => Some(1),
            Some(Tile::Fleegol) => Some(2),
            Some(Tile::Geegol | Tile::Edge) => None,
        }
    }

    pub fn cost_at(&self, pos: &Position) -> Option<u32> {
        Self::terrain_cost(self.get(pos))
    }

    /// Cheapest path from `start` to `goal` under the current knowledge.
    ///
    /// The search never strays more than one cell beyond the known area:
    /// everything out there is assumed open, so a detour through it can
    /// always be pulled back onto that border ring at no extra cost.
    pub fn find_path(&self, start: Position, goal: Position) -> Option<Vec<Position>> {
        let area = Bounds::enclosing(self.tiles.keys().chain([&start, &goal]))?.expand(1);

        AStar::find_path(
            start,
            goal,
            |pos: Position| {
                pos.neighbors()
                    .into_iter()
                    .filter(move |next| area.contains(next))
            },
            |_from, to| self.cost_at(&to),
            |pos, goal| pos.distance(&goal) as u32,
        )
    }

    /// Plan from the digger's current position to `goal` and remember the plan.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn path_to(&mut self, goal: Position) -> Option<Vec<Position>> {
        let start = self.current_position()?;
        let path = self.find_path(start, goal);
        match &path {
            Some(path) => debug!("Path to {} has {} steps", goal, path.len() - 1),
            None => debug!("No path from {} to {}", start, goal),
        }
        self.planned_path = path.clone();
        path
    }

    pub fn draw_ascii_map(&self) -> String {
        let mut output = String::new();

        // ANSI color codes
        const RESET: &str = "\x1b[0m";
        const VISITED: &str = "\x1b[32m"; // Green
        const PLANNED: &str = "\x1b[31m"; // Red

        let Some(bounds) = Bounds::enclosing(self.tiles.keys()) else {
            return output;
        };
        let start = self.player_path.first();
        let planned = self.planned_path.as_deref().unwrap_or_default();

        for y in bounds.min_y..=bounds.max_y {
            for x in bounds.min_x..=bounds.max_x {
                let pos = Position::new(x, y);
                let on_player_path = self.player_path.contains(&pos);
                let on_planned_path = planned.contains(&pos);

                let symbol = match self.tiles.get(&pos) {
                    Some(_) if start == Some(&pos) => '@',
                    Some(tile) => tile.symbol(),
                    None if on_planned_path => '.',
                    None => ' ',
                };

                if on_player_path {
                    output.push_str(&format!("{}{}{}", VISITED, symbol, RESET));
                } else if on_planned_path {
                    output.push_str(&format!("{}{}{}", PLANNED, symbol, RESET));
                } else {
                    output.push(symbol);
                }
            }
            output.push('\n');
        }

        output
    }
}
