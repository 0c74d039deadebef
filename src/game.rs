//! A single-digger referee: loads a board, feeds the digger its distance
//! and surroundings each turn and applies the moves it answers with.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::digger::StarDigger;
use crate::infra::{DiggerError, Position, Result, TurnObserver};
use crate::state::{Surroundings, Tile};

/// The real board, which the digger never gets to see as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: Vec<Vec<Tile>>,
    goal: Position,
    start: Position,
}

impl Board {
    /// Parse rows of `O`, `R`, `F` and `G` with a single `0` where the digger
    /// starts. Case is ignored, as is any other character; other digits are
    /// open ground.
    pub fn parse(text: &str) -> Result<Self> {
        let mut rows = Vec::new();
        let mut start = None;

        for line in text.lines() {
            let symbols: Vec<char> = line
                .chars()
                .map(|c| c.to_ascii_uppercase())
                .filter(|c| matches!(c, 'O' | 'R' | 'F' | 'G') || c.is_ascii_digit())
                .collect();
            if symbols.is_empty() {
                continue;
            }

            let y = rows.len() as i32;
            let mut row = Vec::with_capacity(symbols.len());
            for (x, symbol) in symbols.into_iter().enumerate() {
                let tile = match symbol {
                    '0' => {
                        if start.replace(Position::new(x as i32, y)).is_some() {
                            return Err(DiggerError::Board("More than one start".to_string()));
                        }
                        Tile::Open
                    }
                    c if c.is_ascii_digit() => Tile::Open,
                    c => Tile::from_symbol(c)
                        .ok_or_else(|| DiggerError::UnknownSymbol(c.to_string()))?,
                };
                row.push(tile);
            }
            rows.push(row);
        }

        let Some(first) = rows.first() else {
            return Err(DiggerError::Board("Empty board".to_string()));
        };
        if rows.iter().any(|row| row.len() != first.len()) {
            return Err(DiggerError::Board("Uneven board widths".to_string()));
        }

        let goals: Vec<Position> = rows
            .iter()
            .enumerate()
            .flat_map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, tile)| **tile == Tile::Goal)
                    .map(move |(x, _)| Position::new(x as i32, y as i32))
            })
            .collect();
        let &[goal] = goals.as_slice() else {
            return Err(DiggerError::Board(format!(
                "Must have exactly one ruby, found {}",
                goals.len()
            )));
        };
        let start = start.ok_or_else(|| DiggerError::Board("No digger start (0)".to_string()))?;

        Ok(Self { rows, goal, start })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn width(&self) -> i32 {
        self.rows.first().map_or(0, |row| row.len() as i32)
    }

    pub fn height(&self) -> i32 {
        self.rows.len() as i32
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn start(&self) -> Position {
        self.start
    }

    /// Terrain at `pos`; anything off the board is an edge.
    pub fn tile(&self, pos: Position) -> Tile {
        usize::try_from(pos.y)
            .ok()
            .and_then(|y| self.rows.get(y))
            .zip(usize::try_from(pos.x).ok())
            .and_then(|(row, x)| row.get(x).copied())
            .unwrap_or(Tile::Edge)
    }

    pub fn surroundings(&self, pos: Position) -> Surroundings {
        let mut cells = [[Tile::Digger; 3]; 3];
        for (row, dy) in (-1..=1).enumerate() {
            for (col, dx) in (-1..=1).enumerate() {
                cells[row][col] = self.tile(pos.offset(dx, dy));
            }
        }
        Surroundings::new(cells)
    }

    /// Signed offset from `pos` to the goal.
    pub fn distance(&self, pos: Position) -> [i32; 2] {
        [self.goal.x - pos.x, self.goal.y - pos.y]
    }
}

#[derive(Debug)]
pub enum Outcome {
    Won { turns: u32 },
    Lost { turns: u32, tile: Tile },
    Forfeited { turns: u32, error: DiggerError },
    TurnLimit { turns: u32 },
}

impl Outcome {
    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Won { .. })
    }
}

pub struct Game {
    board: Board,
    digger: StarDigger,
    position: Position,
    short_circuited: bool,
    observer: Box<dyn TurnObserver>,
}

impl Game {
    pub fn new(board: Board, digger: StarDigger, observer: impl TurnObserver + 'static) -> Self {
        Self {
            position: board.start(),
            board,
            digger,
            short_circuited: false,
            observer: Box::new(observer),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn digger(&self) -> &StarDigger {
        &self.digger
    }

    pub fn run(&mut self, max_turns: u32) -> Outcome {
        self.observer
            .on_game_start(self.board.width(), self.board.height(), self.position);

        let mut outcome = Outcome::TurnLimit { turns: max_turns };
        for turn in 1..=max_turns {
            if let Some(finished) = self.play_turn(turn) {
                outcome = finished;
                break;
            }
        }

        self.observer.on_game_finished(&outcome);
        outcome
    }

    fn play_turn(&mut self, turn: u32) -> Option<Outcome> {
        // A fleegol costs the next turn
        if self.short_circuited {
            self.short_circuited = false;
            self.observer.on_fleegol_stall(turn);
            return None;
        }

        let distance = self.board.distance(self.position);
        let surroundings = self.board.surroundings(self.position);
        self.observer.on_turn(turn, self.position, distance);

        let direction = match self.digger.decide_move(distance, &surroundings) {
            Ok(direction) => direction,
            Err(error) => return Some(Outcome::Forfeited { turns: turn, error }),
        };
        self.observer.on_move(direction, &self.digger);

        let next = self.position.step(direction);
        let tile = self.board.tile(next);
        if tile.is_deadly() {
            return Some(Outcome::Lost { turns: turn, tile });
        }
        self.position = next;

        match tile {
            Tile::Goal => Some(Outcome::Won { turns: turn }),
            Tile::Fleegol => {
                debug!("Stepped on a fleegol at {}", next);
                self.short_circuited = true;
                None
            }
            _ => None,
        }
    }
}
