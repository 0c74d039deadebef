use crate::digger::StarDigger;
use crate::game::Outcome;
use crate::infra::{Direction, Position, TurnObserver};
use std::io::{self, Write};
use tracing::{info, warn};

pub struct DefaultObserver {
    show_map: bool,
}

impl DefaultObserver {
    pub fn new(show_map: bool) -> Self {
        Self { show_map }
    }
}

impl TurnObserver for DefaultObserver {
    fn on_game_start(&mut self, board_width: i32, board_height: i32, start: Position) {
        info!("{} started", StarDigger::NAME);
        info!("- board size: {}x{} (width x height)", board_width, board_height);
        info!("- start: {}", start);
    }

    fn on_turn(&mut self, turn: u32, position: Position, distance: [i32; 2]) {
        info!("turn: {}, pos: {}, distance: {:?}", turn, position, distance);
    }

    fn on_move(&mut self, direction: Direction, digger: &StarDigger) {
        info!("move: {}", direction);
        if let Some(estimate) = digger.goal_estimate() {
            info!("goal estimate: {}", estimate);
        }

        if self.show_map {
            let map = digger.map().draw_ascii_map();
            let _ = writeln!(io::stdout(), "{}", map);
        }
    }

    fn on_fleegol_stall(&mut self, turn: u32) {
        info!("turn: {}, stuck on a fleegol", turn);
    }

    fn on_game_finished(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Won { turns } => info!("Found the ruby in {} turns", turns),
            Outcome::Lost { turns, tile } => warn!("Stepped on {:?} at turn {}", tile, turns),
            Outcome::Forfeited { turns, error } => warn!("Gave up at turn {}: {}", turns, error),
            Outcome::TurnLimit { turns } => warn!("No ruby after {} turns", turns),
        }
    }
}
