use crate::digger::StarDigger;
use crate::game::Outcome;
use crate::infra::{Direction, Position};

/// Trait for observing game events during execution
pub trait TurnObserver {
    /// Called when the game starts
    fn on_game_start(&mut self, board_width: i32, board_height: i32, start: Position);

    /// Called before the digger is asked for a move
    fn on_turn(&mut self, turn: u32, position: Position, distance: [i32; 2]);

    /// Called when the digger has picked a move
    fn on_move(&mut self, direction: Direction, digger: &StarDigger);

    /// Called for a turn lost to a fleegol
    fn on_fleegol_stall(&mut self, turn: u32);

    /// Called when the game finishes
    fn on_game_finished(&mut self, outcome: &Outcome);
}
