//! Settings read from the environment (and `.env` through dotenv).

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::infra::{DiggerError, Result};

const BOARD: &str = "DIGGER_BOARD";
const MAX_TURNS: &str = "DIGGER_MAX_TURNS";
const SHOW_MAP: &str = "DIGGER_SHOW_MAP";

pub const DEFAULT_MAX_TURNS: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Board file to play
    pub board: PathBuf,
    pub max_turns: u32,
    /// Print the explored map after every move
    pub show_map: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let board = lookup(BOARD)
            .map(PathBuf::from)
            .ok_or(DiggerError::MissingEnv(BOARD))?;
        let max_turns = parse_or(&lookup, MAX_TURNS, DEFAULT_MAX_TURNS)?;
        let show_map = parse_or(&lookup, SHOW_MAP, false)?;

        Ok(Self {
            board,
            max_turns,
            show_map,
        })
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T> {
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| DiggerError::InvalidEnv { key, value }),
    }
}
