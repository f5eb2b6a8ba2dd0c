//! Conway's Game of Life board
//!
//! A fixed-size grid of cells that evolves one generation at a time and can be
//! saved to and restored from the `.gol` text format.

pub mod config;
pub mod game_of_life;
pub mod logging;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{Board, BoardError, Cell, LifeRules, Preset};
