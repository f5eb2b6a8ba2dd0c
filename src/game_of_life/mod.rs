//! Game of Life core functionality

pub mod board;
pub mod error;
pub mod io;
pub mod presets;
pub mod rules;

pub use board::{Board, Cell};
pub use error::{BoardError, Result};
pub use io::{create_pattern_files, load_board_from_file, save_board_to_file, DEFAULT_STATE_FILE};
pub use presets::Preset;
pub use rules::LifeRules;
