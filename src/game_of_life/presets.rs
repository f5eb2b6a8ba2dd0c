//! Named starting positions

use super::error::{BoardError, Result};
use super::Board;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A built-in starting configuration with a fixed board size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    Checkerboard,
    Blinker,
    Toad,
    Beacon,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::Checkerboard,
        Preset::Blinker,
        Preset::Toad,
        Preset::Beacon,
    ];

    /// Look a preset up by name, `None` if there is no such preset
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::Checkerboard => "checkerboard",
            Preset::Blinker => "blinker",
            Preset::Toad => "toad",
            Preset::Beacon => "beacon",
        }
    }

    /// Board size as (height, width)
    pub fn dimensions(self) -> (usize, usize) {
        match self {
            Preset::Checkerboard => (10, 10),
            Preset::Blinker => (5, 5),
            Preset::Toad | Preset::Beacon => (6, 6),
        }
    }

    /// Live cells as (x, y) pairs, x being the column. Empty for checkerboard,
    /// which is filled by parity instead.
    fn placements(self) -> &'static [(usize, usize)] {
        match self {
            Preset::Checkerboard => &[],
            Preset::Blinker => &[(2, 1), (2, 2), (2, 3)],
            Preset::Toad => &[(2, 2), (2, 3), (2, 4), (3, 1), (3, 2), (3, 3)],
            Preset::Beacon => &[
                (1, 1),
                (1, 2),
                (2, 1),
                (2, 2),
                (3, 3),
                (3, 4),
                (4, 3),
                (4, 4),
            ],
        }
    }

    /// Build a fresh board holding this preset
    pub fn build(self) -> Result<Board> {
        let (height, width) = self.dimensions();
        let mut board = Board::new(height, width)?;

        if self == Preset::Checkerboard {
            for row in 0..height {
                for col in 0..width {
                    board.set_cell(col, row, (row + col) % 2 == 1)?;
                }
            }
        }

        for &(x, y) in self.placements() {
            board.place_cell(x, y)?;
        }

        Ok(board)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| BoardError::PresetNotFound(s.to_string()))
    }
}

impl Board {
    /// Build the named preset, failing with [`BoardError::PresetNotFound`] for unknown names
    pub fn from_preset(name: &str) -> Result<Self> {
        name.parse::<Preset>()?.build()
    }
}
