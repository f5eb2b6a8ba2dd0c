//! Game of Life rules implementation

use super::Board;

/// (row, col) offsets of the Moore neighborhood
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Neighbor counts that keep a live cell alive
pub const SURVIVAL_COUNTS: [u8; 2] = [2, 3];

/// Neighbor counts that bring a dead cell to life
pub const BIRTH_COUNTS: [u8; 1] = [3];

/// Game of Life rules engine (B3/S23, dead boundary)
pub struct LifeRules;

impl LifeRules {
    /// Check if a cell should be alive in the next generation given its current state and neighbor count
    pub fn should_be_alive(alive: bool, neighbor_count: u8) -> bool {
        if alive {
            SURVIVAL_COUNTS.contains(&neighbor_count)
        } else {
            BIRTH_COUNTS.contains(&neighbor_count)
        }
    }

    /// Count living neighbors of (row, col). Offsets that leave the board are skipped.
    pub fn count_neighbors(board: &Board, row: usize, col: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dr, dc)| {
                match (row.checked_add_signed(dr), col.checked_add_signed(dc)) {
                    (Some(r), Some(c)) => board.is_alive(r, c),
                    _ => false,
                }
            })
            .count() as u8
    }

    /// Compute the next generation into a fresh buffer, reading only `current`
    pub fn next_generation(current: &Board) -> Vec<bool> {
        current
            .cells()
            .map(|cell| {
                let neighbors = Self::count_neighbors(current, cell.row, cell.col);
                Self::should_be_alive(cell.alive, neighbors)
            })
            .collect()
    }

    /// Advance the board one generation in place.
    ///
    /// The whole next generation is built before the board is touched, so no
    /// cell ever sees a partially updated neighborhood.
    pub fn evolve(board: &mut Board) {
        let next = Self::next_generation(board);
        board.replace_cells(next);
    }

    /// Evolve the board for multiple generations
    pub fn evolve_generations(board: &mut Board, generations: usize) {
        for _ in 0..generations {
            Self::evolve(board);
        }
    }
}

impl Board {
    /// Advance one generation
    pub fn evolve(&mut self) {
        tracing::debug!(
            height = self.height(),
            width = self.width(),
            living = self.living_count(),
            "evolving board"
        );
        LifeRules::evolve(self);
    }

    /// Advance `generations` generations
    pub fn evolve_generations(&mut self, generations: usize) {
        LifeRules::evolve_generations(self, generations);
    }
}
