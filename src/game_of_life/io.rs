//! Reading and writing boards in the `.gol` text format
//!
//! ```text
//! <height> <width>
//! 0 1 0
//! 1 0 1
//! ```
//!
//! Every value is followed by a single space and every row ends with a
//! newline. Readers treat the payload as a flat whitespace-separated stream,
//! so line breaks are not significant.

use super::error::{BoardError, Result};
use super::{Board, Preset};
use std::path::Path;

/// File the state is saved to when no other path is configured
pub const DEFAULT_STATE_FILE: &str = "universe.gol";

/// Convert a board to its `.gol` text representation
pub fn board_to_string(board: &Board) -> String {
    let mut result = String::with_capacity(16 + board.height() * (board.width() * 2 + 1));
    result.push_str(&format!("{} {}\n", board.height(), board.width()));

    for row in 0..board.height() {
        for col in 0..board.width() {
            result.push(if board.is_alive(row, col) { '1' } else { '0' });
            result.push(' ');
        }
        result.push('\n');
    }

    result
}

/// Parse a `.gol` document into a new board sized from its header
pub fn parse_board(content: &str) -> Result<Board> {
    let mut tokens = content.split_ascii_whitespace();
    let (height, width) = parse_header(&mut tokens)?;
    let cells = parse_cells(&mut tokens, height, width)?;
    Board::from_cells(height, width, cells)
}

fn parse_header<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<(usize, usize)> {
    let mut dimension = |name: &str| -> Result<usize> {
        let token = tokens
            .next()
            .ok_or_else(|| BoardError::parse(format!("missing {} in header", name)))?;
        token
            .parse()
            .map_err(|_| BoardError::parse(format!("invalid {} '{}' in header", name, token)))
    };

    let height = dimension("height")?;
    let width = dimension("width")?;
    Ok((height, width))
}

fn parse_cells<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    height: usize,
    width: usize,
) -> Result<Vec<bool>> {
    let len = height
        .checked_mul(width)
        .ok_or(BoardError::Allocation { height, width })?;
    // grow with the payload; the header alone can't be trusted for sizing
    let mut cells = Vec::new();

    for i in 0..len {
        let token = tokens.next().ok_or_else(|| {
            BoardError::parse(format!("expected {} cell values, found {}", len, i))
        })?;
        let alive = match token.parse::<u8>() {
            Ok(0) => false,
            Ok(1) => true,
            _ => {
                return Err(BoardError::parse(format!(
                    "invalid cell value '{}' at row {}, column {}",
                    token,
                    i / width,
                    i % width
                )))
            }
        };
        cells.push(alive);
    }

    let trailing = tokens.count();
    if trailing > 0 {
        tracing::warn!(trailing, "ignoring values after the last row");
    }

    Ok(cells)
}

/// Load a board from a `.gol` file, sized from the file header
pub fn load_board_from_file<P: AsRef<Path>>(path: P) -> Result<Board> {
    let path = path.as_ref();
    let content =
        std::fs::read_to_string(path).map_err(|source| BoardError::io(path, source))?;
    let board = parse_board(&content)?;
    tracing::debug!(
        path = %path.display(),
        height = board.height(),
        width = board.width(),
        "loaded board"
    );
    Ok(board)
}

/// Save a board to a `.gol` file, creating parent directories as needed
pub fn save_board_to_file<P: AsRef<Path>>(board: &Board, path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| BoardError::io(parent, source))?;
    }

    std::fs::write(path, board_to_string(board)).map_err(|source| BoardError::io(path, source))?;
    tracing::info!(path = %path.display(), "board exported");
    Ok(())
}

/// Write one `<name>.gol` file per preset into `output_dir`
pub fn create_pattern_files<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir).map_err(|source| BoardError::io(dir, source))?;

    for preset in Preset::ALL {
        let board = preset.build()?;
        save_board_to_file(&board, dir.join(format!("{}.gol", preset.name())))?;
    }

    Ok(())
}

impl Board {
    /// The `.gol` text for this board
    pub fn to_gol_string(&self) -> String {
        board_to_string(self)
    }

    /// Overwrite this board's cells from `.gol` text.
    ///
    /// The header must match this board's dimensions. Nothing is written
    /// unless the whole payload parses.
    pub fn import_from_str(&mut self, content: &str) -> Result<()> {
        let mut tokens = content.split_ascii_whitespace();
        let found = parse_header(&mut tokens)?;
        let expected = (self.height(), self.width());

        if found != expected {
            return Err(BoardError::DimensionMismatch { expected, found });
        }

        let cells = parse_cells(&mut tokens, found.0, found.1)?;
        self.replace_cells(cells);
        Ok(())
    }

    /// Save the board to `path`
    pub fn export_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        save_board_to_file(self, path)
    }

    /// Overwrite this board from the `.gol` file at `path`.
    ///
    /// Fails with [`BoardError::Io`] if the file can't be read and
    /// [`BoardError::DimensionMismatch`] if its header doesn't match this
    /// board. The board is unchanged on any error.
    pub fn import_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| BoardError::io(path, source))?;
        self.import_from_str(&content)?;
        tracing::debug!(path = %path.display(), living = self.living_count(), "board imported");
        Ok(())
    }

    /// Build a new board from the `.gol` file at `path`, taking its size from the header
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_board_from_file(path)
    }

    /// Convert to a JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Create from a JSON string, rejecting inconsistent dimensions
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
