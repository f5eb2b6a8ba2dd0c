//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::game_of_life::Board;
use anyhow::Result;
use itertools::Itertools;

/// Format boards for terminal output
pub struct BoardFormatter;

impl BoardFormatter {
    /// Render a board in the requested output format
    pub fn format(board: &Board, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Text => board.to_gol_string(),
            OutputFormat::Json => board.to_json()?,
            OutputFormat::Visual => Self::format_board_with_coords(board),
        })
    }

    /// Format a board in compact form
    pub fn format_board_compact(board: &Board) -> String {
        let mut output = String::new();
        for row in 0..board.height() {
            for col in 0..board.width() {
                output.push(if board.is_alive(row, col) { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Format a board with row and column numbers
    pub fn format_board_with_coords(board: &Board) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        output.push_str(&(0..board.width()).map(|x| format!("{:2}", x % 10)).join(""));
        output.push('\n');

        for row in 0..board.height() {
            output.push_str(&format!("{:2} ", row));
            output.push_str(
                &(0..board.width())
                    .map(|col| if board.is_alive(row, col) { "██" } else { "··" })
                    .join(""),
            );
            output.push('\n');
        }

        output.push_str(&format!(
            "Living cells: {}/{}\n",
            board.living_count(),
            board.height() * board.width()
        ));
        output
    }

    /// Format successive generations one after another
    pub fn format_evolution(generations: &[Board]) -> String {
        generations
            .iter()
            .enumerate()
            .map(|(i, board)| format!("Generation {}:\n{}", i, Self::format_board_compact(board)))
            .join("\n")
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Green,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Green => 32,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_formatting() {
        let board = Board::from_preset("blinker").unwrap();

        let compact = BoardFormatter::format_board_compact(&board);
        assert_eq!(compact.lines().count(), 5);
        assert_eq!(compact.lines().nth(1), Some("··█··"));

        let with_coords = BoardFormatter::format_board_with_coords(&board);
        assert!(with_coords.starts_with("    0 1 2 3 4\n"));
        assert!(with_coords.contains(" 2 ····██····"));
        assert!(with_coords.ends_with("Living cells: 3/25\n"));
    }

    #[test]
    fn test_output_formats() {
        let board = Board::from_preset("blinker").unwrap();

        let text = BoardFormatter::format(&board, OutputFormat::Text).unwrap();
        assert!(text.starts_with("5 5\n"));

        let json = BoardFormatter::format(&board, OutputFormat::Json).unwrap();
        assert_eq!(Board::from_json(&json).unwrap(), board);
    }

    #[test]
    fn test_format_evolution() {
        let mut board = Board::from_preset("blinker").unwrap();
        let first = board.clone();
        board.evolve();

        let output = BoardFormatter::format_evolution(&[first, board]);
        assert!(output.contains("Generation 0:"));
        assert!(output.contains("Generation 1:"));
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Blue);
        assert!(colored.contains("test"));
        assert!(ColorOutput::success("OK").contains("OK"));
    }
}
