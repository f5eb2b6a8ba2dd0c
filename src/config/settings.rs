//! Configuration settings for the Game of Life board

use crate::game_of_life::{Board, Preset, DEFAULT_STATE_FILE};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub board: BoardConfig,
    pub persistence: PersistenceConfig,
    pub simulation: SimulationConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    pub height: usize,
    pub width: usize,
    /// When set, the preset's own size wins over `height`/`width`
    pub preset: Option<Preset>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistenceConfig {
    pub state_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub generations: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
    Visual,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board: BoardConfig {
                height: 10,
                width: 10,
                preset: None,
            },
            persistence: PersistenceConfig {
                state_file: PathBuf::from(DEFAULT_STATE_FILE),
            },
            simulation: SimulationConfig { generations: 1 },
            output: OutputConfig {
                format: OutputFormat::Text,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from `path`, falling back to defaults when it doesn't exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.simulation.generations == 0 {
            anyhow::bail!("Number of generations must be positive");
        }

        if self.board.preset.is_none() && (self.board.height == 0 || self.board.width == 0) {
            anyhow::bail!(
                "Board dimensions must be positive, got {}x{}",
                self.board.height,
                self.board.width
            );
        }

        if self.persistence.state_file.as_os_str().is_empty() {
            anyhow::bail!("State file path cannot be empty");
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(height) = cli_overrides.height {
            self.board.height = height;
        }
        if let Some(width) = cli_overrides.width {
            self.board.width = width;
        }
        if let Some(preset) = cli_overrides.preset {
            self.board.preset = Some(preset);
        } else if cli_overrides.height.is_some() || cli_overrides.width.is_some() {
            // an explicit size on the command line replaces a configured preset
            self.board.preset = None;
        }
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(ref state_file) = cli_overrides.state_file {
            self.persistence.state_file = state_file.clone();
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
    }

    /// Build the starting board these settings describe
    pub fn initial_board(&self) -> Result<Board> {
        let board = match self.board.preset {
            Some(preset) => preset.build(),
            None => Board::new(self.board.height, self.board.width),
        };
        board.context("Failed to create board")
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub height: Option<usize>,
    pub width: Option<usize>,
    pub preset: Option<Preset>,
    pub generations: Option<usize>,
    pub state_file: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}
