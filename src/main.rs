//! Command-line front end for the Game of Life board

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use conway_life::{
    config::{CliOverrides, OutputFormat, Settings},
    game_of_life::{create_pattern_files, Board, Preset},
    logging,
    utils::{BoardFormatter, ColorOutput},
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "conway_life")]
#[command(about = "Conway's Game of Life board")]
#[command(version = "0.1.0")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, default_value = "config/default.yaml")]
    config: PathBuf,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new board and save it to the state file
    New {
        /// Start from a named preset (overrides config)
        #[arg(short, long)]
        preset: Option<Preset>,

        /// Board height (overrides config)
        #[arg(long)]
        height: Option<usize>,

        /// Board width (overrides config)
        #[arg(long)]
        width: Option<usize>,

        /// State file (overrides config)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Bring a cell to life
    Place {
        /// Column
        #[arg(short, long)]
        x: usize,

        /// Row
        #[arg(short, long)]
        y: usize,

        /// State file (overrides config)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Advance the saved board
    Evolve {
        /// Number of generations (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// State file (overrides config)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Print every intermediate generation
        #[arg(long)]
        show_evolution: bool,
    },

    /// Copy another board file into the saved board
    Import {
        /// File to import; must have the same dimensions as the saved board
        #[arg(long)]
        from: PathBuf,

        /// State file (overrides config)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Print the saved board
    Show {
        /// State file (overrides config)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output format (overrides config)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// List the built-in presets
    Presets,

    /// Create a default configuration and preset pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::New { preset, height, width, file } => {
            let settings = load_settings(
                &cli.config,
                CliOverrides {
                    height,
                    width,
                    preset,
                    state_file: file,
                    ..Default::default()
                },
            )?;
            new_command(&settings)
        }
        Commands::Place { x, y, file } => {
            let settings = load_settings(
                &cli.config,
                CliOverrides { state_file: file, ..Default::default() },
            )?;
            place_command(&settings, x, y)
        }
        Commands::Evolve { generations, file, show_evolution } => {
            let settings = load_settings(
                &cli.config,
                CliOverrides {
                    generations,
                    state_file: file,
                    ..Default::default()
                },
            )?;
            evolve_command(&settings, show_evolution)
        }
        Commands::Import { from, file } => {
            let settings = load_settings(
                &cli.config,
                CliOverrides { state_file: file, ..Default::default() },
            )?;
            import_command(&settings, &from)
        }
        Commands::Show { file, format } => {
            let settings = load_settings(
                &cli.config,
                CliOverrides {
                    state_file: file,
                    format,
                    ..Default::default()
                },
            )?;
            show_command(&settings)
        }
        Commands::Presets => presets_command(),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn load_settings(config_path: &Path, overrides: CliOverrides) -> Result<Settings> {
    let mut settings = Settings::load_or_default(config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    settings.merge_with_cli(&overrides);
    settings.validate().context("Configuration validation failed")?;
    Ok(settings)
}

fn load_board(settings: &Settings) -> Result<Board> {
    let path = &settings.persistence.state_file;
    Board::load_from_file(path).with_context(|| {
        format!(
            "Failed to load board from {} (run `new` first)",
            path.display()
        )
    })
}

fn save_board(settings: &Settings, board: &Board) -> Result<()> {
    let path = &settings.persistence.state_file;
    board
        .export_to_file(path)
        .with_context(|| format!("Failed to save board to {}", path.display()))
}

fn new_command(settings: &Settings) -> Result<()> {
    let board = settings.initial_board()?;
    save_board(settings, &board)?;

    println!(
        "{}",
        ColorOutput::success(&format!(
            "Created {}x{} board in {}",
            board.height(),
            board.width(),
            settings.persistence.state_file.display()
        ))
    );
    println!("{}", BoardFormatter::format_board_compact(&board));
    Ok(())
}

fn place_command(settings: &Settings, x: usize, y: usize) -> Result<()> {
    let mut board = load_board(settings)?;
    board
        .place_cell(x, y)
        .with_context(|| format!("Failed to place cell at ({}, {})", x, y))?;
    save_board(settings, &board)?;

    println!("{}", BoardFormatter::format_board_compact(&board));
    Ok(())
}

fn evolve_command(settings: &Settings, show_evolution: bool) -> Result<()> {
    let mut board = load_board(settings)?;
    let generations = settings.simulation.generations;

    let mut history = Vec::new();
    for _ in 0..generations {
        if show_evolution {
            history.push(board.clone());
        }
        board.evolve();
    }
    save_board(settings, &board)?;

    if show_evolution {
        history.push(board.clone());
        println!("{}", BoardFormatter::format_evolution(&history));
    } else {
        println!("{}", BoardFormatter::format_board_compact(&board));
    }
    println!(
        "{}",
        ColorOutput::success(&format!(
            "Evolved {} generation(s), {} living cells",
            generations,
            board.living_count()
        ))
    );
    Ok(())
}

fn import_command(settings: &Settings, from: &Path) -> Result<()> {
    let mut board = load_board(settings)?;
    board
        .import_from_file(from)
        .with_context(|| format!("Failed to import {}", from.display()))?;
    save_board(settings, &board)?;

    println!(
        "{}",
        ColorOutput::success(&format!(
            "Imported {} into {}",
            from.display(),
            settings.persistence.state_file.display()
        ))
    );
    println!("{}", BoardFormatter::format_board_compact(&board));
    Ok(())
}

fn show_command(settings: &Settings) -> Result<()> {
    let board = load_board(settings)?;
    print!("{}", BoardFormatter::format(&board, settings.output.format)?);
    Ok(())
}

fn presets_command() -> Result<()> {
    println!("{}", ColorOutput::info("Available presets:"));
    for preset in Preset::ALL {
        let (height, width) = preset.dimensions();
        println!("  {:<14} {}x{}", preset.name(), height, width);
    }
    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_path = directory.join("config/default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    let patterns_dir = directory.join("patterns");
    create_pattern_files(&patterns_dir).context("Failed to create pattern files")?;
    println!("Created preset patterns in: {}", patterns_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn settings_in(dir: &Path) -> Settings {
        let mut settings = Settings::default();
        settings.persistence.state_file = dir.join("universe.gol");
        settings
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "conway_life",
            "new",
            "--preset",
            "toad",
            "--file",
            "saves/toad.gol",
        ])
        .unwrap();
        match cli.command {
            Commands::New { preset, file, .. } => {
                assert_eq!(preset, Some(Preset::Toad));
                assert_eq!(file, Some(PathBuf::from("saves/toad.gol")));
            }
            _ => panic!("expected the new command"),
        }

        assert!(Cli::try_parse_from(["conway_life", "new", "--preset", "glider"]).is_err());
        assert!(Cli::try_parse_from(["conway_life", "place", "-x", "1", "-y", "2"]).is_ok());
        let cli = Cli::try_parse_from(["conway_life", "place", "--x", "3", "--y", "4"]).unwrap();
        assert!(matches!(cli.command, Commands::Place { x: 3, y: 4, file: None }));
        assert!(Cli::try_parse_from(["conway_life", "show", "--format", "visual", "-v"]).is_ok());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        setup_command(temp_dir.path().to_path_buf(), false).unwrap();

        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("patterns/blinker.gol").exists());
    }

    #[test]
    fn test_new_place_evolve_cycle() {
        let temp_dir = tempdir().unwrap();
        let mut settings = settings_in(temp_dir.path());
        settings.board.height = 5;
        settings.board.width = 5;

        new_command(&settings).unwrap();
        for x in 1..=3 {
            place_command(&settings, x, 2).unwrap();
        }
        evolve_command(&settings, false).unwrap();

        let board = Board::load_from_file(&settings.persistence.state_file).unwrap();
        assert_eq!(board.living_cells(), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_place_out_of_bounds_keeps_file() {
        let temp_dir = tempdir().unwrap();
        let mut settings = settings_in(temp_dir.path());
        settings.board.preset = Some(Preset::Blinker);

        new_command(&settings).unwrap();
        let before = std::fs::read_to_string(&settings.persistence.state_file).unwrap();

        assert!(place_command(&settings, 9, 9).is_err());
        let after = std::fs::read_to_string(&settings.persistence.state_file).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_import_command_checks_dimensions() {
        let temp_dir = tempdir().unwrap();
        let settings = settings_in(temp_dir.path());
        new_command(&settings).unwrap();

        let small = temp_dir.path().join("small.gol");
        std::fs::write(&small, "3 3\n1 1 1 \n0 0 0 \n0 0 0 \n").unwrap();
        assert!(import_command(&settings, &small).is_err());

        let same = temp_dir.path().join("checker.gol");
        Preset::Checkerboard.build().unwrap().export_to_file(&same).unwrap();
        import_command(&settings, &same).unwrap();

        let board = Board::load_from_file(&settings.persistence.state_file).unwrap();
        assert_eq!(board, Preset::Checkerboard.build().unwrap());
    }
}
