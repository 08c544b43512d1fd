//! Main CLI application for the puzzle CSP solver

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use puzzle_csp::{
    config::{default_config_path, CliOverrides, OutputFormat, Settings, SolverBackend},
    error::PuzzleError,
    solve_all_sudoku, solve_sudoku, solve_zebra,
    sudoku::{load_puzzles_from_file, save_puzzles_to_file},
    utils::{ColorOutput, SolutionFormatter},
    zebra::Attribute,
    PuzzleResult, SudokuReport,
};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "puzzle_csp")]
#[command(about = "Logic puzzle solver over integer constraints")]
#[command(version = "0.1.0")]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the five-house puzzle
    Zebra {
        /// Configuration file path
        #[arg(short, long, default_value_os_t = default_config_path())]
        config: PathBuf,

        /// Attribute whose owner is asked for (overrides config)
        #[arg(short, long)]
        question: Option<Attribute>,

        /// Solver backend (overrides config)
        #[arg(short, long, value_enum)]
        backend: Option<SolverBackend>,

        /// Solver time limit in seconds, 0 for none (overrides config)
        #[arg(short, long)]
        timeout: Option<u64>,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Solve a Sudoku puzzle
    Sudoku {
        /// Configuration file path
        #[arg(short, long, default_value_os_t = default_config_path())]
        config: PathBuf,

        /// Index of the puzzle to solve (overrides config)
        #[arg(short, long)]
        index: Option<usize>,

        /// Puzzle given inline as 81 characters
        #[arg(short, long, conflicts_with = "file")]
        puzzle: Option<String>,

        /// Text file with one puzzle per line
        #[arg(long)]
        file: Option<PathBuf>,

        /// Solve every puzzle instead of the selected one
        #[arg(short, long, conflicts_with = "index")]
        all: bool,

        /// Solver backend (overrides config)
        #[arg(short, long, value_enum)]
        backend: Option<SolverBackend>,

        /// Solver time limit in seconds, 0 for none (overrides config)
        #[arg(short, long)]
        timeout: Option<u64>,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// List the configured Sudoku puzzles
    List {
        /// Configuration file path
        #[arg(short, long, default_value_os_t = default_config_path())]
        config: PathBuf,
    },

    /// Create the default configuration and puzzle files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Zebra {
            config,
            question,
            backend,
            timeout,
            format,
        } => {
            let overrides = CliOverrides {
                backend,
                timeout_seconds: timeout,
                question,
                format,
                ..Default::default()
            };
            zebra_command(config, overrides, cli.verbose)
        }
        Commands::Sudoku {
            config,
            index,
            puzzle,
            file,
            all,
            backend,
            timeout,
            format,
        } => {
            let puzzles = match (puzzle, file) {
                (Some(puzzle), _) => Some(vec![puzzle]),
                (None, Some(file)) => Some(
                    load_puzzles_from_file(&file)
                        .with_context(|| format!("Failed to load puzzles from {}", file.display()))?,
                ),
                (None, None) => None,
            };
            let overrides = CliOverrides {
                backend,
                timeout_seconds: timeout,
                puzzles,
                selected: index,
                format,
                ..Default::default()
            };
            sudoku_command(config, overrides, all, cli.verbose)
        }
        Commands::List { config } => list_command(config),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn load_settings(config_path: &PathBuf, overrides: &CliOverrides) -> Result<Settings> {
    let mut settings = Settings::load_or_default(config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    settings.merge_with_cli(overrides);
    settings.validate().context("Configuration validation failed")?;
    Ok(settings)
}

fn zebra_command(config_path: PathBuf, overrides: CliOverrides, verbose: bool) -> Result<()> {
    let settings = load_settings(&config_path, &overrides)?;

    if verbose {
        println!("Configuration:");
        println!("  Backend: {}", settings.solver.backend);
        println!("  Timeout: {}s", settings.solver.timeout_seconds);
        println!("  Clues: {}", settings.zebra.clues.len());
        println!("  Question: {}", settings.zebra.question);
        println!();
    }

    let start_time = Instant::now();
    let report = solve_zebra(&settings).context("Failed to solve the five-house puzzle")?;

    match settings.output.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report).context("Failed to serialize report")?);
        }
        OutputFormat::Text => {
            println!("Verdict: {}", report.verdict);
            println!(
                "{}",
                ColorOutput::success(&SolutionFormatter::format_answer(&report))
            );
            println!("\n{}", SolutionFormatter::format_house_table(&report.houses));
            println!("Solved in {:.3}s", start_time.elapsed().as_secs_f64());
        }
    }

    if verbose {
        if let Some(stats) = &report.statistics {
            println!("\n{}", stats);
        }
    }

    Ok(())
}

fn sudoku_command(config_path: PathBuf, overrides: CliOverrides, all: bool, verbose: bool) -> Result<()> {
    let settings = load_settings(&config_path, &overrides)?;
    let blank = settings.sudoku.blank;

    if !all {
        let report = solve_sudoku(&settings, settings.sudoku.selected)
            .with_context(|| format!("Failed to solve sudoku {}", settings.sudoku.selected))?;

        match settings.output.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&report).context("Failed to serialize report")?);
            }
            OutputFormat::Text => print_sudoku_report(&report, blank, verbose),
        }
        return Ok(());
    }

    println!("{}", ColorOutput::info(&format!("Solving {} puzzles...", settings.sudoku.puzzles.len())));
    let start_time = Instant::now();
    let results = solve_all_sudoku(&settings);
    let total_time = start_time.elapsed();

    match settings.output.format {
        OutputFormat::Json => {
            let entries: Vec<serde_json::Value> = results
                .iter()
                .enumerate()
                .map(|(index, result)| batch_entry(index, result))
                .collect::<Result<_>>()?;
            println!("{}", serde_json::to_string_pretty(&entries).context("Failed to serialize reports")?);
        }
        OutputFormat::Text => {
            for (index, result) in results.iter().enumerate() {
                match result {
                    Ok(report) => print_sudoku_report(report, blank, verbose),
                    Err(e) => println!("{}\n", ColorOutput::error(&format!("Puzzle {}: {}", index, e))),
                }
            }
            println!("{}", SolutionFormatter::format_batch_summary(&results));
            println!("Total time: {:.3}s", total_time.as_secs_f64());
        }
    }

    let failed = results.iter().filter(|result| result.is_err()).count();
    if failed > 0 {
        println!(
            "{}",
            ColorOutput::warning(&format!("{} puzzle(s) failed, see the errors above", failed))
        );
        anyhow::bail!("{} of {} puzzles could not be solved", failed, results.len());
    }

    Ok(())
}

fn print_sudoku_report(report: &SudokuReport, blank: char, verbose: bool) {
    println!("{}", SolutionFormatter::format_sudoku_report(report, blank));
    if verbose {
        if let Some(stats) = &report.statistics {
            println!("{}", stats);
        }
    }
}

fn batch_entry(index: usize, result: &PuzzleResult<SudokuReport>) -> Result<serde_json::Value> {
    match result {
        Ok(report) => serde_json::to_value(report).context("Failed to serialize report"),
        Err(e) => {
            let verdict = match e {
                PuzzleError::Unsatisfiable => Some("unsatisfiable"),
                PuzzleError::Unknown => Some("unknown"),
                _ => None,
            };
            Ok(serde_json::json!({
                "index": index,
                "verdict": verdict,
                "error": e.to_string(),
            }))
        }
    }
}

fn list_command(config_path: PathBuf) -> Result<()> {
    let settings = Settings::load_or_default(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    println!(
        "{}",
        ColorOutput::highlight(&format!("{} configured puzzles (* = selected)", settings.sudoku.puzzles.len()))
    );
    println!(
        "{}",
        SolutionFormatter::format_puzzle_list(&settings.sudoku.puzzles, settings.sudoku.blank, settings.sudoku.selected)
    );

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up configuration..."));

    let config_dir = directory.join("config");
    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create directory {}", config_dir.display()))?;

    let default_settings = Settings::default();
    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        default_settings
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    let puzzles_path = config_dir.join("puzzles.txt");
    if !puzzles_path.exists() || force {
        save_puzzles_to_file(&default_settings.sudoku.puzzles, &puzzles_path)
            .context("Failed to create puzzle file")?;
        println!("Created: {}", puzzles_path.display());
    } else {
        println!("Skipped: {} (already exists)", puzzles_path.display());
    }

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit {}", config_path.display());
    println!("2. Run: puzzle_csp zebra --config {}", config_path.display());
    println!("3. Run: puzzle_csp sudoku --file {} --all", puzzles_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "puzzle_csp",
            "zebra",
            "--config",
            "test.yaml",
            "--question",
            "water",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Zebra { question, timeout, .. } => {
                assert_eq!(question, Some(Attribute::Water));
                assert_eq!(timeout, None);
            }
            _ => panic!("expected zebra command"),
        }

        let cli = Cli::try_parse_from(["puzzle_csp", "sudoku", "--all", "--backend", "varisat", "--timeout", "5"])
            .unwrap();
        match cli.command {
            Commands::Sudoku {
                all,
                backend,
                timeout,
                config,
                ..
            } => {
                assert!(all);
                assert_eq!(backend, Some(SolverBackend::Varisat));
                assert_eq!(timeout, Some(5));
                assert_eq!(config, default_config_path());
            }
            _ => panic!("expected sudoku command"),
        }
    }

    #[test]
    fn test_cli_rejects_conflicts() {
        assert!(Cli::try_parse_from(["puzzle_csp", "sudoku", "--all", "--index", "2"]).is_err());
        assert!(Cli::try_parse_from(["puzzle_csp", "sudoku", "--puzzle", "x", "--file", "p.txt"]).is_err());
        assert!(Cli::try_parse_from(["puzzle_csp", "zebra", "--question", "unicorn"]).is_err());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        let config_path = temp_dir.path().join("config/default.yaml");
        assert_eq!(Settings::from_file(&config_path).unwrap(), Settings::default());

        let puzzles = load_puzzles_from_file(temp_dir.path().join("config/puzzles.txt")).unwrap();
        assert_eq!(puzzles, Settings::default().sudoku.puzzles);
    }

    #[test]
    fn test_batch_entry_for_failure() {
        let entry = batch_entry(3, &Err(PuzzleError::Unknown)).unwrap();
        assert_eq!(entry["index"], 3);
        assert_eq!(entry["verdict"], "unknown");
    }
}
