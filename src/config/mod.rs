//! Configuration management for the puzzle solvers

pub mod settings;

pub use settings::{
    default_config_path, CliOverrides, OutputConfig, OutputFormat, Settings, SolverBackend, SolverConfig,
    SudokuConfig, ZebraConfig,
};
