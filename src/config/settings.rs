//! Configuration settings for the puzzle solvers

use crate::sudoku::{bundled_puzzles, DEFAULT_SELECTION};
use crate::zebra::{canonical_clues, Attribute, Clue};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub solver: SolverConfig,
    pub sudoku: SudokuConfig,
    pub zebra: ZebraConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    pub backend: SolverBackend,
    /// Zero disables the limit
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SolverBackend {
    Cadical,
    Varisat,
}

impl std::fmt::Display for SolverBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverBackend::Cadical => write!(f, "cadical"),
            SolverBackend::Varisat => write!(f, "varisat"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SudokuConfig {
    /// Flattened row-major puzzles
    pub puzzles: Vec<String>,
    /// Index into `puzzles` solved by default
    pub selected: usize,
    /// Marker for unknown cells besides `.` and `0`
    pub blank: char,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZebraConfig {
    /// Whose owner is asked for
    pub question: Attribute,
    pub clues: Vec<Clue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            solver: SolverConfig {
                backend: SolverBackend::Cadical,
                timeout_seconds: 60,
            },
            sudoku: SudokuConfig {
                puzzles: bundled_puzzles(),
                selected: DEFAULT_SELECTION,
                blank: ' ',
            },
            zebra: ZebraConfig {
                question: Attribute::Fish,
                clues: canonical_clues(),
            },
            output: OutputConfig {
                format: OutputFormat::Text,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file is missing
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            log::warn!("Config file {} not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save settings to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    ///
    /// Puzzle strings themselves are checked when they are solved, so a
    /// malformed entry does not hide the others.
    pub fn validate(&self) -> Result<()> {
        if self.sudoku.puzzles.is_empty() {
            anyhow::bail!("At least one sudoku puzzle must be configured");
        }

        if self.sudoku.selected >= self.sudoku.puzzles.len() {
            anyhow::bail!(
                "Selected puzzle {} out of range, {} configured",
                self.sudoku.selected,
                self.sudoku.puzzles.len()
            );
        }

        if ('1'..='9').contains(&self.sudoku.blank) {
            anyhow::bail!("Blank marker {:?} cannot be a digit", self.sudoku.blank);
        }

        if self.zebra.clues.is_empty() {
            anyhow::bail!("At least one zebra clue must be configured");
        }

        for (index, clue) in self.zebra.clues.iter().enumerate() {
            clue.validate()
                .with_context(|| format!("Zebra clue {} is malformed", index + 1))?;
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(backend) = cli_overrides.backend {
            self.solver.backend = backend;
        }
        if let Some(timeout_seconds) = cli_overrides.timeout_seconds {
            self.solver.timeout_seconds = timeout_seconds;
        }
        if let Some(ref puzzles) = cli_overrides.puzzles {
            self.sudoku.puzzles = puzzles.clone();
            self.sudoku.selected = 0;
        }
        if let Some(selected) = cli_overrides.selected {
            self.sudoku.selected = selected;
        }
        if let Some(question) = cli_overrides.question {
            self.zebra.question = question;
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub backend: Option<SolverBackend>,
    pub timeout_seconds: Option<u64>,
    /// Replaces the configured puzzle list
    pub puzzles: Option<Vec<String>>,
    pub selected: Option<usize>,
    pub question: Option<Attribute>,
    pub format: Option<OutputFormat>,
}

/// Default location of the configuration file
pub fn default_config_path() -> PathBuf {
    PathBuf::from("config/default.yaml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.sudoku.puzzles.len(), 7);
        assert_eq!(settings.zebra.clues.len(), 15);
        assert_eq!(settings.zebra.question, Attribute::Fish);
        assert!(settings.sudoku.selected < settings.sudoku.puzzles.len());
    }

    #[test]
    fn test_yaml_round_trip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config/default.yaml");

        let mut settings = Settings::default();
        settings.solver.backend = SolverBackend::Varisat;
        settings.sudoku.blank = '.';
        settings.to_file(&config_path).unwrap();

        let loaded = Settings::from_file(&config_path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_parse_handwritten_yaml() {
        let yaml = r#"
solver:
  backend: varisat
  timeout_seconds: 0
sudoku:
  puzzles:
    - "53  7    6  195    98    6 8   6   34  8 3  17   2   6 6    28    419  5    8  79"
  selected: 0
  blank: " "
zebra:
  question: zebra_missing
  clues: []
output:
  format: json
"#;
        // Unknown attribute names are rejected
        assert!(serde_yaml::from_str::<Settings>(yaml).is_err());

        let yaml = yaml.replace("zebra_missing", "horses").replace(
            "clues: []",
            "clues:\n    - { kind: same, a: british, b: red }\n    - { kind: in_house, attribute: milk, house: 3 }",
        );
        let settings: Settings = serde_yaml::from_str(&yaml).unwrap();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.solver.backend, SolverBackend::Varisat);
        assert_eq!(settings.zebra.question, Attribute::Horses);
        assert_eq!(settings.output.format, OutputFormat::Json);
        assert_eq!(
            settings.zebra.clues[1],
            Clue::InHouse {
                attribute: Attribute::Milk,
                house: 3
            }
        );
    }

    #[test]
    fn test_validation_failures() {
        let mut settings = Settings::default();
        settings.sudoku.selected = 7;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.sudoku.blank = '5';
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.sudoku.puzzles.clear();
        settings.sudoku.selected = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.zebra.clues.clear();
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.zebra.clues.push(Clue::InHouse {
            attribute: Attribute::Tea,
            house: 6,
        });
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let temp_dir = tempdir().unwrap();
        let settings = Settings::load_or_default(temp_dir.path().join("absent.yaml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_cli_overrides() {
        let mut settings = Settings::default();
        settings.merge_with_cli(&CliOverrides {
            backend: Some(SolverBackend::Varisat),
            timeout_seconds: Some(5),
            puzzles: Some(vec![".".repeat(81)]),
            question: Some(Attribute::Water),
            ..Default::default()
        });

        assert_eq!(settings.solver.backend, SolverBackend::Varisat);
        assert_eq!(settings.sudoku.selected, 0);
        assert_eq!(settings.sudoku.puzzles, vec![".".repeat(81)]);
        assert_eq!(settings.zebra.question, Attribute::Water);
        assert_eq!(settings.solver.timeout_seconds, 5);
        assert_eq!(settings.output.format, OutputFormat::Text);
    }
}
