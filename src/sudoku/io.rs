//! Puzzle list files
//!
//! One 81-character puzzle per line. Lines that are empty or start with
//! `#` are skipped. Lines are not trimmed: leading and trailing spaces are
//! blank cells.

use anyhow::{Context, Result};
use std::path::Path;

/// Load puzzle strings from a text file
pub fn load_puzzles_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read puzzle file: {}", path.as_ref().display()))?;

    let puzzles = parse_puzzle_list(&content);
    if puzzles.is_empty() {
        anyhow::bail!("Puzzle file {} contains no puzzles", path.as_ref().display());
    }

    Ok(puzzles)
}

/// Split a puzzle list into puzzle strings
pub fn parse_puzzle_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Save puzzle strings to a text file, one per line
pub fn save_puzzles_to_file<P: AsRef<Path>>(puzzles: &[String], path: P) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let mut content = String::from("# One puzzle per line, 81 characters, space for unknown cells\n");
    for puzzle in puzzles {
        content.push_str(puzzle);
        content.push('\n');
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write puzzle file: {}", path.as_ref().display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sudoku::library::bundled_puzzles;
    use tempfile::tempdir;

    #[test]
    fn test_parse_keeps_leading_blanks() {
        let content = "# header\n\n   4\r\n12 \n";
        let puzzles = parse_puzzle_list(content);
        assert_eq!(puzzles, vec!["   4".to_string(), "12 ".to_string()]);
    }

    #[test]
    fn test_file_round_trip() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("nested/puzzles.txt");

        let puzzles = bundled_puzzles();
        save_puzzles_to_file(&puzzles, &file_path).unwrap();

        let loaded = load_puzzles_from_file(&file_path).unwrap();
        assert_eq!(loaded, puzzles);
    }

    #[test]
    fn test_empty_file_rejected() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("empty.txt");
        std::fs::write(&file_path, "# nothing here\n").unwrap();

        assert!(load_puzzles_from_file(&file_path).is_err());
        assert!(load_puzzles_from_file(temp_dir.path().join("missing.txt")).is_err());
    }
}
