//! Display and output formatting utilities

use crate::error::PuzzleResult;
use crate::sudoku::{SudokuGrid, GRID_SIZE};
use crate::zebra::{Category, House};
use crate::{SudokuReport, ZebraReport};

/// Format solutions for display
pub struct SolutionFormatter;

impl SolutionFormatter {
    /// One-line answer to the five-house question
    pub fn format_answer(report: &ZebraReport) -> String {
        format!(
            "The {} owns the {}",
            report.owner.label(),
            report.question.label().to_lowercase()
        )
    }

    /// House table with one column per category
    pub fn format_house_table(houses: &[House]) -> String {
        const WIDTH: usize = 12;
        let mut output = String::new();

        output.push_str(&format!("{:<6}", "House"));
        for category in Category::ALL {
            output.push_str(&format!("| {:<WIDTH$}", category.label()));
        }
        output.push('\n');

        output.push_str(&"-".repeat(6));
        for _ in Category::ALL {
            output.push_str(&format!("+{}", "-".repeat(WIDTH + 1)));
        }
        output.push('\n');

        for house in houses {
            output.push_str(&format!("{:<6}", house.number));
            for category in Category::ALL {
                let label = house.attribute(category).map_or("?", |attribute| attribute.label());
                output.push_str(&format!("| {:<WIDTH$}", label));
            }
            output.push('\n');
        }

        output
    }

    /// Puzzle and solution boxed grids next to each other
    pub fn format_sudoku_side_by_side(puzzle: &SudokuGrid, solution: &SudokuGrid, blank: char) -> String {
        let left = puzzle.format_boxed(blank);
        let right = solution.format_boxed(blank);
        let width = left.lines().map(str::len).max().unwrap_or(0);

        let mut output = format!("{:<width$}    {}\n", "Puzzle", "Solution");
        for (puzzle_line, solution_line) in left.lines().zip(right.lines()) {
            output.push_str(&format!("{:<width$}    {}\n", puzzle_line, solution_line));
        }
        output
    }

    /// Full text block for one solved Sudoku
    pub fn format_sudoku_report(report: &SudokuReport, blank: char) -> String {
        let mut output = format!(
            "Puzzle {} ({} clues): {}\n",
            report.index,
            report.puzzle.clue_count(),
            report.verdict
        );
        output.push_str(&Self::format_sudoku_side_by_side(&report.puzzle, &report.solution, blank));
        output
    }

    /// Configured puzzles with clue counts, or why they do not parse
    pub fn format_puzzle_list(puzzles: &[String], blank: char, selected: usize) -> String {
        let mut output = String::new();
        output.push_str("Index | Clues | Puzzle\n");
        output.push_str("------|-------|");
        output.push_str(&"-".repeat(GRID_SIZE * GRID_SIZE + 1));
        output.push('\n');

        for (index, input) in puzzles.iter().enumerate() {
            let marker = if index == selected { '*' } else { ' ' };
            match SudokuGrid::parse(input, blank) {
                Ok(grid) => output.push_str(&format!(
                    "{:>4}{} | {:>5} | {}\n",
                    index,
                    marker,
                    grid.clue_count(),
                    grid.to_flat_string('.')
                )),
                Err(e) => output.push_str(&format!("{:>4}{} | {:>5} | {}\n", index, marker, "-", e)),
            }
        }

        output
    }

    /// Batch summary table
    pub fn format_batch_summary(results: &[PuzzleResult<SudokuReport>]) -> String {
        let mut output = String::new();

        output.push_str("Batch Summary:\n");
        output.push_str("Index | Clues | Time(ms) | Result\n");
        output.push_str("------|-------|----------|----------\n");

        for (index, result) in results.iter().enumerate() {
            match result {
                Ok(report) => output.push_str(&format!(
                    "{:5} | {:5} | {:8} | {}\n",
                    index,
                    report.puzzle.clue_count(),
                    report
                        .statistics
                        .as_ref()
                        .map_or(0, |stats| stats.solve_time.as_millis()),
                    report.verdict
                )),
                Err(e) => output.push_str(&format!("{:5} | {:>5} | {:>8} | {}\n", index, "-", "-", e)),
            }
        }

        let solved = results.iter().filter(|result| result.is_ok()).count();
        output.push_str(&format!("\nSolved {}/{}\n", solved, results.len()));
        output
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

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }

    pub fn highlight(text: &str) -> String {
        Self::colored(text, Color::Cyan)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Cyan,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Cyan => 36,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csp::VerdictKind;
    use crate::error::PuzzleError;
    use crate::sudoku::BUNDLED_PUZZLES;
    use crate::zebra::Attribute;
    use std::collections::BTreeMap;

    const SOLVED: &str = "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    fn sudoku_report() -> SudokuReport {
        SudokuReport {
            index: 0,
            verdict: VerdictKind::Satisfiable,
            puzzle: SudokuGrid::parse(BUNDLED_PUZZLES[0], ' ').unwrap(),
            solution: SudokuGrid::parse(SOLVED, ' ').unwrap(),
            statistics: None,
        }
    }

    #[test]
    fn test_answer_sentence() {
        let report = ZebraReport {
            verdict: VerdictKind::Satisfiable,
            question: Attribute::Fish,
            owner: Attribute::German,
            houses: Vec::new(),
            statistics: None,
        };
        assert_eq!(SolutionFormatter::format_answer(&report), "The German owns the fish");
    }

    #[test]
    fn test_house_table() {
        let mut attributes = BTreeMap::new();
        attributes.insert(Category::Color, Attribute::Yellow);
        attributes.insert(Category::Nationality, Attribute::Norwegian);
        let houses = vec![House { number: 1, attributes }];

        let table = SolutionFormatter::format_house_table(&houses);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("House | Color"));
        assert!(lines[2].contains("Norwegian"));
        assert!(lines[2].contains('?'));
    }

    #[test]
    fn test_side_by_side() {
        let report = sudoku_report();
        let text = SolutionFormatter::format_sudoku_report(&report, ' ');
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 15);
        assert!(lines[0].contains("30 clues"));
        assert_eq!(lines[3], "|53 | 7 |   |    |534|678|912|");
    }

    #[test]
    fn test_puzzle_list_marks_errors() {
        let puzzles = vec![BUNDLED_PUZZLES[0].to_string(), "12".to_string()];
        let text = SolutionFormatter::format_puzzle_list(&puzzles, ' ', 0);

        assert!(text.contains("   0* |    30 | 53..7...."));
        assert!(text.contains("got 2"));
    }

    #[test]
    fn test_batch_summary() {
        let results = vec![Ok(sudoku_report()), Err(PuzzleError::Unsatisfiable)];
        let text = SolutionFormatter::format_batch_summary(&results);
        assert!(text.contains("Solved 1/2"));
        assert!(text.contains("unsatisfiable"));
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        // Should either be colored or plain text
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
