//! Sudoku grid representation, parsing and formatting

use crate::error::{PuzzleError, PuzzleResult};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Side of a sub-block
pub const BLOCK_SIZE: usize = 3;
/// Side of the grid
pub const GRID_SIZE: usize = BLOCK_SIZE * BLOCK_SIZE;
/// Cells in the grid
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;
/// Blank markers accepted whatever marker is configured
pub const EXTRA_BLANKS: [char; 2] = ['.', '0'];

/// A 9×9 grid; `0` marks an unknown cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SudokuGrid {
    pub cells: [[u8; GRID_SIZE]; GRID_SIZE],
}

impl Default for SudokuGrid {
    fn default() -> Self {
        Self::empty()
    }
}

impl SudokuGrid {
    /// Create a grid with every cell unknown
    pub fn empty() -> Self {
        Self {
            cells: [[0; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Parse a flattened row-major puzzle
    ///
    /// Digits `1`-`9` are clues; `blank`, `.` and `0` are unknown cells.
    /// Nothing else is accepted, and the input must be exactly 81
    /// characters long.
    pub fn parse(input: &str, blank: char) -> PuzzleResult<Self> {
        let actual = input.chars().count();
        if actual != CELL_COUNT {
            return Err(PuzzleError::WrongLength {
                expected: CELL_COUNT,
                actual,
            });
        }

        let mut grid = Self::empty();
        for (position, character) in input.chars().enumerate() {
            let value = match character {
                '1'..='9' => character as u8 - b'0',
                c if c == blank || EXTRA_BLANKS.contains(&c) => 0,
                _ => {
                    return Err(PuzzleError::InvalidCharacter {
                        character,
                        position,
                    })
                }
            };
            grid.cells[position / GRID_SIZE][position % GRID_SIZE] = value;
        }

        Ok(grid)
    }

    /// Digit at a cell, `None` when unknown or out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.cells
            .get(row)
            .and_then(|values| values.get(col))
            .copied()
            .filter(|value| *value != 0)
    }

    /// Set a cell, `0` clearing it
    pub fn set(&mut self, row: usize, col: usize, value: u8) -> Result<()> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            anyhow::bail!("Coordinates ({}, {}) out of bounds for {}x{} grid", row, col, GRID_SIZE, GRID_SIZE);
        }
        if value as usize > GRID_SIZE {
            anyhow::bail!("Value {} out of range 0-{}", value, GRID_SIZE);
        }
        self.cells[row][col] = value;
        Ok(())
    }

    /// Number of known cells
    pub fn clue_count(&self) -> usize {
        self.cells.iter().flatten().filter(|value| **value != 0).count()
    }

    pub fn is_complete(&self) -> bool {
        self.clue_count() == CELL_COUNT
    }

    /// Every row, column and block holds exactly the digits 1-9
    pub fn is_valid_solution(&self) -> bool {
        units().iter().all(|unit| {
            let mut seen = [false; GRID_SIZE + 1];
            unit.iter().all(|&(row, col)| {
                let value = self.cells[row][col] as usize;
                value != 0 && value <= GRID_SIZE && !std::mem::replace(&mut seen[value], true)
            })
        })
    }

    /// Every clue of `puzzle` appears unchanged in this grid
    pub fn keeps_clues_of(&self, puzzle: &SudokuGrid) -> bool {
        all_cells().all(|(row, col)| match puzzle.get(row, col) {
            Some(clue) => self.cells[row][col] == clue,
            None => true,
        })
    }

    /// Flattened row-major form accepted by [`SudokuGrid::parse`]
    pub fn to_flat_string(&self, blank: char) -> String {
        self.cells
            .iter()
            .flatten()
            .map(|value| match value {
                0 => blank,
                digit => char::from(b'0' + digit),
            })
            .collect()
    }

    /// Render with `+---+---+---+` separators between blocks
    pub fn format_boxed(&self, blank: char) -> String {
        let separator = format!("+{}\n", "---+".repeat(BLOCK_SIZE));
        let mut output = String::with_capacity(2 * separator.len() * GRID_SIZE);

        output.push_str(&separator);
        for (row, values) in self.cells.iter().enumerate() {
            output.push('|');
            for (col, value) in values.iter().enumerate() {
                output.push(match value {
                    0 => blank,
                    digit => char::from(b'0' + digit),
                });
                if (col + 1) % BLOCK_SIZE == 0 {
                    output.push('|');
                }
            }
            output.push('\n');
            if (row + 1) % BLOCK_SIZE == 0 {
                output.push_str(&separator);
            }
        }

        output
    }
}

impl fmt::Display for SudokuGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_boxed(' '))
    }
}

/// All `(row, col)` positions in row-major order
pub fn all_cells() -> impl Iterator<Item = (usize, usize)> {
    (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| (row, col)))
}

pub fn row_cells(row: usize) -> Vec<(usize, usize)> {
    (0..GRID_SIZE).map(|col| (row, col)).collect()
}

pub fn column_cells(col: usize) -> Vec<(usize, usize)> {
    (0..GRID_SIZE).map(|row| (row, col)).collect()
}

/// Cells of block `block`, numbered row-major from the top-left
pub fn block_cells(block: usize) -> Vec<(usize, usize)> {
    let top = (block / BLOCK_SIZE) * BLOCK_SIZE;
    let left = (block % BLOCK_SIZE) * BLOCK_SIZE;
    (0..BLOCK_SIZE)
        .flat_map(|dr| (0..BLOCK_SIZE).map(move |dc| (top + dr, left + dc)))
        .collect()
}

/// Every row, then every column, then every block
pub fn units() -> Vec<Vec<(usize, usize)>> {
    (0..GRID_SIZE)
        .map(row_cells)
        .chain((0..GRID_SIZE).map(column_cells))
        .chain((0..GRID_SIZE).map(block_cells))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str = "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn test_parse_puzzle() {
        let input = "53  7    6  195    98    6 8   6   34  8 3  17   2   6 6    28    419  5    8  79";
        let grid = SudokuGrid::parse(input, ' ').unwrap();

        assert_eq!(grid.get(0, 0), Some(5));
        assert_eq!(grid.get(0, 2), None);
        assert_eq!(grid.get(8, 8), Some(9));
        assert_eq!(grid.clue_count(), 30);
        assert!(!grid.is_complete());
    }

    #[test]
    fn test_wrong_length() {
        let err = SudokuGrid::parse("123", ' ').unwrap_err();
        assert!(matches!(err, PuzzleError::WrongLength { expected: 81, actual: 3 }));

        let long = "1".repeat(82);
        assert!(SudokuGrid::parse(&long, ' ').unwrap_err().is_malformed_input());
    }

    #[test]
    fn test_invalid_character() {
        let mut input = ".".repeat(81);
        input.replace_range(10..11, "x");
        let err = SudokuGrid::parse(&input, ' ').unwrap_err();
        assert!(matches!(err, PuzzleError::InvalidCharacter { character: 'x', position: 10 }));
    }

    #[test]
    fn test_blank_markers() {
        let dotted = SudokuGrid::parse(&".".repeat(81), ' ').unwrap();
        let zeroed = SudokuGrid::parse(&"0".repeat(81), ' ').unwrap();
        let custom = SudokuGrid::parse(&"_".repeat(81), '_').unwrap();
        assert_eq!(dotted, SudokuGrid::empty());
        assert_eq!(zeroed, SudokuGrid::empty());
        assert_eq!(custom, SudokuGrid::empty());

        // A space is not a blank when another marker is configured
        assert!(SudokuGrid::parse(&" ".repeat(81), '_').is_err());
    }

    #[test]
    fn test_multibyte_length_counts_characters() {
        let input = format!("é{}", ".".repeat(80));
        let err = SudokuGrid::parse(&input, ' ').unwrap_err();
        assert!(matches!(err, PuzzleError::InvalidCharacter { character: 'é', position: 0 }));
    }

    #[test]
    fn test_solution_validity() {
        let solved = SudokuGrid::parse(SOLVED, ' ').unwrap();
        assert!(solved.is_complete());
        assert!(solved.is_valid_solution());

        let mut broken = solved;
        broken.cells[0].swap(0, 1);
        assert!(!broken.is_valid_solution());

        assert!(!SudokuGrid::empty().is_valid_solution());
    }

    #[test]
    fn test_keeps_clues() {
        let solved = SudokuGrid::parse(SOLVED, ' ').unwrap();
        let mut puzzle = SudokuGrid::empty();
        puzzle.set(0, 0, 5).unwrap();
        assert!(solved.keeps_clues_of(&puzzle));

        puzzle.set(0, 1, 9).unwrap();
        assert!(!solved.keeps_clues_of(&puzzle));
    }

    #[test]
    fn test_flat_round_trip() {
        let grid = SudokuGrid::parse(SOLVED, ' ').unwrap();
        assert_eq!(grid.to_flat_string(' '), SOLVED);

        let mut sparse = SudokuGrid::empty();
        sparse.set(4, 4, 7).unwrap();
        let flat = sparse.to_flat_string('.');
        assert_eq!(flat.chars().nth(40), Some('7'));
        assert_eq!(SudokuGrid::parse(&flat, ' ').unwrap(), sparse);
    }

    #[test]
    fn test_boxed_format() {
        let grid = SudokuGrid::parse(SOLVED, ' ').unwrap();
        let text = grid.format_boxed(' ');
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "+---+---+---+");
        assert_eq!(lines[1], "|534|678|912|");
        assert_eq!(lines[4], "+---+---+---+");
        assert_eq!(lines[12], "+---+---+---+");
    }

    #[test]
    fn test_set_bounds() {
        let mut grid = SudokuGrid::empty();
        assert!(grid.set(9, 0, 1).is_err());
        assert!(grid.set(0, 0, 10).is_err());
    }

    #[test]
    fn test_units() {
        let units = units();
        assert_eq!(units.len(), 27);
        assert!(units.iter().all(|unit| unit.len() == GRID_SIZE));
        assert_eq!(block_cells(4)[0], (3, 3));
        assert_eq!(block_cells(8)[8], (8, 8));
    }
}
