//! Sudoku encoding and decoding

use super::grid::{all_cells, block_cells, column_cells, row_cells, SudokuGrid, GRID_SIZE};
use crate::csp::{Assignment, Constraint, ConstraintSet, ConstraintSolver, Domain, VarId, VariableManager};
use crate::error::{PuzzleError, PuzzleResult};
use anyhow::Result;

/// Valid digits
pub const DIGITS: Domain = Domain {
    min: 1,
    max: GRID_SIZE as i32,
};

/// Variable key: one variable per grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

/// Variables and constraints of an encoded puzzle
#[derive(Debug, Clone)]
pub struct SudokuEncoding {
    pub variables: VariableManager<Cell>,
    pub constraints: ConstraintSet,
}

impl SudokuEncoding {
    fn cell(&self, row: usize, col: usize) -> Result<VarId> {
        self.variables.get(&Cell { row, col })
    }

    fn group(&self, cells: &[(usize, usize)]) -> Result<Vec<VarId>> {
        cells.iter().map(|&(row, col)| self.cell(row, col)).collect()
    }
}

/// Build the constraint set of a puzzle: a 1-9 variable per cell, one
/// equality per clue, and distinctness per row, column and block.
pub fn encode(puzzle: &SudokuGrid) -> PuzzleResult<SudokuEncoding> {
    let mut variables = VariableManager::new();
    variables.declare_all(all_cells().map(|(row, col)| Cell { row, col }))?;

    let mut encoding = SudokuEncoding {
        constraints: ConstraintSet::new(variables.variable_count()),
        variables,
    };

    for (row, col) in all_cells() {
        let var = encoding.cell(row, col)?;
        encoding.constraints.add(Constraint::within(var, DIGITS))?;
    }

    for (row, col) in all_cells() {
        if let Some(clue) = puzzle.get(row, col) {
            let var = encoding.cell(row, col)?;
            encoding.constraints.add(Constraint::EqualsValue {
                var,
                value: i32::from(clue),
            })?;
        }
    }

    for index in 0..GRID_SIZE {
        let rows = encoding.group(&row_cells(index))?;
        encoding.constraints.add(Constraint::AllDifferent(rows))?;
    }
    for index in 0..GRID_SIZE {
        let columns = encoding.group(&column_cells(index))?;
        encoding.constraints.add(Constraint::AllDifferent(columns))?;
    }
    for index in 0..GRID_SIZE {
        let block = encoding.group(&block_cells(index))?;
        encoding.constraints.add(Constraint::AllDifferent(block))?;
    }

    log::debug!(
        "Encoded sudoku with {} clues: {} variables, {} constraints",
        puzzle.clue_count(),
        encoding.variables.variable_count(),
        encoding.constraints.len()
    );

    Ok(encoding)
}

/// Read a model back into a filled grid
///
/// The grid must keep every clue and be a valid solution.
pub fn decode(encoding: &SudokuEncoding, puzzle: &SudokuGrid, model: &Assignment) -> PuzzleResult<SudokuGrid> {
    let mut solution = SudokuGrid::empty();

    for (cell, var) in encoding.variables.iter() {
        let value = model
            .value(var)
            .filter(|value| DIGITS.contains(*value))
            .ok_or_else(|| {
                PuzzleError::DecodeInconsistency(format!(
                    "cell ({}, {}) has value {:?}",
                    cell.row,
                    cell.col,
                    model.value(var)
                ))
            })?;
        solution.cells[cell.row][cell.col] = value as u8;
    }

    if !solution.keeps_clues_of(puzzle) {
        return Err(PuzzleError::DecodeInconsistency(
            "decoded grid overwrites a clue".to_string(),
        ));
    }
    if !solution.is_valid_solution() {
        return Err(PuzzleError::DecodeInconsistency(
            "decoded grid repeats a digit in a row, column or block".to_string(),
        ));
    }

    Ok(solution)
}

/// Encode, solve once, and decode
pub fn solve<S>(puzzle: &SudokuGrid, solver: &mut S) -> PuzzleResult<SudokuGrid>
where
    S: ConstraintSolver + ?Sized,
{
    let encoding = encode(puzzle)?;
    let model = solver.solve(&encoding.constraints)?.into_model()?;
    decode(&encoding, puzzle, &model)
}

/// Parse and solve a flattened puzzle string
///
/// Malformed input is rejected before the solver is touched.
pub fn solve_str<S>(input: &str, blank: char, solver: &mut S) -> PuzzleResult<SudokuGrid>
where
    S: ConstraintSolver + ?Sized,
{
    let puzzle = SudokuGrid::parse(input, blank)?;
    solve(&puzzle, solver)
}
