//! Puzzle CSP solver
//!
//! Encodes the five-house deduction puzzle and 9×9 Sudoku as finite-domain
//! integer constraints and decides them with an off-the-shelf SAT backend.

pub mod config;
pub mod csp;
pub mod error;
pub mod sudoku;
pub mod utils;
pub mod zebra;

pub use config::Settings;
pub use error::{PuzzleError, PuzzleResult};

use csp::{ConstraintSolver, SolverStatistics, UnifiedSolver, VerdictKind};
use rayon::prelude::*;
use serde::Serialize;
use sudoku::SudokuGrid;
use zebra::{Attribute, House, ZebraPuzzle};

/// Answer to the configured five-house question
#[derive(Debug, Clone, Serialize)]
pub struct ZebraReport {
    pub verdict: VerdictKind,
    pub question: Attribute,
    /// Nationality living with the question attribute
    pub owner: Attribute,
    pub houses: Vec<House>,
    pub statistics: Option<SolverStatistics>,
}

/// A solved Sudoku next to its puzzle
#[derive(Debug, Clone, Serialize)]
pub struct SudokuReport {
    pub index: usize,
    pub verdict: VerdictKind,
    pub puzzle: SudokuGrid,
    pub solution: SudokuGrid,
    pub statistics: Option<SolverStatistics>,
}

/// Solve the configured five-house puzzle
pub fn solve_zebra(settings: &Settings) -> PuzzleResult<ZebraReport> {
    let puzzle = ZebraPuzzle::new(settings.zebra.clues.clone())?;
    let mut solver = UnifiedSolver::from_config(&settings.solver);

    let solution = puzzle.solve(&mut solver)?;
    let owner = solution.owner_of(settings.zebra.question)?;
    log::info!("{} owns the {}", owner, settings.zebra.question);

    Ok(ZebraReport {
        verdict: VerdictKind::Satisfiable,
        question: settings.zebra.question,
        owner,
        houses: solution.houses()?,
        statistics: solver.last_statistics().cloned(),
    })
}

/// Solve the configured puzzle at `index`
pub fn solve_sudoku(settings: &Settings, index: usize) -> PuzzleResult<SudokuReport> {
    let input = settings.sudoku.puzzles.get(index).ok_or(PuzzleError::NoSuchPuzzle {
        index,
        available: settings.sudoku.puzzles.len(),
    })?;

    let puzzle = SudokuGrid::parse(input, settings.sudoku.blank)?;
    let mut solver = UnifiedSolver::from_config(&settings.solver);
    let solution = sudoku::puzzle::solve(&puzzle, &mut solver)?;
    log::info!("Solved sudoku {} ({} clues)", index, puzzle.clue_count());

    Ok(SudokuReport {
        index,
        verdict: VerdictKind::Satisfiable,
        puzzle,
        solution,
        statistics: solver.last_statistics().cloned(),
    })
}

/// Solve every configured puzzle in parallel, results in input order
///
/// Each puzzle gets its own encoder and solver; one failure does not stop
/// the others.
pub fn solve_all_sudoku(settings: &Settings) -> Vec<PuzzleResult<SudokuReport>> {
    (0..settings.sudoku.puzzles.len())
        .into_par_iter()
        .map(|index| solve_sudoku(settings, index))
        .collect()
}
