//! 9×9 Sudoku

pub mod grid;
pub mod io;
pub mod library;
pub mod puzzle;

pub use grid::{SudokuGrid, BLOCK_SIZE, CELL_COUNT, GRID_SIZE};
pub use io::{load_puzzles_from_file, parse_puzzle_list, save_puzzles_to_file};
pub use library::{bundled_puzzles, BUNDLED_PUZZLES, DEFAULT_SELECTION};
pub use puzzle::{Cell, SudokuEncoding};
