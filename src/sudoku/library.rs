//! Sample puzzles shipped as configuration defaults

/// Seven sample puzzles, row-major, space for unknown cells
pub const BUNDLED_PUZZLES: [&str; 7] = [
    "53  7    6  195    98    6 8   6   34  8 3  17   2   6 6    28    419  5    8  79",
    "       75  4  5   8 17 6   36  2 7 1   5 1   1 5 8  96   1 82 3   4  9  48       ",
    " 9 7 4  1    6 2 8    1 43  6     59   1 3   97     8  52 7    6 8 4    7  5 8 2 ",
    "67 38      921   85    736 1 8  4 7  5 1 8 4  2 6  8 5 175    24   321      61 84",
    "27  15  8   3  7 4    7     5 1   7   9   2   6   2 5     8    6 5  4   8  59  41",
    "8 64 3    5     7     2    32  8  5   8 5 4  1   7  93    4     9     4    6 72 8",
    " 8 9 3 7            2 1 6  8  3 9  5  6   4  5  1 7  9  8 2 5            7 8 1 2 ",
];

/// Puzzle solved when nothing else is selected
pub const DEFAULT_SELECTION: usize = 5;

pub fn bundled_puzzles() -> Vec<String> {
    BUNDLED_PUZZLES.iter().map(|puzzle| puzzle.to_string()).collect()
}
