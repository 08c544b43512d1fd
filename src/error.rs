//! Error taxonomy for puzzle solving

use thiserror::Error;

/// Failures surfaced to callers of the puzzle solvers
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("puzzle must be {expected} characters long, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("invalid clue: {0}")]
    InvalidClue(String),

    #[error("no puzzle at index {index}, {available} configured")]
    NoSuchPuzzle { index: usize, available: usize },

    #[error("puzzle is unsatisfiable")]
    Unsatisfiable,

    #[error("solver could not decide the puzzle within its limits")]
    Unknown,

    #[error("decoded model is inconsistent with the encoding: {0}")]
    DecodeInconsistency(String),

    #[error(transparent)]
    Solver(#[from] anyhow::Error),
}

impl PuzzleError {
    /// Input rejected before any constraint was built
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            PuzzleError::WrongLength { .. }
                | PuzzleError::InvalidCharacter { .. }
                | PuzzleError::InvalidClue(_)
                | PuzzleError::NoSuchPuzzle { .. }
        )
    }
}

pub type PuzzleResult<T> = std::result::Result<T, PuzzleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_classification() {
        assert!(PuzzleError::WrongLength { expected: 81, actual: 80 }.is_malformed_input());
        assert!(PuzzleError::InvalidCharacter { character: 'x', position: 3 }.is_malformed_input());
        assert!(PuzzleError::NoSuchPuzzle { index: 9, available: 7 }.is_malformed_input());
        assert!(!PuzzleError::Unsatisfiable.is_malformed_input());
        assert!(!PuzzleError::Unknown.is_malformed_input());
    }

    #[test]
    fn test_messages() {
        let err = PuzzleError::WrongLength { expected: 81, actual: 3 };
        assert_eq!(err.to_string(), "puzzle must be 81 characters long, got 3");

        let err = PuzzleError::InvalidCharacter { character: 'x', position: 7 };
        assert_eq!(err.to_string(), "invalid character 'x' at position 7");

        let err = PuzzleError::NoSuchPuzzle { index: 9, available: 7 };
        assert_eq!(err.to_string(), "no puzzle at index 9, 7 configured");

        let err: PuzzleError = anyhow::anyhow!("backend exploded").into();
        assert_eq!(err.to_string(), "backend exploded");
    }
}
