//! Solver results: assignments and satisfiability verdicts

use super::VarId;
use crate::error::{PuzzleError, PuzzleResult};
use serde::{Deserialize, Serialize};

/// A total mapping from every variable to its solved value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    values: Vec<i32>,
}

impl Assignment {
    /// Create an assignment where `values[i]` is the value of `VarId(i)`
    pub fn new(values: Vec<i32>) -> Self {
        Self { values }
    }

    /// Value of a variable, `None` if the handle is out of range
    pub fn value(&self, var: VarId) -> Option<i32> {
        self.values.get(var.index()).copied()
    }

    /// Number of variables covered
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }
}

/// Outcome of a one-shot satisfiability check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Satisfiable(Assignment),
    Unsatisfiable,
    /// The solver gave up, e.g. on timeout
    Unknown,
}

impl Verdict {
    pub fn kind(&self) -> VerdictKind {
        match self {
            Verdict::Satisfiable(_) => VerdictKind::Satisfiable,
            Verdict::Unsatisfiable => VerdictKind::Unsatisfiable,
            Verdict::Unknown => VerdictKind::Unknown,
        }
    }

    pub fn is_satisfiable(&self) -> bool {
        matches!(self, Verdict::Satisfiable(_))
    }

    /// The model, or the matching puzzle error when there is none
    pub fn into_model(self) -> PuzzleResult<Assignment> {
        match self {
            Verdict::Satisfiable(assignment) => Ok(assignment),
            Verdict::Unsatisfiable => Err(PuzzleError::Unsatisfiable),
            Verdict::Unknown => Err(PuzzleError::Unknown),
        }
    }
}

/// Verdict without the model, for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictKind {
    Satisfiable,
    Unsatisfiable,
    Unknown,
}

impl std::fmt::Display for VerdictKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            VerdictKind::Satisfiable => "sat",
            VerdictKind::Unsatisfiable => "unsat",
            VerdictKind::Unknown => "unknown",
        };
        write!(f, "{}", text)
    }
}
