//! Solver boundary: the capability every backend provides

use super::{ConstraintSet, Verdict, VerdictKind};
use crate::config::SolverBackend;
use anyhow::Result;
use serde::Serialize;
use std::time::Duration;

/// A one-shot satisfiability checker over integer constraint sets
///
/// Implementations build fresh internal state for every call; nothing
/// carries over between solves.
pub trait ConstraintSolver {
    /// Short backend name for reporting
    fn name(&self) -> &'static str;

    /// Decide the conjunction of all constraints in `constraints`
    fn solve(&mut self, constraints: &ConstraintSet) -> Result<Verdict>;

    /// Statistics of the most recent `solve` call, if the backend keeps any
    fn last_statistics(&self) -> Option<&SolverStatistics> {
        None
    }
}

impl<S: ConstraintSolver + ?Sized> ConstraintSolver for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn solve(&mut self, constraints: &ConstraintSet) -> Result<Verdict> {
        (**self).solve(constraints)
    }

    fn last_statistics(&self) -> Option<&SolverStatistics> {
        (**self).last_statistics()
    }
}

/// Configuration options for a solver backend
#[derive(Debug, Clone, Default)]
pub struct SolverOptions {
    /// Give up and report `Unknown` after this long
    pub timeout: Option<Duration>,
}

impl SolverOptions {
    /// Options from a timeout in seconds, zero meaning no limit
    pub fn with_timeout_seconds(seconds: u64) -> Self {
        Self {
            timeout: (seconds > 0).then(|| Duration::from_secs(seconds)),
        }
    }
}

/// Statistics about one solve call
#[derive(Debug, Clone, Serialize)]
pub struct SolverStatistics {
    pub backend: SolverBackend,
    pub variables: usize,
    pub constraints: usize,
    pub sat_variables: usize,
    pub clauses: usize,
    pub solve_time: Duration,
    pub result: VerdictKind,
}

impl std::fmt::Display for SolverStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solver Statistics:")?;
        writeln!(f, "  Backend: {}", self.backend)?;
        writeln!(f, "  Integer variables: {}", self.variables)?;
        writeln!(f, "  Constraints: {}", self.constraints)?;
        writeln!(f, "  Boolean variables: {}", self.sat_variables)?;
        writeln!(f, "  Clauses: {}", self.clauses)?;
        writeln!(f, "  Solve time: {:.3}s", self.solve_time.as_secs_f64())?;
        writeln!(f, "  Result: {}", self.result)?;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_from_seconds() {
        assert_eq!(SolverOptions::with_timeout_seconds(0).timeout, None);
        assert_eq!(
            SolverOptions::with_timeout_seconds(30).timeout,
            Some(Duration::from_secs(30))
        );
    }

    #[test]
    fn test_statistics_display() {
        let stats = SolverStatistics {
            backend: SolverBackend::Cadical,
            variables: 81,
            constraints: 135,
            sat_variables: 729,
            clauses: 12000,
            solve_time: Duration::from_millis(12),
            result: VerdictKind::Satisfiable,
        };
        let text = stats.to_string();
        assert!(text.contains("Boolean variables: 729"));
        assert!(text.contains("Result: sat"));
    }
}
