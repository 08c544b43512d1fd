//! Factory for creating solver instances based on configuration

use super::cadical_solver::CadicalSolver;
use super::solver::{ConstraintSolver, SolverOptions, SolverStatistics};
use super::varisat_solver::VarisatSolver;
use super::{ConstraintSet, Verdict};
use crate::config::{SolverBackend, SolverConfig};
use anyhow::Result;

/// Unified constraint solver that can use different backends
#[derive(Debug)]
pub enum UnifiedSolver {
    Cadical(CadicalSolver),
    Varisat(VarisatSolver),
}

impl UnifiedSolver {
    /// Create a new solver instance based on the specified backend
    pub fn new(backend: SolverBackend) -> Self {
        match backend {
            SolverBackend::Cadical => UnifiedSolver::Cadical(CadicalSolver::new()),
            SolverBackend::Varisat => UnifiedSolver::Varisat(VarisatSolver::new()),
        }
    }

    /// Create and configure a solver from the solver section of the settings
    pub fn from_config(config: &SolverConfig) -> Self {
        let mut solver = Self::new(config.backend);
        solver.configure(&SolverOptions::with_timeout_seconds(config.timeout_seconds));
        solver
    }

    /// Set solver configuration options
    pub fn configure(&mut self, options: &SolverOptions) {
        match self {
            UnifiedSolver::Cadical(solver) => solver.configure(options),
            UnifiedSolver::Varisat(solver) => solver.configure(options),
        }
    }

    /// Get the backend type being used
    pub fn backend(&self) -> SolverBackend {
        match self {
            UnifiedSolver::Cadical(_) => SolverBackend::Cadical,
            UnifiedSolver::Varisat(_) => SolverBackend::Varisat,
        }
    }
}

impl ConstraintSolver for UnifiedSolver {
    fn name(&self) -> &'static str {
        match self {
            UnifiedSolver::Cadical(solver) => solver.name(),
            UnifiedSolver::Varisat(solver) => solver.name(),
        }
    }

    fn solve(&mut self, constraints: &ConstraintSet) -> Result<Verdict> {
        match self {
            UnifiedSolver::Cadical(solver) => solver.solve(constraints),
            UnifiedSolver::Varisat(solver) => solver.solve(constraints),
        }
    }

    fn last_statistics(&self) -> Option<&SolverStatistics> {
        match self {
            UnifiedSolver::Cadical(solver) => solver.last_statistics(),
            UnifiedSolver::Varisat(solver) => solver.last_statistics(),
        }
    }
}

impl Default for UnifiedSolver {
    fn default() -> Self {
        UnifiedSolver::Cadical(CadicalSolver::new())
    }
}
