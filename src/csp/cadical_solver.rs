//! Constraint solving through CaDiCaL

use super::encoder::{Clause, CnfEncoding};
use super::solver::{ConstraintSolver, SolverOptions, SolverStatistics};
use super::{ConstraintSet, Verdict};
use crate::config::SolverBackend;
use anyhow::{Context, Result};
use cadical::{Solver, Timeout};
use std::time::{Duration, Instant};

/// CaDiCaL-backed constraint solver
#[derive(Debug, Default)]
pub struct CadicalSolver {
    timeout: Option<Duration>,
    last_statistics: Option<SolverStatistics>,
}

impl CadicalSolver {
    /// Create a new solver with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set solver configuration options
    pub fn configure(&mut self, options: &SolverOptions) {
        self.timeout = options.timeout;
    }

    fn add_clauses(solver: &mut Solver, clauses: &[Clause]) -> Result<()> {
        for clause in clauses {
            if clause.is_empty() {
                anyhow::bail!("Cannot add empty clause (unsatisfiable)");
            }
            solver.add_clause(clause.literals.iter().copied());
        }
        Ok(())
    }
}

impl ConstraintSolver for CadicalSolver {
    fn name(&self) -> &'static str {
        "cadical"
    }

    fn solve(&mut self, constraints: &ConstraintSet) -> Result<Verdict> {
        let start_time = Instant::now();
        let encoding = CnfEncoding::encode(constraints).context("Failed to encode constraints as CNF")?;

        log::debug!(
            "CaDiCaL: {} boolean variables, {} clauses",
            encoding.sat_variable_count(),
            encoding.clause_count()
        );

        let verdict = if encoding.is_trivially_unsatisfiable() {
            log::debug!("Constraint set refuted during encoding");
            Verdict::Unsatisfiable
        } else {
            let mut solver: Solver = Solver::new();
            if let Some(timeout) = self.timeout {
                solver.set_callbacks(Some(Timeout::new(timeout.as_secs_f32())));
            }
            Self::add_clauses(&mut solver, encoding.clauses())
                .context("Failed to add clauses to CaDiCaL")?;

            match solver.solve() {
                Some(true) => {
                    let assignment = encoding
                        .decode(|lit| solver.value(lit) == Some(true))
                        .context("Failed to read CaDiCaL model")?;
                    Verdict::Satisfiable(assignment)
                }
                Some(false) => Verdict::Unsatisfiable,
                None => {
                    log::warn!("CaDiCaL stopped without a verdict (timeout {:?})", self.timeout);
                    Verdict::Unknown
                }
            }
        };

        self.last_statistics = Some(SolverStatistics {
            backend: SolverBackend::Cadical,
            variables: constraints.variable_count(),
            constraints: constraints.len(),
            sat_variables: encoding.sat_variable_count(),
            clauses: encoding.clause_count(),
            solve_time: start_time.elapsed(),
            result: verdict.kind(),
        });

        Ok(verdict)
    }

    fn last_statistics(&self) -> Option<&SolverStatistics> {
        self.last_statistics.as_ref()
    }
}
