//! Constraint solving through Varisat

use super::encoder::CnfEncoding;
use super::solver::{ConstraintSolver, SolverOptions, SolverStatistics};
use super::{ConstraintSet, Verdict};
use crate::config::SolverBackend;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::time::Instant;
use varisat::{CnfFormula, ExtendFormula, Lit, Solver};

/// Varisat-backed constraint solver
///
/// Varisat exposes no time limit hook, so a configured timeout is logged
/// and otherwise ignored; solves always run to a definite verdict.
#[derive(Debug, Default)]
pub struct VarisatSolver {
    last_statistics: Option<SolverStatistics>,
}

impl VarisatSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn configure(&mut self, options: &SolverOptions) {
        if let Some(timeout) = options.timeout {
            log::warn!("Varisat has no time limit; ignoring the {:?} timeout", timeout);
        }
    }

    fn formula(encoding: &CnfEncoding) -> CnfFormula {
        let mut formula = CnfFormula::new();
        for clause in encoding.clauses() {
            let lits: Vec<Lit> = clause
                .literals
                .iter()
                .map(|&lit| Lit::from_dimacs(lit as isize))
                .collect();
            formula.add_clause(&lits[..]);
        }
        formula
    }
}

impl ConstraintSolver for VarisatSolver {
    fn name(&self) -> &'static str {
        "varisat"
    }

    fn solve(&mut self, constraints: &ConstraintSet) -> Result<Verdict> {
        let start_time = Instant::now();
        let encoding = CnfEncoding::encode(constraints).context("Failed to encode constraints as CNF")?;

        log::debug!(
            "Varisat: {} boolean variables, {} clauses",
            encoding.sat_variable_count(),
            encoding.clause_count()
        );

        let verdict = if encoding.is_trivially_unsatisfiable() {
            Verdict::Unsatisfiable
        } else {
            let mut solver = Solver::new();
            solver.add_formula(&Self::formula(&encoding));

            match solver.solve() {
                Ok(true) => {
                    let model = solver
                        .model()
                        .context("Varisat reported sat without a model")?;
                    let true_literals: HashSet<isize> = model
                        .iter()
                        .filter(|lit| lit.is_positive())
                        .map(|lit| lit.to_dimacs())
                        .collect();
                    let assignment = encoding
                        .decode(|lit| true_literals.contains(&(lit as isize)))
                        .context("Failed to read Varisat model")?;
                    Verdict::Satisfiable(assignment)
                }
                Ok(false) => Verdict::Unsatisfiable,
                Err(e) => return Err(anyhow::anyhow!("Varisat failed: {}", e)),
            }
        };

        self.last_statistics = Some(SolverStatistics {
            backend: SolverBackend::Varisat,
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
