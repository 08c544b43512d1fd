//! Finite-domain integer constraints and the solvers that decide them

pub mod assignment;
pub mod cadical_solver;
pub mod constraints;
pub mod encoder;
pub mod solver;
pub mod solver_factory;
pub mod variables;
pub mod varisat_solver;

pub use assignment::{Assignment, Verdict, VerdictKind};
pub use cadical_solver::CadicalSolver;
pub use constraints::{Constraint, ConstraintSet, ConstraintStatistics, Domain};
pub use encoder::{Clause, CnfEncoding};
pub use solver::{ConstraintSolver, SolverOptions, SolverStatistics};
pub use solver_factory::UnifiedSolver;
pub use variables::{VarId, VariableManager};
pub use varisat_solver::VarisatSolver;
