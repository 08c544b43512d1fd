//! Direct (one-hot) CNF encoding of integer constraint sets

use super::{Assignment, Constraint, ConstraintSet, Domain, VarId};
use anyhow::Result;
use itertools::Itertools;

/// Represents a SAT clause (disjunction of literals)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub literals: Vec<i32>, // Positive for variable, negative for negation
}

impl Clause {
    /// Create a new clause from literals
    pub fn new(literals: Vec<i32>) -> Self {
        Self { literals }
    }

    /// Create a unit clause (single literal)
    pub fn unit(literal: i32) -> Self {
        Self { literals: vec![literal] }
    }

    /// Create a binary clause (two literals)
    pub fn binary(lit1: i32, lit2: i32) -> Self {
        Self { literals: vec![lit1, lit2] }
    }

    /// The clause that can never be satisfied
    pub fn empty() -> Self {
        Self { literals: Vec::new() }
    }

    /// Check if clause is empty (unsatisfiable)
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }
}

/// CNF form of a constraint set together with the literal layout needed
/// to read a boolean model back into integer values.
///
/// Variable `v` with domain `[min, max]` owns the boolean variables
/// `offsets[v] + 1 ..= offsets[v] + size`, one per value in ascending order.
#[derive(Debug, Clone)]
pub struct CnfEncoding {
    domains: Vec<Domain>,
    offsets: Vec<i32>,
    clauses: Vec<Clause>,
    sat_variable_count: usize,
}

impl CnfEncoding {
    /// Translate a constraint set into clauses
    pub fn encode(set: &ConstraintSet) -> Result<Self> {
        let mut domains = Vec::with_capacity(set.variable_count());
        for (index, domain) in set.domains().into_iter().enumerate() {
            match domain {
                Some(domain) => domains.push(domain),
                None => anyhow::bail!(
                    "Variable {} has no domain bound; finite-domain solving needs one",
                    VarId(index)
                ),
            }
        }

        let mut offsets = Vec::with_capacity(domains.len());
        let mut next: i64 = 0;
        for domain in &domains {
            offsets.push(i32::try_from(next)?);
            next += domain.size() as i64;
        }
        let sat_variable_count = usize::try_from(next)?;
        i32::try_from(next)
            .map_err(|_| anyhow::anyhow!("Encoding needs {} boolean variables, too many", next))?;

        let mut encoding = Self {
            domains,
            offsets,
            clauses: Vec::new(),
            sat_variable_count,
        };

        for index in 0..encoding.domains.len() {
            encoding.encode_exactly_one(VarId(index));
        }

        for constraint in set.constraints() {
            encoding.encode_constraint(constraint);
        }

        Ok(encoding)
    }

    /// Literal for `var == value`, `None` if the value is outside its domain
    pub fn literal(&self, var: VarId, value: i32) -> Option<i32> {
        let domain = self.domains.get(var.index())?;
        if !domain.contains(value) {
            return None;
        }
        Some(self.offsets[var.index()] + (value - domain.min) + 1)
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// Number of boolean variables used
    pub fn sat_variable_count(&self) -> usize {
        self.sat_variable_count
    }

    /// An empty clause means the set was refuted during translation
    pub fn is_trivially_unsatisfiable(&self) -> bool {
        self.clauses.iter().any(Clause::is_empty)
    }

    /// Read a boolean model back into integer values
    ///
    /// `is_true` reports the truth of a positive literal. Exactly one value
    /// literal per variable must be true.
    pub fn decode<F>(&self, is_true: F) -> Result<Assignment>
    where
        F: Fn(i32) -> bool,
    {
        let mut values = Vec::with_capacity(self.domains.len());

        for (index, domain) in self.domains.iter().enumerate() {
            let var = VarId(index);
            let chosen: Vec<i32> = domain
                .values()
                .filter(|&value| self.literal(var, value).is_some_and(&is_true))
                .collect();

            match chosen.as_slice() {
                [value] => values.push(*value),
                [] => anyhow::bail!("Model assigns no value to {}", var),
                _ => anyhow::bail!("Model assigns several values to {}: {:?}", var, chosen),
            }
        }

        Ok(Assignment::new(values))
    }

    fn domain(&self, var: VarId) -> Domain {
        self.domains[var.index()]
    }

    fn encode_exactly_one(&mut self, var: VarId) {
        let literals: Vec<i32> = self
            .domain(var)
            .values()
            .filter_map(|value| self.literal(var, value))
            .collect();

        // At least one (empty for an empty domain)
        self.clauses.push(Clause::new(literals.clone()));

        // At most one
        for (a, b) in literals.iter().tuple_combinations() {
            self.clauses.push(Clause::binary(-a, -b));
        }
    }

    fn encode_constraint(&mut self, constraint: &Constraint) {
        match constraint {
            // Already folded into the variable's domain
            Constraint::Within { .. } => {}
            Constraint::EqualsValue { var, value } => {
                let clause = match self.literal(*var, *value) {
                    Some(lit) => Clause::unit(lit),
                    None => Clause::empty(),
                };
                self.clauses.push(clause);
            }
            Constraint::Equal { a, b } => {
                self.encode_shift(*a, *b, 0);
                self.encode_shift(*b, *a, 0);
            }
            Constraint::Offset { a, b, offset } => {
                self.encode_shift(*a, *b, *offset);
                if let Some(back) = offset.checked_neg() {
                    self.encode_shift(*b, *a, back);
                }
            }
            Constraint::Adjacent { a, b } => {
                self.encode_neighbour(*a, *b);
                self.encode_neighbour(*b, *a);
            }
            Constraint::AllDifferent(vars) => {
                for (x, y) in vars.iter().tuple_combinations() {
                    self.encode_different(*x, *y);
                }
            }
        }
    }

    /// `from == d` implies `to == d + offset`
    fn encode_shift(&mut self, from: VarId, to: VarId, offset: i32) {
        for value in self.domain(from).values() {
            let Some(from_lit) = self.literal(from, value) else {
                continue;
            };
            let target = value
                .checked_add(offset)
                .and_then(|shifted| self.literal(to, shifted));

            let clause = match target {
                Some(to_lit) => Clause::binary(-from_lit, to_lit),
                None => Clause::unit(-from_lit),
            };
            self.clauses.push(clause);
        }
    }

    /// `from == d` implies `to == d - 1` or `to == d + 1`
    fn encode_neighbour(&mut self, from: VarId, to: VarId) {
        for value in self.domain(from).values() {
            let Some(from_lit) = self.literal(from, value) else {
                continue;
            };
            let mut literals = vec![-from_lit];
            literals.extend(
                [value.checked_sub(1), value.checked_add(1)]
                    .into_iter()
                    .flatten()
                    .filter_map(|neighbour| self.literal(to, neighbour)),
            );
            self.clauses.push(Clause::new(literals));
        }
    }

    fn encode_different(&mut self, x: VarId, y: VarId) {
        if x == y {
            // A variable is never distinct from itself
            self.clauses.push(Clause::empty());
            return;
        }

        let shared = self.domain(x).intersect(&self.domain(y));
        for value in shared.values() {
            if let (Some(lx), Some(ly)) = (self.literal(x, value), self.literal(y, value)) {
                self.clauses.push(Clause::binary(-lx, -ly));
            }
        }
    }
}
