//! Integer constraints over puzzle variables

use super::{Assignment, VarId};
use anyhow::Result;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Contiguous inclusive integer range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub min: i32,
    pub max: i32,
}

impl Domain {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i32) -> bool {
        self.min <= value && value <= self.max
    }

    /// Number of values, zero for an empty range
    pub fn size(&self) -> usize {
        if self.max < self.min {
            0
        } else {
            (self.max as i64 - self.min as i64 + 1) as usize
        }
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn intersect(&self, other: &Domain) -> Domain {
        Domain::new(self.min.max(other.min), self.max.min(other.max))
    }

    pub fn values(&self) -> impl Iterator<Item = i32> {
        self.min..=self.max
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// A logical proposition over integer variables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Constraint {
    /// `min <= var <= max`
    Within { var: VarId, min: i32, max: i32 },
    /// `var == value`
    EqualsValue { var: VarId, value: i32 },
    /// `a == b`
    Equal { a: VarId, b: VarId },
    /// `a + offset == b`
    Offset { a: VarId, b: VarId, offset: i32 },
    /// `|a - b| == 1`
    Adjacent { a: VarId, b: VarId },
    /// Pairwise distinct values
    AllDifferent(Vec<VarId>),
}

impl Constraint {
    pub fn within(var: VarId, domain: Domain) -> Self {
        Constraint::Within {
            var,
            min: domain.min,
            max: domain.max,
        }
    }

    /// Variables mentioned by this constraint
    pub fn variables(&self) -> Vec<VarId> {
        match self {
            Constraint::Within { var, .. } | Constraint::EqualsValue { var, .. } => vec![*var],
            Constraint::Equal { a, b }
            | Constraint::Offset { a, b, .. }
            | Constraint::Adjacent { a, b } => vec![*a, *b],
            Constraint::AllDifferent(vars) => vars.clone(),
        }
    }

    /// Check the constraint against a concrete assignment
    ///
    /// A constraint mentioning a variable the assignment does not cover is
    /// reported as violated.
    pub fn is_satisfied_by(&self, assignment: &Assignment) -> bool {
        let value = |var: &VarId| assignment.value(*var);

        match self {
            Constraint::Within { var, min, max } => {
                value(var).is_some_and(|v| *min <= v && v <= *max)
            }
            Constraint::EqualsValue { var, value: expected } => value(var) == Some(*expected),
            Constraint::Equal { a, b } => match (value(a), value(b)) {
                (Some(x), Some(y)) => x == y,
                _ => false,
            },
            Constraint::Offset { a, b, offset } => match (value(a), value(b)) {
                (Some(x), Some(y)) => x.checked_add(*offset) == Some(y),
                _ => false,
            },
            Constraint::Adjacent { a, b } => match (value(a), value(b)) {
                (Some(x), Some(y)) => (x as i64 - y as i64).abs() == 1,
                _ => false,
            },
            Constraint::AllDifferent(vars) => {
                let values: Option<Vec<i32>> = vars.iter().map(value).collect();
                values.is_some_and(|values| values.iter().all_unique())
            }
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Within { var, min, max } => write!(f, "{} <= {} <= {}", min, var, max),
            Constraint::EqualsValue { var, value } => write!(f, "{} == {}", var, value),
            Constraint::Equal { a, b } => write!(f, "{} == {}", a, b),
            Constraint::Offset { a, b, offset } => write!(f, "{} + {} == {}", a, offset, b),
            Constraint::Adjacent { a, b } => write!(f, "|{} - {}| == 1", a, b),
            Constraint::AllDifferent(vars) => {
                write!(f, "distinct({})", vars.iter().join(", "))
            }
        }
    }
}

/// The full conjunction handed to a solver
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConstraintSet {
    variable_count: usize,
    constraints: Vec<Constraint>,
}

impl ConstraintSet {
    /// Create an empty set over `VarId(0)..VarId(variable_count)`
    pub fn new(variable_count: usize) -> Self {
        Self {
            variable_count,
            constraints: Vec::new(),
        }
    }

    /// Add a constraint, rejecting handles outside the declared range
    pub fn add(&mut self, constraint: Constraint) -> Result<()> {
        if let Some(var) = constraint
            .variables()
            .into_iter()
            .find(|var| var.index() >= self.variable_count)
        {
            anyhow::bail!(
                "Constraint {} references undeclared variable {} ({} declared)",
                constraint,
                var,
                self.variable_count
            );
        }
        self.constraints.push(constraint);
        Ok(())
    }

    pub fn extend<I>(&mut self, constraints: I) -> Result<()>
    where
        I: IntoIterator<Item = Constraint>,
    {
        for constraint in constraints {
            self.add(constraint)?;
        }
        Ok(())
    }

    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Effective domain of every variable: the intersection of its
    /// `Within` bounds, `None` for variables that have none.
    pub fn domains(&self) -> Vec<Option<Domain>> {
        let mut domains: Vec<Option<Domain>> = vec![None; self.variable_count];

        for constraint in &self.constraints {
            if let Constraint::Within { var, min, max } = constraint {
                let bound = Domain::new(*min, *max);
                let slot = &mut domains[var.index()];
                *slot = Some(match slot {
                    Some(existing) => existing.intersect(&bound),
                    None => bound,
                });
            }
        }

        domains
    }

    /// Constraints the assignment violates
    pub fn violations<'a>(&'a self, assignment: &Assignment) -> Vec<&'a Constraint> {
        self.constraints
            .iter()
            .filter(|constraint| !constraint.is_satisfied_by(assignment))
            .collect()
    }

    /// Check whether an assignment is a model of the whole set
    pub fn is_satisfied_by(&self, assignment: &Assignment) -> bool {
        assignment.len() == self.variable_count
            && self
                .constraints
                .iter()
                .all(|constraint| constraint.is_satisfied_by(assignment))
    }

    /// Count constraints by kind
    pub fn statistics(&self) -> ConstraintStatistics {
        let mut stats = ConstraintStatistics {
            variables: self.variable_count,
            ..Default::default()
        };

        for constraint in &self.constraints {
            match constraint {
                Constraint::Within { .. } => stats.domain_bounds += 1,
                Constraint::EqualsValue { .. } => stats.value_equalities += 1,
                Constraint::Equal { .. } | Constraint::Offset { .. } => stats.equalities += 1,
                Constraint::Adjacent { .. } => stats.adjacencies += 1,
                Constraint::AllDifferent(_) => stats.distinct_groups += 1,
            }
        }

        stats
    }
}

/// Statistics about a constraint set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintStatistics {
    pub variables: usize,
    pub domain_bounds: usize,
    pub value_equalities: usize,
    pub equalities: usize,
    pub adjacencies: usize,
    pub distinct_groups: usize,
}

impl ConstraintStatistics {
    pub fn total(&self) -> usize {
        self.domain_bounds
            + self.value_equalities
            + self.equalities
            + self.adjacencies
            + self.distinct_groups
    }
}

impl fmt::Display for ConstraintStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Constraint Statistics:")?;
        writeln!(f, "  Variables: {}", self.variables)?;
        writeln!(f, "  Domain bounds: {}", self.domain_bounds)?;
        writeln!(f, "  Fixed values: {}", self.value_equalities)?;
        writeln!(f, "  Equalities: {}", self.equalities)?;
        writeln!(f, "  Adjacencies: {}", self.adjacencies)?;
        writeln!(f, "  Distinct groups: {}", self.distinct_groups)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_basics() {
        let domain = Domain::new(1, 5);
        assert_eq!(domain.size(), 5);
        assert!(domain.contains(1));
        assert!(domain.contains(5));
        assert!(!domain.contains(6));
        assert_eq!(domain.values().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);

        let empty = domain.intersect(&Domain::new(7, 9));
        assert!(empty.is_empty());
        assert_eq!(empty.values().count(), 0);
    }

    #[test]
    fn test_constraint_checking() {
        let assignment = Assignment::new(vec![2, 3, 2, 5]);

        assert!(Constraint::Within { var: VarId(0), min: 1, max: 5 }.is_satisfied_by(&assignment));
        assert!(!Constraint::Within { var: VarId(3), min: 1, max: 4 }.is_satisfied_by(&assignment));
        assert!(Constraint::EqualsValue { var: VarId(1), value: 3 }.is_satisfied_by(&assignment));
        assert!(Constraint::Equal { a: VarId(0), b: VarId(2) }.is_satisfied_by(&assignment));
        assert!(Constraint::Offset { a: VarId(0), b: VarId(1), offset: 1 }.is_satisfied_by(&assignment));
        assert!(!Constraint::Offset { a: VarId(1), b: VarId(0), offset: 1 }.is_satisfied_by(&assignment));
        assert!(Constraint::Adjacent { a: VarId(1), b: VarId(0) }.is_satisfied_by(&assignment));
        assert!(!Constraint::Adjacent { a: VarId(0), b: VarId(2) }.is_satisfied_by(&assignment));
        assert!(Constraint::AllDifferent(vec![VarId(0), VarId(1), VarId(3)]).is_satisfied_by(&assignment));
        assert!(!Constraint::AllDifferent(vec![VarId(0), VarId(2)]).is_satisfied_by(&assignment));
    }

    #[test]
    fn test_missing_value_is_violation() {
        let assignment = Assignment::new(vec![1]);
        assert!(!Constraint::Equal { a: VarId(0), b: VarId(4) }.is_satisfied_by(&assignment));
    }

    #[test]
    fn test_undeclared_variable_rejected() {
        let mut set = ConstraintSet::new(2);
        assert!(set.add(Constraint::Equal { a: VarId(0), b: VarId(1) }).is_ok());
        assert!(set.add(Constraint::EqualsValue { var: VarId(2), value: 1 }).is_err());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_domains_intersect() {
        let mut set = ConstraintSet::new(3);
        set.add(Constraint::Within { var: VarId(0), min: 1, max: 9 }).unwrap();
        set.add(Constraint::Within { var: VarId(0), min: 3, max: 12 }).unwrap();
        set.add(Constraint::Within { var: VarId(1), min: 1, max: 5 }).unwrap();

        let domains = set.domains();
        assert_eq!(domains[0], Some(Domain::new(3, 9)));
        assert_eq!(domains[1], Some(Domain::new(1, 5)));
        assert_eq!(domains[2], None);
    }

    #[test]
    fn test_set_satisfaction_and_statistics() {
        let mut set = ConstraintSet::new(2);
        set.add(Constraint::within(VarId(0), Domain::new(1, 2))).unwrap();
        set.add(Constraint::within(VarId(1), Domain::new(1, 2))).unwrap();
        set.add(Constraint::AllDifferent(vec![VarId(0), VarId(1)])).unwrap();

        assert!(set.is_satisfied_by(&Assignment::new(vec![1, 2])));
        assert!(!set.is_satisfied_by(&Assignment::new(vec![2, 2])));
        assert_eq!(set.violations(&Assignment::new(vec![2, 2])).len(), 1);
        // Partial assignments never satisfy the set
        assert!(!set.is_satisfied_by(&Assignment::new(vec![1])));

        let stats = set.statistics();
        assert_eq!(stats.variables, 2);
        assert_eq!(stats.domain_bounds, 2);
        assert_eq!(stats.distinct_groups, 1);
        assert_eq!(stats.total(), 3);
    }
}
