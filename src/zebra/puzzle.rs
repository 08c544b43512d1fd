//! Five-house puzzle encoding and decoding

use super::attributes::{Attribute, Category, HOUSE_COUNT};
use super::clues::{canonical_clues, Clue};
use crate::csp::{Assignment, Constraint, ConstraintSet, ConstraintSolver, Domain, VariableManager};
use crate::error::{PuzzleError, PuzzleResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Valid house numbers
pub const HOUSES: Domain = Domain {
    min: 1,
    max: HOUSE_COUNT as i32,
};

/// A five-house puzzle described by its clues
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZebraPuzzle {
    clues: Vec<Clue>,
}

/// Variables and constraints of an encoded puzzle
#[derive(Debug, Clone)]
pub struct ZebraEncoding {
    pub variables: VariableManager<Attribute>,
    pub constraints: ConstraintSet,
}

impl ZebraPuzzle {
    /// Create a puzzle, rejecting malformed clues
    pub fn new(clues: Vec<Clue>) -> PuzzleResult<Self> {
        for clue in &clues {
            clue.validate()?;
        }
        Ok(Self { clues })
    }

    /// The classic puzzle with its fifteen facts
    pub fn canonical() -> Self {
        Self {
            clues: canonical_clues(),
        }
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    /// Build one house-number variable per attribute, bounded to 1..=5,
    /// distinct within each category, and constrained by every clue.
    pub fn encode(&self) -> PuzzleResult<ZebraEncoding> {
        let mut variables = VariableManager::new();
        let mut groups = Vec::with_capacity(Category::ALL.len());
        for category in Category::ALL {
            groups.push(variables.declare_all(category.attributes())?);
        }

        let mut constraints = ConstraintSet::new(variables.variable_count());

        for (_, var) in variables.iter() {
            constraints.add(Constraint::within(var, HOUSES))?;
        }

        for group in groups {
            constraints.add(Constraint::AllDifferent(group))?;
        }

        for clue in &self.clues {
            let constraint = match clue {
                Clue::Same { a, b } => Constraint::Equal {
                    a: variables.get(a)?,
                    b: variables.get(b)?,
                },
                Clue::InHouse { attribute, house } => Constraint::EqualsValue {
                    var: variables.get(attribute)?,
                    value: i32::from(*house),
                },
                Clue::LeftOf { left, right } => Constraint::Offset {
                    a: variables.get(left)?,
                    b: variables.get(right)?,
                    offset: 1,
                },
                Clue::NextTo { a, b } => Constraint::Adjacent {
                    a: variables.get(a)?,
                    b: variables.get(b)?,
                },
            };
            constraints.add(constraint)?;
        }

        log::debug!(
            "Encoded five-house puzzle: {} variables, {} constraints",
            variables.variable_count(),
            constraints.len()
        );

        Ok(ZebraEncoding {
            variables,
            constraints,
        })
    }

    /// Encode, solve once, and decode
    pub fn solve<S>(&self, solver: &mut S) -> PuzzleResult<ZebraSolution>
    where
        S: ConstraintSolver + ?Sized,
    {
        let encoding = self.encode()?;
        let model = solver.solve(&encoding.constraints)?.into_model()?;
        ZebraSolution::decode(&encoding, &model)
    }
}

impl Default for ZebraPuzzle {
    fn default() -> Self {
        Self::canonical()
    }
}

/// House number of every attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZebraSolution {
    houses: BTreeMap<Attribute, u8>,
}

/// Everything that lives in one house
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct House {
    pub number: u8,
    pub attributes: BTreeMap<Category, Attribute>,
}

impl House {
    pub fn attribute(&self, category: Category) -> Option<Attribute> {
        self.attributes.get(&category).copied()
    }
}

impl ZebraSolution {
    /// Build a solution from explicit house numbers
    pub fn from_houses(houses: BTreeMap<Attribute, u8>) -> Self {
        Self { houses }
    }

    /// Read a model back into house numbers
    ///
    /// The model is re-checked against the constraints; a model that
    /// violates them means the encoding or the backend is broken.
    pub fn decode(encoding: &ZebraEncoding, model: &Assignment) -> PuzzleResult<Self> {
        let violations = encoding.constraints.violations(model);
        if let Some(first) = violations.first() {
            return Err(PuzzleError::DecodeInconsistency(format!(
                "model violates {} constraint(s), first: {}",
                violations.len(),
                first
            )));
        }

        let mut houses = BTreeMap::new();
        for (attribute, var) in encoding.variables.iter() {
            let value = model.value(var).ok_or_else(|| {
                PuzzleError::DecodeInconsistency(format!("no value for {}", attribute))
            })?;
            let house = u8::try_from(value)
                .ok()
                .filter(|house| HOUSES.contains(i32::from(*house)))
                .ok_or_else(|| {
                    PuzzleError::DecodeInconsistency(format!(
                        "{} placed in house {}",
                        attribute, value
                    ))
                })?;
            houses.insert(*attribute, house);
        }

        Ok(Self { houses })
    }

    pub fn house_of(&self, attribute: Attribute) -> Option<u8> {
        self.houses.get(&attribute).copied()
    }

    /// Nationality living in the same house as `attribute`
    ///
    /// Exactly one nationality must match; anything else is a decode
    /// inconsistency.
    pub fn owner_of(&self, attribute: Attribute) -> PuzzleResult<Attribute> {
        let house = self.house_of(attribute).ok_or_else(|| {
            PuzzleError::DecodeInconsistency(format!("{} has no house", attribute))
        })?;

        let owners: Vec<Attribute> = Category::Nationality
            .attributes()
            .filter(|nationality| self.house_of(*nationality) == Some(house))
            .collect();

        match owners.as_slice() {
            [owner] => Ok(*owner),
            [] => Err(PuzzleError::DecodeInconsistency(format!(
                "nobody lives in house {} with the {}",
                house, attribute
            ))),
            _ => Err(PuzzleError::DecodeInconsistency(format!(
                "several nationalities share house {}: {:?}",
                house, owners
            ))),
        }
    }

    /// The full table, house by house from the left
    pub fn houses(&self) -> PuzzleResult<Vec<House>> {
        let mut table = Vec::with_capacity(HOUSE_COUNT);

        for number in 1..=HOUSE_COUNT as u8 {
            let mut attributes = BTreeMap::new();
            for category in Category::ALL {
                let present: Vec<Attribute> = category
                    .attributes()
                    .filter(|attribute| self.house_of(*attribute) == Some(number))
                    .collect();
                match present.as_slice() {
                    [attribute] => {
                        attributes.insert(category, *attribute);
                    }
                    _ => {
                        return Err(PuzzleError::DecodeInconsistency(format!(
                            "house {} has {} {} value(s)",
                            number,
                            present.len(),
                            category
                        )))
                    }
                }
            }
            table.push(House { number, attributes });
        }

        Ok(table)
    }
}
