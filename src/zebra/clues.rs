//! Clue facts of the five-house puzzle

use super::attributes::{Attribute, HOUSE_COUNT};
use crate::error::{PuzzleError, PuzzleResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A known fact relating attributes to house positions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Clue {
    /// Both attributes belong to the same house
    Same { a: Attribute, b: Attribute },
    /// The attribute sits in a fixed house (1 is leftmost)
    InHouse { attribute: Attribute, house: u8 },
    /// `left` is directly to the left of `right`
    LeftOf { left: Attribute, right: Attribute },
    /// The two attributes are in neighbouring houses
    NextTo { a: Attribute, b: Attribute },
}

impl Clue {
    /// Reject clues that cannot be expressed over houses 1..=5
    pub fn validate(&self) -> PuzzleResult<()> {
        match self {
            Clue::InHouse { attribute, house } => {
                if *house == 0 || *house as usize > HOUSE_COUNT {
                    return Err(PuzzleError::InvalidClue(format!(
                        "{} placed in house {}, houses are numbered 1 to {}",
                        attribute, house, HOUSE_COUNT
                    )));
                }
            }
            Clue::LeftOf { left: a, right: b } | Clue::NextTo { a, b } if a == b => {
                return Err(PuzzleError::InvalidClue(format!(
                    "{} cannot be beside itself",
                    a
                )));
            }
            _ => {}
        }
        Ok(())
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clue::Same { a, b } => write!(f, "{} and {} share a house", a, b),
            Clue::InHouse { attribute, house } => write!(f, "{} is in house {}", attribute, house),
            Clue::LeftOf { left, right } => write!(f, "{} is directly left of {}", left, right),
            Clue::NextTo { a, b } => write!(f, "{} lives next to {}", a, b),
        }
    }
}

/// The fifteen facts of the classic puzzle
pub fn canonical_clues() -> Vec<Clue> {
    use Attribute::*;

    vec![
        Clue::Same { a: British, b: Red },
        Clue::Same { a: Swedish, b: Dogs },
        Clue::Same { a: Danish, b: Tea },
        Clue::LeftOf { left: Green, right: White },
        Clue::Same { a: Green, b: Coffee },
        Clue::Same { a: PallMall, b: Birds },
        Clue::Same { a: Yellow, b: Dunhill },
        Clue::InHouse { attribute: Milk, house: 3 },
        Clue::InHouse { attribute: Norwegian, house: 1 },
        Clue::NextTo { a: Blend, b: Cats },
        Clue::NextTo { a: Horses, b: Dunhill },
        Clue::Same { a: BlueMaster, b: Beer },
        Clue::Same { a: German, b: Prince },
        Clue::NextTo { a: Norwegian, b: Blue },
        Clue::NextTo { a: Blend, b: Water },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_clue_count() {
        let clues = canonical_clues();
        assert_eq!(clues.len(), 15);
        assert!(clues.iter().all(|clue| clue.validate().is_ok()));
    }

    #[test]
    fn test_house_out_of_range() {
        let clue = Clue::InHouse { attribute: Attribute::Milk, house: 6 };
        assert!(matches!(clue.validate(), Err(PuzzleError::InvalidClue(_))));

        let clue = Clue::InHouse { attribute: Attribute::Milk, house: 0 };
        assert!(clue.validate().is_err());
    }

    #[test]
    fn test_self_adjacency_rejected() {
        let clue = Clue::NextTo { a: Attribute::Cats, b: Attribute::Cats };
        assert!(clue.validate().unwrap_err().is_malformed_input());
    }

    #[test]
    fn test_yaml_form() {
        let clue = Clue::LeftOf { left: Attribute::Green, right: Attribute::White };
        let yaml = serde_yaml::to_string(&clue).unwrap();
        assert!(yaml.contains("kind: left_of"));
        assert!(yaml.contains("left: green"));

        let parsed: Clue = serde_yaml::from_str("kind: in_house\nattribute: norwegian\nhouse: 1\n").unwrap();
        assert_eq!(parsed, Clue::InHouse { attribute: Attribute::Norwegian, house: 1 });
    }

    #[test]
    fn test_display() {
        let clue = Clue::Same { a: Attribute::BlueMaster, b: Attribute::Beer };
        assert_eq!(clue.to_string(), "Blue Master and Beer share a house");
    }
}
