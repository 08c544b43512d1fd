//! The five-house ("who owns the fish") deduction puzzle

pub mod attributes;
pub mod clues;
pub mod puzzle;

pub use attributes::{Attribute, Category, HOUSE_COUNT};
pub use clues::{canonical_clues, Clue};
pub use puzzle::{House, ZebraEncoding, ZebraPuzzle, ZebraSolution};
