//! Categories and attribute values of the five-house puzzle

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of houses, and of attribute values per category
pub const HOUSE_COUNT: usize = 5;

/// A dimension along which every house differs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Color,
    Nationality,
    Drink,
    Cigar,
    Pet,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Color,
        Category::Nationality,
        Category::Drink,
        Category::Cigar,
        Category::Pet,
    ];

    /// The five values of this category
    pub fn attributes(self) -> impl Iterator<Item = Attribute> {
        Attribute::ALL
            .into_iter()
            .filter(move |attribute| attribute.category() == self)
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Color => "Color",
            Category::Nationality => "Nationality",
            Category::Drink => "Drink",
            Category::Cigar => "Cigar",
            Category::Pet => "Pet",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One attribute value; each is held by exactly one house
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    // Colors
    Blue,
    Green,
    Red,
    White,
    Yellow,
    // Nationalities
    British,
    Danish,
    German,
    Norwegian,
    Swedish,
    // Drinks
    Beer,
    Coffee,
    Milk,
    Tea,
    Water,
    // Cigars
    BlueMaster,
    Dunhill,
    PallMall,
    Prince,
    Blend,
    // Pets
    Cats,
    Birds,
    Dogs,
    Fish,
    Horses,
}

impl Attribute {
    pub const ALL: [Attribute; 25] = [
        Attribute::Blue,
        Attribute::Green,
        Attribute::Red,
        Attribute::White,
        Attribute::Yellow,
        Attribute::British,
        Attribute::Danish,
        Attribute::German,
        Attribute::Norwegian,
        Attribute::Swedish,
        Attribute::Beer,
        Attribute::Coffee,
        Attribute::Milk,
        Attribute::Tea,
        Attribute::Water,
        Attribute::BlueMaster,
        Attribute::Dunhill,
        Attribute::PallMall,
        Attribute::Prince,
        Attribute::Blend,
        Attribute::Cats,
        Attribute::Birds,
        Attribute::Dogs,
        Attribute::Fish,
        Attribute::Horses,
    ];

    pub fn category(self) -> Category {
        use Attribute::*;
        match self {
            Blue | Green | Red | White | Yellow => Category::Color,
            British | Danish | German | Norwegian | Swedish => Category::Nationality,
            Beer | Coffee | Milk | Tea | Water => Category::Drink,
            BlueMaster | Dunhill | PallMall | Prince | Blend => Category::Cigar,
            Cats | Birds | Dogs | Fish | Horses => Category::Pet,
        }
    }

    /// Configuration name, e.g. `blue_master`
    pub fn name(self) -> &'static str {
        use Attribute::*;
        match self {
            Blue => "blue",
            Green => "green",
            Red => "red",
            White => "white",
            Yellow => "yellow",
            British => "british",
            Danish => "danish",
            German => "german",
            Norwegian => "norwegian",
            Swedish => "swedish",
            Beer => "beer",
            Coffee => "coffee",
            Milk => "milk",
            Tea => "tea",
            Water => "water",
            BlueMaster => "blue_master",
            Dunhill => "dunhill",
            PallMall => "pall_mall",
            Prince => "prince",
            Blend => "blend",
            Cats => "cats",
            Birds => "birds",
            Dogs => "dogs",
            Fish => "fish",
            Horses => "horses",
        }
    }

    /// Human readable label, e.g. `Blue Master`
    pub fn label(self) -> &'static str {
        use Attribute::*;
        match self {
            Blue => "Blue",
            Green => "Green",
            Red => "Red",
            White => "White",
            Yellow => "Yellow",
            British => "British",
            Danish => "Danish",
            German => "German",
            Norwegian => "Norwegian",
            Swedish => "Swedish",
            Beer => "Beer",
            Coffee => "Coffee",
            Milk => "Milk",
            Tea => "Tea",
            Water => "Water",
            BlueMaster => "Blue Master",
            Dunhill => "Dunhill",
            PallMall => "Pall Mall",
            Prince => "Prince",
            Blend => "Blend",
            Cats => "Cats",
            Birds => "Birds",
            Dogs => "Dogs",
            Fish => "Fish",
            Horses => "Horses",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Attribute {
    type Err = String;

    /// Accepts configuration names and labels, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        Attribute::ALL
            .into_iter()
            .find(|attribute| attribute.name() == wanted)
            .ok_or_else(|| format!("unknown attribute '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_attributes_per_category() {
        for category in Category::ALL {
            assert_eq!(category.attributes().count(), HOUSE_COUNT, "{}", category);
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = Attribute::ALL.iter().map(|a| a.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Attribute::ALL.len());
    }

    #[test]
    fn test_parse_attribute() {
        assert_eq!("fish".parse::<Attribute>(), Ok(Attribute::Fish));
        assert_eq!("Blue Master".parse::<Attribute>(), Ok(Attribute::BlueMaster));
        assert_eq!("PALL-MALL".parse::<Attribute>(), Ok(Attribute::PallMall));
        assert!("zebra".parse::<Attribute>().is_err());
    }

    #[test]
    fn test_serde_names_match() {
        for attribute in Attribute::ALL {
            let yaml = serde_yaml::to_string(&attribute).unwrap();
            assert_eq!(yaml.trim(), attribute.name());
        }
    }
}
