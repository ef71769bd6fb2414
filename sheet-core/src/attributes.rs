//! The six core attributes and their score block.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum allowed sum across all six attribute scores.
pub const ATTRIBUTE_POINT_CAP: i32 = 70;

/// Score every attribute starts at when a character is created.
pub const BASE_SCORE: i32 = 10;

/// The six core attributes. Closed set: no custom attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Attribute {
    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Strength => "Strength",
            Attribute::Dexterity => "Dexterity",
            Attribute::Constitution => "Constitution",
            Attribute::Intelligence => "Intelligence",
            Attribute::Wisdom => "Wisdom",
            Attribute::Charisma => "Charisma",
        }
    }

    pub fn all() -> [Attribute; 6] {
        [
            Attribute::Strength,
            Attribute::Dexterity,
            Attribute::Constitution,
            Attribute::Intelligence,
            Attribute::Wisdom,
            Attribute::Charisma,
        ]
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Derived bonus/penalty for a score.
///
/// Floor division so scores below 10 go correctly negative:
/// 9 -> -1, 8 -> -1, 7 -> -2.
pub fn modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// Attribute scores for one character.
///
/// Scores are plain integers with no lower floor: decrements below the
/// conventional minimum (or below zero) are allowed. The only bound is
/// the [`ATTRIBUTE_POINT_CAP`] on the sum, enforced at mutation time
/// by the character, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Attributes {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

impl Attributes {
    pub fn new(str: i32, dex: i32, con: i32, int: i32, wis: i32, cha: i32) -> Self {
        Self {
            strength: str,
            dexterity: dex,
            constitution: con,
            intelligence: int,
            wisdom: wis,
            charisma: cha,
        }
    }

    pub fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Constitution => self.constitution,
            Attribute::Intelligence => self.intelligence,
            Attribute::Wisdom => self.wisdom,
            Attribute::Charisma => self.charisma,
        }
    }

    pub fn set(&mut self, attribute: Attribute, value: i32) {
        match attribute {
            Attribute::Strength => self.strength = value,
            Attribute::Dexterity => self.dexterity = value,
            Attribute::Constitution => self.constitution = value,
            Attribute::Intelligence => self.intelligence = value,
            Attribute::Wisdom => self.wisdom = value,
            Attribute::Charisma => self.charisma = value,
        }
    }

    pub fn modifier(&self, attribute: Attribute) -> i32 {
        modifier(self.get(attribute))
    }

    /// Sum of all six scores, checked against the cap on every change.
    pub fn total(&self) -> i32 {
        Attribute::all().iter().map(|&a| self.get(a)).sum()
    }
}

impl Default for Attributes {
    fn default() -> Self {
        Self::new(
            BASE_SCORE, BASE_SCORE, BASE_SCORE, BASE_SCORE, BASE_SCORE, BASE_SCORE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_table() {
        assert_eq!(modifier(10), 0);
        assert_eq!(modifier(11), 0);
        assert_eq!(modifier(12), 1);
        assert_eq!(modifier(16), 3);
        assert_eq!(modifier(20), 5);
    }

    #[test]
    fn test_modifier_below_ten_is_negative() {
        assert_eq!(modifier(9), -1);
        assert_eq!(modifier(8), -1);
        assert_eq!(modifier(7), -2);
        assert_eq!(modifier(0), -5);
        assert_eq!(modifier(-1), -6);
    }

    #[test]
    fn test_default_scores_and_total() {
        let attributes = Attributes::default();
        for attribute in Attribute::all() {
            assert_eq!(attributes.get(attribute), BASE_SCORE);
        }
        assert_eq!(attributes.total(), 60);
    }

    #[test]
    fn test_get_set_round_trip() {
        let mut attributes = Attributes::default();
        attributes.set(Attribute::Dexterity, 14);
        assert_eq!(attributes.get(Attribute::Dexterity), 14);
        assert_eq!(attributes.modifier(Attribute::Dexterity), 2);
    }

    #[test]
    fn test_wire_keys_are_pascal_case() {
        let json = serde_json::to_value(Attributes::default()).unwrap();
        assert_eq!(json["Strength"], 10);
        assert_eq!(json["Charisma"], 10);
        assert!(json.get("strength").is_none());
    }
}
