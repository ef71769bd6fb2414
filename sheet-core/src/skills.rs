//! The static skill catalog.
//!
//! Skills and their governing attributes are process-wide
//! configuration, not user data: every character carries one slot per
//! catalog entry, in catalog order.

use crate::attributes::Attribute;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The skill catalog. Serialized as the display name, matching the
/// stored wire form ("Sleight of Hand", not "SleightOfHand").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {
    Acrobatics,
    #[serde(rename = "Animal Handling")]
    AnimalHandling,
    Arcana,
    Athletics,
    Deception,
    History,
    Insight,
    Intimidation,
    Investigation,
    Medicine,
    Nature,
    Perception,
    Performance,
    Persuasion,
    Religion,
    #[serde(rename = "Sleight of Hand")]
    SleightOfHand,
    Stealth,
    Survival,
}

impl Skill {
    /// The attribute whose modifier contributes to this skill's total.
    pub fn attribute(&self) -> Attribute {
        match self {
            Skill::Athletics => Attribute::Strength,
            Skill::Acrobatics | Skill::SleightOfHand | Skill::Stealth => Attribute::Dexterity,
            Skill::Arcana
            | Skill::History
            | Skill::Investigation
            | Skill::Nature
            | Skill::Religion => Attribute::Intelligence,
            Skill::AnimalHandling
            | Skill::Insight
            | Skill::Medicine
            | Skill::Perception
            | Skill::Survival => Attribute::Wisdom,
            Skill::Deception | Skill::Intimidation | Skill::Performance | Skill::Persuasion => {
                Attribute::Charisma
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Skill::Acrobatics => "Acrobatics",
            Skill::AnimalHandling => "Animal Handling",
            Skill::Arcana => "Arcana",
            Skill::Athletics => "Athletics",
            Skill::Deception => "Deception",
            Skill::History => "History",
            Skill::Insight => "Insight",
            Skill::Intimidation => "Intimidation",
            Skill::Investigation => "Investigation",
            Skill::Medicine => "Medicine",
            Skill::Nature => "Nature",
            Skill::Perception => "Perception",
            Skill::Performance => "Performance",
            Skill::Persuasion => "Persuasion",
            Skill::Religion => "Religion",
            Skill::SleightOfHand => "Sleight of Hand",
            Skill::Stealth => "Stealth",
            Skill::Survival => "Survival",
        }
    }

    /// All skills in catalog (display) order.
    pub fn all() -> [Skill; 18] {
        [
            Skill::Acrobatics,
            Skill::AnimalHandling,
            Skill::Arcana,
            Skill::Athletics,
            Skill::Deception,
            Skill::History,
            Skill::Insight,
            Skill::Intimidation,
            Skill::Investigation,
            Skill::Medicine,
            Skill::Nature,
            Skill::Perception,
            Skill::Performance,
            Skill::Persuasion,
            Skill::Religion,
            Skill::SleightOfHand,
            Skill::Stealth,
            Skill::Survival,
        ]
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One entry in a character's skill list.
///
/// Field names follow the stored wire shape; `attribute_modifier` is
/// redundant with the catalog but round-trips through persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSlot {
    pub name: Skill,
    pub points: i32,
    #[serde(rename = "attributeModifier")]
    pub attribute_modifier: Attribute,
}

impl SkillSlot {
    pub fn new(skill: Skill) -> Self {
        Self {
            name: skill,
            points: 0,
            attribute_modifier: skill.attribute(),
        }
    }
}

/// Zero-point slots for the full catalog, as a new character gets them.
pub fn catalog() -> Vec<SkillSlot> {
    Skill::all().iter().map(|&skill| SkillSlot::new(skill)).collect()
}
