//! Class definitions and eligibility.
//!
//! Classes are static configuration: each carries a vector of minimum
//! attribute thresholds. Eligibility is a pure comparison, safe to
//! evaluate on every render.

use crate::attributes::Attribute;
use crate::character::Character;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The available classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassKind {
    Barbarian,
    Wizard,
    Bard,
}

impl ClassKind {
    pub fn name(&self) -> &'static str {
        match self {
            ClassKind::Barbarian => "Barbarian",
            ClassKind::Wizard => "Wizard",
            ClassKind::Bard => "Bard",
        }
    }

    pub fn all() -> [ClassKind; 3] {
        [ClassKind::Barbarian, ClassKind::Wizard, ClassKind::Bard]
    }

    /// Minimum attribute thresholds for this class. Attributes not
    /// listed impose no constraint.
    pub fn requirements(&self) -> &'static [(Attribute, i32)] {
        match self {
            ClassKind::Barbarian => &[
                (Attribute::Strength, 14),
                (Attribute::Dexterity, 9),
                (Attribute::Constitution, 9),
                (Attribute::Intelligence, 9),
                (Attribute::Wisdom, 9),
                (Attribute::Charisma, 9),
            ],
            ClassKind::Wizard => &[
                (Attribute::Strength, 9),
                (Attribute::Dexterity, 9),
                (Attribute::Constitution, 9),
                (Attribute::Intelligence, 14),
                (Attribute::Wisdom, 9),
                (Attribute::Charisma, 9),
            ],
            ClassKind::Bard => &[
                (Attribute::Strength, 9),
                (Attribute::Dexterity, 9),
                (Attribute::Constitution, 9),
                (Attribute::Intelligence, 9),
                (Attribute::Wisdom, 9),
                (Attribute::Charisma, 14),
            ],
        }
    }

    /// True iff the character satisfies every declared threshold. An
    /// empty requirement list is vacuously satisfied.
    pub fn meets_requirements(&self, character: &Character) -> bool {
        self.requirements()
            .iter()
            .all(|&(attribute, minimum)| character.attributes.get(attribute) >= minimum)
    }
}

impl fmt::Display for ClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
