//! Character record and its mutation surface.
//!
//! All adjustments are one-step intents that either apply cleanly or
//! leave the character untouched. Rejections (budget exhausted, unknown
//! skill) are normal flow control, reported as a `false` return, never
//! as an error.

use crate::attributes::{Attribute, Attributes, ATTRIBUTE_POINT_CAP};
use crate::skills::{catalog, Skill, SkillSlot};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for characters.
///
/// Minted locally at creation (and again on load) and never persisted.
/// Mutations target this id rather than the display name, so duplicate
/// names cannot make an intent ambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub Uuid);

impl CharacterId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction of a one-step adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Increment,
    Decrement,
}

impl Direction {
    fn delta(self) -> i32 {
        match self {
            Direction::Increment => 1,
            Direction::Decrement => -1,
        }
    }
}

/// Skill points granted before the Intelligence modifier scales the budget.
const BASE_SKILL_POINTS: i32 = 10;

/// Extra skill points per point of Intelligence modifier.
const SKILL_POINTS_PER_MODIFIER: i32 = 4;

/// A buildable character: attributes plus the catalog skill list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Local-only stable key; omitted from the wire form.
    #[serde(skip)]
    pub id: CharacterId,
    pub name: String,
    pub attributes: Attributes,
    pub skills: Vec<SkillSlot>,
}

impl Character {
    /// Create a character with baseline attributes and zero-point
    /// slots for every catalog skill.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CharacterId::new(),
            name: name.into(),
            attributes: Attributes::default(),
            skills: catalog(),
        }
    }

    /// Apply a one-step attribute change under the global point cap.
    ///
    /// Returns whether the change was applied. A change whose
    /// prospective sum exceeds [`ATTRIBUTE_POINT_CAP`] is a silent
    /// no-op. Decrements have no lower floor.
    pub fn adjust_attribute(&mut self, attribute: Attribute, direction: Direction) -> bool {
        if self.attributes.total() + direction.delta() > ATTRIBUTE_POINT_CAP {
            return false;
        }
        let current = self.attributes.get(attribute);
        self.attributes.set(attribute, current + direction.delta());
        true
    }

    /// Spendable skill points, derived live from the current
    /// Intelligence modifier. Never cached; never below zero.
    pub fn total_skill_points(&self) -> i32 {
        (BASE_SKILL_POINTS
            + SKILL_POINTS_PER_MODIFIER * self.attributes.modifier(Attribute::Intelligence))
        .max(0)
    }

    /// Sum of points spent across all skills.
    pub fn used_skill_points(&self) -> i32 {
        self.skills.iter().map(|slot| slot.points).sum()
    }

    /// Budget remaining. Goes negative when Intelligence is lowered
    /// after points were spent; spending stays blocked until it
    /// recovers.
    pub fn available_skill_points(&self) -> i32 {
        self.total_skill_points() - self.used_skill_points()
    }

    /// Apply a one-step skill point change.
    ///
    /// Increments need budget remaining, decrements floor at zero, and
    /// a skill missing from this character's list is a no-op. Returns
    /// whether the change was applied.
    pub fn adjust_skill(&mut self, skill: Skill, direction: Direction) -> bool {
        let available = self.available_skill_points();
        let Some(slot) = self.skills.iter_mut().find(|slot| slot.name == skill) else {
            return false;
        };
        match direction {
            Direction::Increment => {
                if available <= 0 {
                    return false;
                }
                slot.points += 1;
                true
            }
            Direction::Decrement => {
                if slot.points == 0 {
                    return false;
                }
                slot.points -= 1;
                true
            }
        }
    }

    /// Points spent on a skill plus its governing attribute's
    /// modifier, as displayed per skill.
    pub fn skill_total(&self, skill: Skill) -> i32 {
        let points = self
            .skills
            .iter()
            .find(|slot| slot.name == skill)
            .map(|slot| slot.points)
            .unwrap_or(0);
        points + self.attributes.modifier(skill.attribute())
    }
}
