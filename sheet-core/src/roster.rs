//! The in-memory character collection and its intent surface.
//!
//! The roster is the single owned store for all characters; callers
//! mutate it by submitting [`Intent`] values rather than reaching into
//! the collection. Intents naming an unknown target are silent no-ops.

use crate::attributes::Attribute;
use crate::character::{Character, CharacterId, Direction};
use crate::skills::Skill;
use serde::{Deserialize, Serialize};

/// A mutation request against the roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Intent {
    /// Append a new baseline character.
    AddCharacter,

    /// Remove every character.
    ClearAll,

    /// Step one attribute of one character up or down.
    AdjustAttribute {
        id: CharacterId,
        attribute: Attribute,
        direction: Direction,
    },

    /// Step one skill's points of one character up or down.
    AdjustSkill {
        id: CharacterId,
        skill: Skill,
        direction: Direction,
    },
}

/// Owned store for the character collection, ordered by creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    characters: Vec<Character>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a baseline character named by position ("Character N").
    /// Names can collide after removals; ids stay unique.
    pub fn create(&mut self) -> CharacterId {
        let character = Character::new(format!("Character {}", self.characters.len() + 1));
        let id = character.id;
        self.characters.push(character);
        id
    }

    /// Remove every character. Idempotent.
    pub fn clear(&mut self) {
        self.characters.clear();
    }

    /// Replace the whole collection, as when a load completes.
    pub fn replace(&mut self, characters: Vec<Character>) {
        self.characters = characters;
    }

    /// Apply one intent, returning whether it changed anything. Budget
    /// rejections and unknown targets return `false` with the roster
    /// untouched.
    pub fn apply(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::AddCharacter => {
                self.create();
                true
            }
            Intent::ClearAll => {
                self.clear();
                true
            }
            Intent::AdjustAttribute {
                id,
                attribute,
                direction,
            } => match self.get_mut(id) {
                Some(character) => character.adjust_attribute(attribute, direction),
                None => false,
            },
            Intent::AdjustSkill {
                id,
                skill,
                direction,
            } => match self.get_mut(id) {
                Some(character) => character.adjust_skill(skill, direction),
                None => false,
            },
        }
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    fn get_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.characters.iter_mut().find(|c| c.id == id)
    }

    /// Display-layer lookup by name. First match wins when names
    /// collide.
    pub fn find_by_name(&self, name: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_names_by_position() {
        let mut roster = Roster::new();
        roster.create();
        roster.create();
        assert_eq!(roster.characters()[0].name, "Character 1");
        assert_eq!(roster.characters()[1].name, "Character 2");
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut roster = Roster::new();
        roster.create();
        roster.clear();
        let after_once = roster.clone();
        roster.clear();
        assert_eq!(roster, after_once);
        assert!(roster.is_empty());
    }

    #[test]
    fn test_apply_targets_one_character() {
        let mut roster = Roster::new();
        let first = roster.create();
        let second = roster.create();

        assert!(roster.apply(Intent::AdjustAttribute {
            id: first,
            attribute: Attribute::Strength,
            direction: Direction::Increment,
        }));

        assert_eq!(roster.get(first).unwrap().attributes.strength, 11);
        assert_eq!(roster.get(second).unwrap().attributes.strength, 10);
    }

    #[test]
    fn test_unknown_target_is_a_no_op() {
        let mut roster = Roster::new();
        roster.create();
        let before = roster.clone();

        let applied = roster.apply(Intent::AdjustSkill {
            id: CharacterId::new(),
            skill: Skill::Stealth,
            direction: Direction::Increment,
        });

        assert!(!applied);
        assert_eq!(roster, before);
    }

    #[test]
    fn test_find_by_name_takes_first_match() {
        let mut roster = Roster::new();
        let first = roster.create();
        roster.clear();
        // Re-adding after a clear reuses the positional name.
        let reused = roster.create();
        assert_ne!(first, reused);
        assert_eq!(roster.find_by_name("Character 1").unwrap().id, reused);
    }

    #[test]
    fn test_replace_supersedes_local_state() {
        let mut roster = Roster::new();
        roster.create();
        roster.replace(vec![Character::new("Loaded")]);
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.characters()[0].name, "Loaded");
    }
}
