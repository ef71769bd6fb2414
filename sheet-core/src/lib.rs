//! Character build rules engine.
//!
//! This crate provides:
//! - Attribute allocation under a global 70-point budget
//! - Skill point spending derived from the Intelligence modifier
//! - Class eligibility checks against minimum-attribute thresholds
//! - An intent-driven roster holding the full character collection
//!
//! All mutation paths are total: an intent that would break a budget
//! invariant (or names an unknown target) is a silent no-op, not an
//! error. The engine is synchronous and does no I/O; persistence lives
//! in `sheet-store`.
//!
//! # Quick Start
//!
//! ```
//! use sheet_core::{Attribute, Direction, Intent, Roster};
//!
//! let mut roster = Roster::new();
//! let id = roster.create();
//!
//! roster.apply(Intent::AdjustAttribute {
//!     id,
//!     attribute: Attribute::Strength,
//!     direction: Direction::Increment,
//! });
//!
//! assert_eq!(roster.get(id).unwrap().attributes.strength, 11);
//! ```

pub mod attributes;
pub mod character;
pub mod classes;
pub mod roster;
pub mod skills;

// Primary public API
pub use attributes::{modifier, Attribute, Attributes, ATTRIBUTE_POINT_CAP};
pub use character::{Character, CharacterId, Direction};
pub use classes::ClassKind;
pub use roster::{Intent, Roster};
pub use skills::{Skill, SkillSlot};
