//! Warbandr domain - catalog entities and value objects for the roster
//! cost/stat resolution engine.
//!
//! Everything in this crate is plain immutable data plus the pure parsing
//! and list-resolution logic that belongs with it. No I/O, no logging, no
//! global state; the engine crate composes these values into effective
//! profiles and resolved costs.

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

// Re-export entities (explicit list in entities/mod.rs)
pub use entities::{
    DuplicateOverride, Equipment, Expansion, FighterProfile, ListModMode, ListModifier, Modifier,
    OverrideKey, OverridePart, OverrideRow, OverrideTable, OverrideTier, Rarity, StatModMode,
    StatModifier, Upgrade, UpgradeMode, WeaponAccessory, WeaponProfile, FIGHTER_STAT_FIELDS,
    WEAPON_STAT_FIELDS,
};

pub use error::DomainError;

// Re-export ID types
pub use ids::{AccessoryId, EquipmentId, ExpansionId, FighterId, UpgradeId, WeaponProfileId};

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{
    default_class, Credits, ItemMatcher, ListChange, PolicyRule, PolicyTargets, StatClass,
    StatParseError, StatRegistry, StatValue, TraitLine,
};
