//! Catalog entities - authored content, immutable at resolution time

pub mod accessory;
pub mod equipment;
pub mod expansion;
pub mod fighter_profile;
pub mod modifier;
pub mod overrides;
pub mod upgrade;
pub mod weapon_profile;

pub use accessory::WeaponAccessory;
pub use equipment::{Equipment, Rarity};
pub use expansion::Expansion;
pub use fighter_profile::{FighterProfile, FIGHTER_STAT_FIELDS};
pub use modifier::{ListModMode, ListModifier, Modifier, StatModMode, StatModifier};
pub use overrides::{
    DuplicateOverride, OverrideKey, OverridePart, OverrideRow, OverrideTable, OverrideTier,
};
pub use upgrade::{Upgrade, UpgradeMode};
pub use weapon_profile::{WeaponProfile, WEAPON_STAT_FIELDS};
