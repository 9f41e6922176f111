//! Stat classification registry
//!
//! Maps a stat field name to its [`StatClass`] display/direction flags. The
//! registry is built by the catalog layer (content packs may reclassify
//! fields) and passed explicitly into every composition - there is no global
//! table. Fields the registry does not know fall back to a compiled-in
//! default covering the stock weapon and fighter stat lines.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::stat_value::StatClass;

/// Caller-supplied stat field classification lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatRegistry {
    classes: HashMap<String, StatClass>,
}

impl StatRegistry {
    /// An empty registry; every lookup resolves through the default table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from explicit (field name, class) entries.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, StatClass)>) -> Self {
        Self {
            classes: entries.into_iter().collect(),
        }
    }

    /// Register or replace one field's classification.
    pub fn insert(&mut self, field: impl Into<String>, class: StatClass) {
        self.classes.insert(field.into(), class);
    }

    /// Look up a field's classification.
    ///
    /// Registry entries win; unknown fields use the compiled-in default
    /// table; fields absent from both are plain non-inverted numbers.
    pub fn class_of(&self, field: &str) -> StatClass {
        self.classes
            .get(field)
            .copied()
            .unwrap_or_else(|| default_class(field))
    }
}

/// Compiled-in fallback classification for the stock stat fields.
pub fn default_class(field: &str) -> StatClass {
    match field {
        // Weapon profile fields
        "range_short" | "range_long" => StatClass::inches(),
        "accuracy_short" | "accuracy_long" => StatClass::modifier(),
        "ammo" => StatClass::target(),

        // Fighter fields
        "movement" => StatClass::inches(),
        "weapon_skill" | "ballistic_skill" | "initiative" | "leadership" | "cool" | "willpower"
        | "intelligence" => StatClass::target(),

        // strength, toughness, wounds, attacks, armour_piercing, damage and
        // anything a content pack invents
        _ => StatClass::plain(),
    }
}
