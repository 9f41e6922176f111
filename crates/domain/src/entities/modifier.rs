//! Modifier records attached to catalog items
//!
//! Equipment, upgrades, and accessories carry ordered modifier lists that
//! reshape a fighter's effective stat lines without touching stored catalog
//! data. The set of modifier kinds is closed: composition dispatches by
//! exhaustive match, so adding a kind is a compile-visible change.

use serde::{Deserialize, Serialize};

use crate::value_objects::ListChange;

/// How a stat modifier moves the current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatModMode {
    /// Shift toward the better outcome (direction depends on inversion)
    Improve,
    /// Shift toward the worse outcome
    Worsen,
    /// Replace the value verbatim, bypassing numeric logic
    Set,
}

/// A directional or overriding change to one stat field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatModifier {
    /// Stat field name (e.g. "strength", "ammo", "movement")
    pub stat: String,
    pub mode: StatModMode,
    /// Signed magnitude for improve/worsen; replacement text for set
    pub value: String,
}

impl StatModifier {
    pub fn improve(stat: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            stat: stat.into(),
            mode: StatModMode::Improve,
            value: value.into(),
        }
    }

    pub fn worsen(stat: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            stat: stat.into(),
            mode: StatModMode::Worsen,
            value: value.into(),
        }
    }

    pub fn set(stat: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            stat: stat.into(),
            mode: StatModMode::Set,
            value: value.into(),
        }
    }
}

/// Whether a list modifier inserts or removes a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListModMode {
    Add,
    Remove,
}

/// An add/remove change to an ordered name list (traits, rules, skills).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListModifier {
    pub name: String,
    pub mode: ListModMode,
}

impl ListModifier {
    pub fn add(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mode: ListModMode::Add,
        }
    }

    pub fn remove(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mode: ListModMode::Remove,
        }
    }

    /// View as a trait-line change.
    pub fn as_change(&self) -> ListChange<'_> {
        match self.mode {
            ListModMode::Add => ListChange::Add(&self.name),
            ListModMode::Remove => ListChange::Remove(&self.name),
        }
    }
}

/// A modifier attached to a catalog item.
///
/// Closed sum type: the weapon-side variants act on a weapon profile's
/// stat and trait lines, the fighter-side variants on the owning fighter's
/// stat line, special rules, and skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "mod", rename_all = "camelCase")]
pub enum Modifier {
    WeaponStat(StatModifier),
    FighterStat(StatModifier),
    WeaponTrait(ListModifier),
    FighterRule(ListModifier),
    FighterSkill(ListModifier),
}

impl Modifier {
    /// The weapon-stat modifier, if this is one naming `field`.
    pub fn weapon_stat_for(&self, field: &str) -> Option<&StatModifier> {
        match self {
            Self::WeaponStat(m) if m.stat == field => Some(m),
            _ => None,
        }
    }

    /// The fighter-stat modifier, if this is one naming `field`.
    pub fn fighter_stat_for(&self, field: &str) -> Option<&StatModifier> {
        match self {
            Self::FighterStat(m) if m.stat == field => Some(m),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weapon_stat_for_filters_by_field() {
        let modifier = Modifier::WeaponStat(StatModifier::improve("strength", "1"));
        assert!(modifier.weapon_stat_for("strength").is_some());
        assert!(modifier.weapon_stat_for("ammo").is_none());
        assert!(modifier.fighter_stat_for("strength").is_none());
    }

    #[test]
    fn test_list_modifier_as_change() {
        let add = ListModifier::add("Unwieldy");
        assert_eq!(add.as_change(), ListChange::Add("Unwieldy"));
        let remove = ListModifier::remove("Unwieldy");
        assert_eq!(remove.as_change(), ListChange::Remove("Unwieldy"));
    }

    #[test]
    fn test_serde_tagged_shape() {
        let modifier = Modifier::WeaponTrait(ListModifier::add("Blaze"));
        let json = serde_json::to_string(&modifier).unwrap();
        assert_eq!(
            json,
            r#"{"type":"weaponTrait","mod":{"name":"Blaze","mode":"add"}}"#
        );
        let back: Modifier = serde_json::from_str(&json).unwrap();
        assert_eq!(back, modifier);
    }
}
