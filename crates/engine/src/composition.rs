//! Effective profile composition
//!
//! Composes a stored profile with its ordered modifier list into an
//! effective view: per-field stat strings with changed flags, resolved
//! trait/rule/skill lines, cost and rarity passed through untouched. The
//! stored profile is never mutated - composition returns a new value every
//! time, and two compositions are equal exactly when their outputs are
//! (structural equality, not identity of the underlying row).
//!
//! Modifier order matters: modifiers come in, in declaration order, from
//! the equipment itself, then its upgrades, then its accessories, and a
//! later modifier sees the output of an earlier one targeting the same
//! field.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use warbandr_domain::{
    Credits, FighterId, FighterProfile, Modifier, Rarity, StatRegistry, TraitLine, WeaponProfile,
    WeaponProfileId,
};

use crate::modifier_engine::{self, ModifierError};

/// Composition failed on one stat field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed composing stat '{field}': {source}")]
pub struct ComposeError {
    /// The stat field being composed when the failure happened
    pub field: String,
    #[source]
    pub source: ModifierError,
}

/// One composed stat field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatField {
    pub name: String,
    pub value: String,
    /// True when a modifier changed this field from its authored value
    pub changed: bool,
}

/// Effective view of one weapon profile under a modifier list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveWeaponProfile {
    pub profile: WeaponProfileId,
    pub name: String,
    /// Passed through unchanged; modifiers never alter cost
    pub cost: Credits,
    /// Passed through unchanged from the owning equipment
    pub rarity: Rarity,
    pub statline: Vec<StatField>,
    pub traits: TraitLine,
}

/// Effective view of a fighter's stat card under a modifier list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveFighter {
    pub fighter: FighterId,
    pub name: String,
    pub statline: Vec<StatField>,
    pub rules: TraitLine,
    pub skills: TraitLine,
}

/// Compose a weapon profile with its ordered modifiers.
///
/// Only `WeaponStat` modifiers naming a field touch that field, in
/// declaration order; `WeaponTrait` modifiers build the trait line;
/// fighter-side modifiers are ignored here (they belong to
/// [`compose_fighter`]).
pub fn compose_weapon_profile(
    profile: &WeaponProfile,
    rarity: Rarity,
    modifiers: &[Modifier],
    registry: &StatRegistry,
) -> Result<EffectiveWeaponProfile, ComposeError> {
    let mut statline = Vec::with_capacity(8);
    for (field, base) in profile.statline() {
        let stat_mods = modifiers.iter().filter_map(|m| m.weapon_stat_for(field));
        statline.push(compose_field(field, base, stat_mods, registry)?);
    }

    let traits = TraitLine::resolve(
        &profile.traits,
        modifiers.iter().filter_map(|m| match m {
            Modifier::WeaponTrait(list_mod) => Some(list_mod.as_change()),
            _ => None,
        }),
    );

    Ok(EffectiveWeaponProfile {
        profile: profile.id,
        name: profile.display_name().to_string(),
        cost: profile.cost,
        rarity,
        statline,
        traits,
    })
}

/// Compose a fighter's stat card with its ordered modifiers.
pub fn compose_fighter(
    fighter: &FighterProfile,
    modifiers: &[Modifier],
    registry: &StatRegistry,
) -> Result<EffectiveFighter, ComposeError> {
    let mut statline = Vec::with_capacity(12);
    for (field, base) in fighter.statline() {
        let stat_mods = modifiers.iter().filter_map(|m| m.fighter_stat_for(field));
        statline.push(compose_field(field, base, stat_mods, registry)?);
    }

    let rules = TraitLine::resolve(
        &fighter.rules,
        modifiers.iter().filter_map(|m| match m {
            Modifier::FighterRule(list_mod) => Some(list_mod.as_change()),
            _ => None,
        }),
    );

    let skills = TraitLine::resolve(
        &fighter.skills,
        modifiers.iter().filter_map(|m| match m {
            Modifier::FighterSkill(list_mod) => Some(list_mod.as_change()),
            _ => None,
        }),
    );

    Ok(EffectiveFighter {
        fighter: fighter.id,
        name: fighter.name.clone(),
        statline,
        rules,
        skills,
    })
}

fn compose_field<'a>(
    field: &str,
    base: &str,
    stat_mods: impl Iterator<Item = &'a warbandr_domain::StatModifier>,
    registry: &StatRegistry,
) -> Result<StatField, ComposeError> {
    let class = registry.class_of(field);
    let mut value = base.to_string();

    for stat_mod in stat_mods {
        value = modifier_engine::apply(&value, stat_mod, class).map_err(|source| ComposeError {
            field: field.to_string(),
            source,
        })?;
    }

    Ok(StatField {
        name: field.to_string(),
        changed: value != base,
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use warbandr_domain::{EquipmentId, ListModifier, StatModifier};

    fn profile() -> WeaponProfile {
        let mut profile = WeaponProfile::new(EquipmentId::new());
        profile.name = "rapid fire".to_string();
        profile.cost = Credits(15);
        profile.range_short = "8\"".to_string();
        profile.range_long = "24\"".to_string();
        profile.accuracy_short = "+1".to_string();
        profile.strength = "S+1".to_string();
        profile.damage = "1".to_string();
        profile.ammo = "4+".to_string();
        profile.traits = vec!["Knockback".to_string(), "Rapid Fire".to_string()];
        profile
    }

    #[test]
    fn test_unmodified_composition_matches_base() {
        let profile = profile();
        let view =
            compose_weapon_profile(&profile, Rarity::Common, &[], &StatRegistry::new()).unwrap();

        assert_eq!(view.name, "rapid fire");
        assert_eq!(view.cost, Credits(15));
        assert!(view.statline.iter().all(|f| !f.changed));
        let range = &view.statline[0];
        assert_eq!((range.name.as_str(), range.value.as_str()), ("range_short", "8\""));
        assert!(view.traits.is_unchanged_from(&profile.traits));
    }

    #[test]
    fn test_stat_mod_sets_changed_flag_only_on_target_field() {
        let profile = profile();
        let mods = vec![Modifier::WeaponStat(StatModifier::improve("ammo", "1"))];
        let view =
            compose_weapon_profile(&profile, Rarity::Common, &mods, &StatRegistry::new()).unwrap();

        let ammo = view
            .statline
            .iter()
            .find(|f| f.name == "ammo")
            .unwrap();
        assert_eq!(ammo.value, "3+");
        assert!(ammo.changed);
        assert_eq!(view.statline.iter().filter(|f| f.changed).count(), 1);
    }

    #[test]
    fn test_modifiers_apply_in_declaration_order() {
        let profile = profile();
        // Set then improve: the set value is what gets improved.
        let mods = vec![
            Modifier::WeaponStat(StatModifier::set("damage", "3")),
            Modifier::WeaponStat(StatModifier::improve("damage", "1")),
        ];
        let view =
            compose_weapon_profile(&profile, Rarity::Common, &mods, &StatRegistry::new()).unwrap();
        let damage = view.statline.iter().find(|f| f.name == "damage").unwrap();
        assert_eq!(damage.value, "4");
    }

    #[test]
    fn test_trait_mods_build_trait_line() {
        let profile = profile();
        let mods = vec![
            Modifier::WeaponTrait(ListModifier::add("Unwieldy")),
            Modifier::WeaponTrait(ListModifier::remove("Knockback")),
        ];
        let view =
            compose_weapon_profile(&profile, Rarity::Common, &mods, &StatRegistry::new()).unwrap();

        assert_eq!(view.traits.retained, vec!["Rapid Fire".to_string()]);
        assert_eq!(view.traits.added, vec!["Unwieldy".to_string()]);
    }

    #[test]
    fn test_fighter_side_modifiers_ignored_on_weapons() {
        let profile = profile();
        let mods = vec![Modifier::FighterStat(StatModifier::improve("strength", "2"))];
        let view =
            compose_weapon_profile(&profile, Rarity::Common, &mods, &StatRegistry::new()).unwrap();
        let strength = view.statline.iter().find(|f| f.name == "strength").unwrap();
        assert_eq!(strength.value, "S+1");
        assert!(!strength.changed);
    }

    #[test]
    fn test_malformed_stat_reports_field() {
        let mut profile = profile();
        profile.damage = "junk".to_string();
        let mods = vec![Modifier::WeaponStat(StatModifier::improve("damage", "1"))];
        let err = compose_weapon_profile(&profile, Rarity::Common, &mods, &StatRegistry::new())
            .unwrap_err();
        assert_eq!(err.field, "damage");
    }

    #[test]
    fn test_composition_equality_is_structural() {
        let profile = profile();
        let mods = vec![Modifier::WeaponStat(StatModifier::improve("ammo", "1"))];
        let registry = StatRegistry::new();

        let plain = compose_weapon_profile(&profile, Rarity::Common, &[], &registry).unwrap();
        let modified = compose_weapon_profile(&profile, Rarity::Common, &mods, &registry).unwrap();
        let modified_again =
            compose_weapon_profile(&profile, Rarity::Common, &mods, &registry).unwrap();

        // Same stored profile, different modifier sets: NOT equal.
        assert_ne!(plain, modified);
        assert_eq!(modified, modified_again);
    }

    #[test]
    fn test_compose_fighter_stats_rules_and_skills() {
        let mut fighter = FighterProfile::new("Ganger");
        fighter.movement = "5\"".to_string();
        fighter.weapon_skill = "4+".to_string();
        fighter.leadership = "7+".to_string();
        fighter.rules = vec!["Gang Fighter".to_string()];
        fighter.skills = vec!["Dodge".to_string()];

        let mods = vec![
            Modifier::FighterStat(StatModifier::improve("weapon_skill", "1")),
            Modifier::FighterStat(StatModifier::improve("movement", "1")),
            Modifier::FighterSkill(ListModifier::add("Catfall")),
            Modifier::FighterRule(ListModifier::remove("Gang Fighter")),
        ];
        let view = compose_fighter(&fighter, &mods, &StatRegistry::new()).unwrap();

        let ws = view
            .statline
            .iter()
            .find(|f| f.name == "weapon_skill")
            .unwrap();
        assert_eq!(ws.value, "3+");
        assert!(ws.changed);

        let movement = view.statline.iter().find(|f| f.name == "movement").unwrap();
        assert_eq!(movement.value, "6\"");

        assert!(view.rules.names().is_empty());
        assert_eq!(view.skills.retained, vec!["Dodge".to_string()]);
        assert_eq!(view.skills.added, vec!["Catfall".to_string()]);
    }
}
