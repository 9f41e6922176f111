//! Cost override rows and the override lookup table
//!
//! Overrides re-price a catalog item for one fighter. They come in two
//! tiers: equipment-list rows (always applicable) and expansion rows
//! (applicable only when the expansion's rule inputs match the resolution
//! context). Authored data allows at most one row per (fighter, key, tier);
//! that invariant is enforced here when the table is built, so the resolver
//! never carries a disambiguation branch.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::{AccessoryId, EquipmentId, ExpansionId, FighterId, UpgradeId, WeaponProfileId};
use crate::value_objects::Credits;

/// Narrows an override to part of an equipment entry.
///
/// A row without a part re-prices the equipment itself; rows with a part
/// re-price one profile, upgrade, or accessory and never participate in
/// equipment-level lookups (and vice versa).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "camelCase")]
pub enum OverridePart {
    Profile(WeaponProfileId),
    Upgrade(UpgradeId),
    Accessory(AccessoryId),
}

/// The item a row re-prices: equipment plus optional part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideKey {
    pub equipment: EquipmentId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part: Option<OverridePart>,
}

impl OverrideKey {
    /// Base-tier key for the equipment itself.
    pub fn equipment(equipment: EquipmentId) -> Self {
        Self {
            equipment,
            part: None,
        }
    }

    pub fn profile(equipment: EquipmentId, profile: WeaponProfileId) -> Self {
        Self {
            equipment,
            part: Some(OverridePart::Profile(profile)),
        }
    }

    pub fn upgrade(equipment: EquipmentId, upgrade: UpgradeId) -> Self {
        Self {
            equipment,
            part: Some(OverridePart::Upgrade(upgrade)),
        }
    }

    pub fn accessory(equipment: EquipmentId, accessory: AccessoryId) -> Self {
        Self {
            equipment,
            part: Some(OverridePart::Accessory(accessory)),
        }
    }
}

/// Which tier a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "tier", content = "expansion", rename_all = "camelCase")]
pub enum OverrideTier {
    /// Fighter's equipment list; always applicable
    EquipmentList,
    /// Applicable only while the expansion's rule inputs match
    Expansion(ExpansionId),
}

/// One flat authored override row, as supplied by the catalog layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideRow {
    pub fighter: FighterId,
    #[serde(flatten)]
    pub key: OverrideKey,
    #[serde(flatten)]
    pub tier: OverrideTier,
    pub cost: Credits,
}

/// A second row arrived for a (fighter, key, tier) slot.
///
/// This is a data-integrity defect in authored content, not a user error:
/// strict construction rejects it, lossy construction keeps the first row
/// and reports the rest for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Duplicate override row for fighter {fighter} on equipment {equipment}")]
pub struct DuplicateOverride {
    pub fighter: FighterId,
    pub equipment: EquipmentId,
    /// The row that was rejected
    pub rejected: OverrideRow,
}

/// Uniqueness-checked override lookup table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverrideTable {
    equipment_list: HashMap<(FighterId, OverrideKey), Credits>,
    expansion: HashMap<(FighterId, OverrideKey, ExpansionId), Credits>,
}

impl OverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from flat rows, rejecting the first duplicate (fighter, key,
    /// tier) slot.
    pub fn from_rows(rows: impl IntoIterator<Item = OverrideRow>) -> Result<Self, DuplicateOverride> {
        let (table, duplicates) = Self::from_rows_lossy(rows);
        match duplicates.into_iter().next() {
            Some(duplicate) => Err(duplicate),
            None => Ok(table),
        }
    }

    /// Build from flat rows, keeping the first-authored row per slot.
    ///
    /// Rejected rows come back alongside the table so the caller can raise
    /// a data-integrity alert; resolution stays deterministic either way.
    pub fn from_rows_lossy(
        rows: impl IntoIterator<Item = OverrideRow>,
    ) -> (Self, Vec<DuplicateOverride>) {
        let mut table = Self::new();
        let mut duplicates = Vec::new();

        for row in rows {
            let occupied = match row.tier {
                OverrideTier::EquipmentList => {
                    let slot = (row.fighter, row.key);
                    if table.equipment_list.contains_key(&slot) {
                        true
                    } else {
                        table.equipment_list.insert(slot, row.cost);
                        false
                    }
                }
                OverrideTier::Expansion(expansion) => {
                    let slot = (row.fighter, row.key, expansion);
                    if table.expansion.contains_key(&slot) {
                        true
                    } else {
                        table.expansion.insert(slot, row.cost);
                        false
                    }
                }
            };

            if occupied {
                duplicates.push(DuplicateOverride {
                    fighter: row.fighter,
                    equipment: row.key.equipment,
                    rejected: row,
                });
            }
        }

        (table, duplicates)
    }

    /// Equipment-list row for a slot, if authored.
    pub fn equipment_list_cost(&self, fighter: FighterId, key: OverrideKey) -> Option<Credits> {
        self.equipment_list.get(&(fighter, key)).copied()
    }

    /// Expansion row for a slot under one specific expansion, if authored.
    pub fn expansion_cost(
        &self,
        fighter: FighterId,
        key: OverrideKey,
        expansion: ExpansionId,
    ) -> Option<Credits> {
        self.expansion.get(&(fighter, key, expansion)).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.equipment_list.is_empty() && self.expansion.is_empty()
    }
}
