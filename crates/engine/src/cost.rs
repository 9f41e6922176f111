//! Cost resolution
//!
//! Resolves the effective credit cost of equipment, weapon profiles,
//! upgrades, and accessories for one fighter. Precedence, most specific
//! first: applicable expansion override, then equipment-list override, then
//! the item's own base cost. Upgrade costs stack cumulatively in Single
//! mode; accessory costs may be computed from a sandboxed expression over
//! the weapon's cost.

use std::collections::BTreeMap;

use tracing::warn;

use warbandr_domain::{
    Credits, DuplicateOverride, EquipmentId, Expansion, FighterId, OverrideKey, OverrideRow,
    OverrideTable, Upgrade, UpgradeMode, WeaponAccessory, WeaponProfile,
};

use crate::cost_expression;

/// Per-call resolution inputs supplied by the catalog/store layer.
///
/// `expansions` is the authored expansion list in declaration order; when
/// several applicable expansions override the same item, the earliest
/// declared one wins, which keeps resolution deterministic.
#[derive(Debug, Clone, Default)]
pub struct ResolutionContext {
    pub fighter: FighterId,
    /// Campaign/house/arbitrator rule inputs for expansion gating
    pub rule_inputs: BTreeMap<String, String>,
    pub expansions: Vec<Expansion>,
}

impl ResolutionContext {
    pub fn new(fighter: FighterId) -> Self {
        Self {
            fighter,
            rule_inputs: BTreeMap::new(),
            expansions: Vec::new(),
        }
    }

    pub fn with_rule_input(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.rule_inputs.insert(key.into(), value.into());
        self
    }

    pub fn with_expansion(mut self, expansion: Expansion) -> Self {
        self.expansions.push(expansion);
        self
    }

    /// Expansions whose rule inputs match this context, in declaration order.
    pub fn applicable_expansions(&self) -> impl Iterator<Item = &Expansion> {
        self.expansions
            .iter()
            .filter(|e| e.applies_to(&self.rule_inputs))
    }
}

/// Build the override lookup table from flat authored rows, logging each
/// duplicate as a data-integrity alert.
///
/// Resolution stays deterministic on bad data: the first-authored row per
/// slot wins. Strict callers use [`OverrideTable::from_rows`] instead.
pub fn build_override_table(rows: impl IntoIterator<Item = OverrideRow>) -> OverrideTable {
    let (table, duplicates) = OverrideTable::from_rows_lossy(rows);
    for DuplicateOverride {
        fighter,
        equipment,
        rejected,
    } in &duplicates
    {
        warn!(
            %fighter,
            %equipment,
            rejected_cost = rejected.cost.value(),
            "duplicate override row dropped; first-authored row kept"
        );
    }
    table
}

/// Pure cost resolver over an override table and a resolution context.
#[derive(Debug, Clone, Copy)]
pub struct CostResolver<'a> {
    table: &'a OverrideTable,
    context: &'a ResolutionContext,
}

impl<'a> CostResolver<'a> {
    pub fn new(table: &'a OverrideTable, context: &'a ResolutionContext) -> Self {
        Self { table, context }
    }

    /// Walk the precedence chain for one override key.
    fn resolve(&self, key: OverrideKey, base: Credits) -> Credits {
        for expansion in self.context.applicable_expansions() {
            if let Some(cost) = self
                .table
                .expansion_cost(self.context.fighter, key, expansion.id)
            {
                return cost;
            }
        }
        if let Some(cost) = self.table.equipment_list_cost(self.context.fighter, key) {
            return cost;
        }
        base
    }

    /// Effective cost of the equipment itself.
    ///
    /// Only base-tier rows (no profile/upgrade/accessory part) participate.
    /// The numeric base comes from the caller because equipment cost is
    /// authored as display text; interpreting that text is the catalog
    /// layer's call, not the resolver's.
    pub fn equipment_cost(&self, equipment: EquipmentId, base: Credits) -> Credits {
        self.resolve(OverrideKey::equipment(equipment), base)
    }

    /// Effective cost of one weapon profile.
    pub fn profile_cost(&self, profile: &WeaponProfile) -> Credits {
        self.resolve(
            OverrideKey::profile(profile.equipment, profile.id),
            profile.cost,
        )
    }

    /// Effective cost of one upgrade.
    ///
    /// `all_upgrades` is the full upgrade list of the owning equipment
    /// (including this upgrade). Single mode sums every position up to and
    /// including this one, each term override-resolved; Multi mode prices
    /// the upgrade on its own.
    pub fn upgrade_cost(&self, upgrade: &Upgrade, all_upgrades: &[Upgrade]) -> Credits {
        match upgrade.mode {
            UpgradeMode::Multi => self.single_upgrade_cost(upgrade),
            UpgradeMode::Single => all_upgrades
                .iter()
                .filter(|u| u.equipment == upgrade.equipment && u.position <= upgrade.position)
                .map(|u| self.single_upgrade_cost(u))
                .sum(),
        }
    }

    fn single_upgrade_cost(&self, upgrade: &Upgrade) -> Credits {
        self.resolve(
            OverrideKey::upgrade(upgrade.equipment, upgrade.id),
            upgrade.cost,
        )
    }

    /// Effective cost of a weapon accessory fitted to `equipment`.
    ///
    /// The accessory's base cost is its cost expression evaluated against
    /// the weapon's resolved cost when one is authored, else its flat cost.
    /// A broken expression never surfaces: it is logged and the flat cost
    /// stands in. Overrides still take precedence over either.
    pub fn accessory_cost(
        &self,
        equipment: EquipmentId,
        accessory: &WeaponAccessory,
        weapon_cost: Credits,
    ) -> Credits {
        let base = match &accessory.cost_expression {
            Some(expression) => match cost_expression::evaluate(expression, weapon_cost.value()) {
                Ok(value) => Credits(value),
                Err(error) => {
                    warn!(
                        accessory = %accessory.name,
                        expression,
                        %error,
                        "cost expression failed; using flat cost"
                    );
                    accessory.cost
                }
            },
            None => accessory.cost,
        };
        self.resolve(OverrideKey::accessory(equipment, accessory.id), base)
    }
}
