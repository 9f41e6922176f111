//! Equipment entity - a purchasable catalog item

use serde::{Deserialize, Serialize};

use crate::ids::EquipmentId;

/// How hard an item is to source at the trading post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "roll", rename_all = "camelCase")]
pub enum Rarity {
    /// Freely available
    Common,
    /// Available on a rarity roll of this value or higher
    Rare(u8),
    /// As rare, but restricted goods
    Illegal(u8),
    /// Never at the trading post; granted by scenario or content pack only
    Exclusive,
}

/// A purchasable catalog item.
///
/// Plain data struct: authored content, immutable at resolution time. The
/// base cost is kept as authored text because packs write things like
/// "15" but also "10 (per load)" for display; the numeric cost used in
/// resolution lives on the weapon profiles and override rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: EquipmentId,
    pub name: String,
    /// Catalog category (e.g. "Pistols", "Heavy Weapons")
    pub category: String,
    /// Authored cost text
    pub cost: String,
    pub rarity: Rarity,
}

impl Equipment {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: EquipmentId::new(),
            name: name.into(),
            category: category.into(),
            cost: String::new(),
            rarity: Rarity::Common,
        }
    }

    pub fn with_cost(mut self, cost: impl Into<String>) -> Self {
        self.cost = cost.into();
        self
    }

    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }
}
