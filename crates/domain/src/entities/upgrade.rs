//! Upgrade entity - positioned improvements to a piece of equipment

use serde::{Deserialize, Serialize};

use crate::ids::{EquipmentId, UpgradeId};
use crate::value_objects::Credits;

/// How an equipment's upgrades combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UpgradeMode {
    /// A linear progression: buying position N implies every position
    /// before it, so the cost is cumulative up to N.
    #[default]
    Single,
    /// Independent options: each upgrade is priced on its own.
    Multi,
}

/// One upgrade slot on a piece of equipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Upgrade {
    pub id: UpgradeId,
    pub equipment: EquipmentId,
    pub name: String,
    /// Position in the progression (meaningful in Single mode)
    pub position: i32,
    pub cost: Credits,
    #[serde(default)]
    pub mode: UpgradeMode,
}

impl Upgrade {
    pub fn new(
        equipment: EquipmentId,
        name: impl Into<String>,
        position: i32,
        cost: Credits,
    ) -> Self {
        Self {
            id: UpgradeId::new(),
            equipment,
            name: name.into(),
            position,
            cost,
            mode: UpgradeMode::Single,
        }
    }

    pub fn with_mode(mut self, mode: UpgradeMode) -> Self {
        self.mode = mode;
        self
    }
}
