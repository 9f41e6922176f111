//! Weapon accessory entity - attachments priced per weapon

use serde::{Deserialize, Serialize};

use crate::ids::AccessoryId;
use crate::value_objects::Credits;

/// An attachment (sight, stock, suspensor...) fitted to a weapon.
///
/// Accessories may be priced dynamically: `cost_expression`, when present,
/// is a tiny arithmetic formula over the weapon's own cost (`cost_int`),
/// e.g. `"ceil(cost_int * 0.25 / 5) * 5"` for "25% of the weapon, rounded
/// up to a 5". The engine evaluates it sandboxed and falls back to the flat
/// cost if the authored expression is broken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponAccessory {
    pub id: AccessoryId,
    pub name: String,
    /// Flat cost; also the fallback when the expression fails
    pub cost: Credits,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_expression: Option<String>,
}

impl WeaponAccessory {
    pub fn new(name: impl Into<String>, cost: Credits) -> Self {
        Self {
            id: AccessoryId::new(),
            name: name.into(),
            cost,
            cost_expression: None,
        }
    }

    pub fn with_expression(mut self, expression: impl Into<String>) -> Self {
        self.cost_expression = Some(expression.into());
        self
    }
}
