//! Weapon profile entity - one firing mode of a weapon
//!
//! A weapon has at least one profile; the unnamed zero-cost one is the
//! "standard" profile. Stat fields are stored as authored stat strings (see
//! [`crate::value_objects::stat_value`]) and only interpreted at
//! composition time.

use serde::{Deserialize, Serialize};

use crate::ids::{EquipmentId, WeaponProfileId};
use crate::value_objects::Credits;

/// The eight weapon stat fields, in display order.
pub const WEAPON_STAT_FIELDS: [&str; 8] = [
    "range_short",
    "range_long",
    "accuracy_short",
    "accuracy_long",
    "strength",
    "armour_piercing",
    "damage",
    "ammo",
];

/// One firing mode of a weapon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponProfile {
    pub id: WeaponProfileId,
    pub equipment: EquipmentId,
    /// Empty string for the standard profile
    #[serde(default)]
    pub name: String,
    /// Extra cost over the weapon itself (zero for the standard profile)
    #[serde(default)]
    pub cost: Credits,
    #[serde(default)]
    pub range_short: String,
    #[serde(default)]
    pub range_long: String,
    #[serde(default)]
    pub accuracy_short: String,
    #[serde(default)]
    pub accuracy_long: String,
    #[serde(default)]
    pub strength: String,
    #[serde(default)]
    pub armour_piercing: String,
    #[serde(default)]
    pub damage: String,
    #[serde(default)]
    pub ammo: String,
    /// Ordered trait names
    #[serde(default)]
    pub traits: Vec<String>,
}

impl WeaponProfile {
    pub fn new(equipment: EquipmentId) -> Self {
        Self {
            id: WeaponProfileId::new(),
            equipment,
            ..Self::default()
        }
    }

    /// True for the unnamed default profile.
    pub fn is_standard(&self) -> bool {
        self.name.is_empty()
    }

    /// Name for display; the unnamed profile shows as "standard".
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "standard"
        } else {
            &self.name
        }
    }

    /// Authored stat string of one field.
    ///
    /// Returns `None` for a field name outside the weapon stat line; content
    /// packs cannot add weapon stat columns.
    pub fn stat(&self, field: &str) -> Option<&str> {
        let value = match field {
            "range_short" => &self.range_short,
            "range_long" => &self.range_long,
            "accuracy_short" => &self.accuracy_short,
            "accuracy_long" => &self.accuracy_long,
            "strength" => &self.strength,
            "armour_piercing" => &self.armour_piercing,
            "damage" => &self.damage,
            "ammo" => &self.ammo,
            _ => return None,
        };
        Some(value)
    }

    /// The stat line as ordered (field, authored value) pairs.
    pub fn statline(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        WEAPON_STAT_FIELDS.iter().map(|field| {
            let value = self.stat(field).unwrap_or_default();
            (*field, value)
        })
    }
}
