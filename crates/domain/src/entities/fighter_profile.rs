//! Fighter profile entity - a fighter's stored stat card
//!
//! The fighter-side twin of [`super::weapon_profile`]: twelve authored stat
//! strings plus special rules and skills, composed into an effective view
//! by the engine when fighter-side modifiers are attached.

use serde::{Deserialize, Serialize};

use crate::ids::FighterId;

/// The twelve fighter stat fields, in display order.
pub const FIGHTER_STAT_FIELDS: [&str; 12] = [
    "movement",
    "weapon_skill",
    "ballistic_skill",
    "strength",
    "toughness",
    "wounds",
    "initiative",
    "attacks",
    "leadership",
    "cool",
    "willpower",
    "intelligence",
];

/// A fighter's stored stat card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FighterProfile {
    pub id: FighterId,
    pub name: String,
    #[serde(default)]
    pub movement: String,
    #[serde(default)]
    pub weapon_skill: String,
    #[serde(default)]
    pub ballistic_skill: String,
    #[serde(default)]
    pub strength: String,
    #[serde(default)]
    pub toughness: String,
    #[serde(default)]
    pub wounds: String,
    #[serde(default)]
    pub initiative: String,
    #[serde(default)]
    pub attacks: String,
    #[serde(default)]
    pub leadership: String,
    #[serde(default)]
    pub cool: String,
    #[serde(default)]
    pub willpower: String,
    #[serde(default)]
    pub intelligence: String,
    /// Ordered special rule names
    #[serde(default)]
    pub rules: Vec<String>,
    /// Ordered skill names
    #[serde(default)]
    pub skills: Vec<String>,
}

impl FighterProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: FighterId::new(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Authored stat string of one field, `None` outside the fighter line.
    pub fn stat(&self, field: &str) -> Option<&str> {
        let value = match field {
            "movement" => &self.movement,
            "weapon_skill" => &self.weapon_skill,
            "ballistic_skill" => &self.ballistic_skill,
            "strength" => &self.strength,
            "toughness" => &self.toughness,
            "wounds" => &self.wounds,
            "initiative" => &self.initiative,
            "attacks" => &self.attacks,
            "leadership" => &self.leadership,
            "cool" => &self.cool,
            "willpower" => &self.willpower,
            "intelligence" => &self.intelligence,
            _ => return None,
        };
        Some(value)
    }

    /// The stat line as ordered (field, authored value) pairs.
    pub fn statline(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        FIGHTER_STAT_FIELDS.iter().map(|field| {
            let value = self.stat(field).unwrap_or_default();
            (*field, value)
        })
    }
}
