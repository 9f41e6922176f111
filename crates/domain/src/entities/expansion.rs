//! Expansion entity - conditionally applicable content packs
//!
//! An expansion bundles cost overrides that only apply when the resolving
//! context matches its rule inputs (campaign flags, gang house, arbitrator
//! toggles...). Matching is exact key/value: every input the expansion
//! requires must be present in the context with the same value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ids::ExpansionId;

/// A named, conditionally-applicable override pack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expansion {
    pub id: ExpansionId,
    pub name: String,
    /// Required rule inputs; empty means always applicable
    #[serde(default)]
    pub rule_inputs: BTreeMap<String, String>,
}

impl Expansion {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ExpansionId::new(),
            name: name.into(),
            rule_inputs: BTreeMap::new(),
        }
    }

    pub fn with_rule_input(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.rule_inputs.insert(key.into(), value.into());
        self
    }

    /// Whether this expansion's overrides apply under the given inputs.
    pub fn applies_to(&self, inputs: &BTreeMap<String, String>) -> bool {
        self.rule_inputs
            .iter()
            .all(|(key, value)| inputs.get(key) == Some(value))
    }
}
