//! Trading-post policy rules
//!
//! An ordered allow/deny rule chain controls which catalog items a fighter
//! may be offered. Rules are authored in layers - a later rule overrides an
//! earlier one - so evaluation (in the engine crate) walks the chain in
//! reverse declaration order and the first rule that decides wins.

use serde::{Deserialize, Serialize};

/// Matches a candidate item by category and/or name.
///
/// An unset field matches anything; a matcher with both fields unset matches
/// every item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemMatcher {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ItemMatcher {
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            name: None,
        }
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self {
            category: None,
            name: Some(name.into()),
        }
    }

    /// Unset-or-equal on both fields.
    pub fn matches(&self, category: &str, name: &str) -> bool {
        self.category.as_deref().is_none_or(|c| c == category)
            && self.name.as_deref().is_none_or(|n| n == name)
    }
}

/// The target set of one allow or deny clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PolicyTargets {
    /// Every item
    All,
    /// Items matching any listed matcher
    Items(Vec<ItemMatcher>),
}

impl PolicyTargets {
    pub fn matches(&self, category: &str, name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Items(matchers) => matchers.iter().any(|m| m.matches(category, name)),
        }
    }
}

/// One rule in the ordered chain. Either clause may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow: Option<PolicyTargets>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deny: Option<PolicyTargets>,
}

impl PolicyRule {
    pub fn allow_all() -> Self {
        Self {
            allow: Some(PolicyTargets::All),
            deny: None,
        }
    }

    pub fn deny_all() -> Self {
        Self {
            allow: None,
            deny: Some(PolicyTargets::All),
        }
    }

    pub fn allowing(matchers: Vec<ItemMatcher>) -> Self {
        Self {
            allow: Some(PolicyTargets::Items(matchers)),
            deny: None,
        }
    }

    pub fn denying(matchers: Vec<ItemMatcher>) -> Self {
        Self {
            allow: None,
            deny: Some(PolicyTargets::Items(matchers)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matcher_unset_fields_match_anything() {
        let matcher = ItemMatcher::default();
        assert!(matcher.matches("Heavy Weapons", "Big Gun"));
    }

    #[test]
    fn test_matcher_category_only() {
        let matcher = ItemMatcher::category("Heavy Weapons");
        assert!(matcher.matches("Heavy Weapons", "Big Gun"));
        assert!(!matcher.matches("Pistols", "Big Gun"));
    }

    #[test]
    fn test_matcher_both_fields_must_match() {
        let matcher = ItemMatcher {
            category: Some("Pistols".to_string()),
            name: Some("Stub Gun".to_string()),
        };
        assert!(matcher.matches("Pistols", "Stub Gun"));
        assert!(!matcher.matches("Pistols", "Laspistol"));
    }

    #[test]
    fn test_targets_all_matches_everything() {
        assert!(PolicyTargets::All.matches("anything", "at all"));
    }

    #[test]
    fn test_rule_serde_shape() {
        let rule = PolicyRule::allow_all();
        assert_eq!(serde_json::to_string(&rule).unwrap(), r#"{"allow":"all"}"#);

        let rule = PolicyRule::denying(vec![ItemMatcher::category("Heavy Weapons")]);
        assert_eq!(
            serde_json::to_string(&rule).unwrap(),
            r#"{"deny":{"items":[{"category":"Heavy Weapons"}]}}"#
        );
    }
}
