//! Trading-post policy evaluation
//!
//! Rules are authored in layers and the LAST rule that decides wins, so
//! evaluation walks the chain in reverse declaration order and stops at the
//! first decision. This is deliberately not firewall-style first-match-wins:
//! a pack appending `allow` for one named item punches through an earlier
//! blanket deny.

use warbandr_domain::PolicyRule;

/// Decide whether an item (by category and name) is admitted.
///
/// Within one rule, deny is checked before allow; when no rule decides, the
/// default is accept.
pub fn evaluate_policy(rules: &[PolicyRule], category: &str, name: &str) -> bool {
    for rule in rules.iter().rev() {
        if let Some(deny) = &rule.deny {
            if deny.matches(category, name) {
                return false;
            }
        }
        if let Some(allow) = &rule.allow {
            if allow.matches(category, name) {
                return true;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use warbandr_domain::{ItemMatcher, PolicyTargets};

    #[test]
    fn test_empty_rules_accept() {
        assert!(evaluate_policy(&[], "Pistols", "Stub Gun"));
    }

    #[test]
    fn test_deny_all_rejects_everything() {
        let rules = vec![PolicyRule::deny_all()];
        assert!(!evaluate_policy(&rules, "Pistols", "Stub Gun"));
        assert!(!evaluate_policy(&rules, "anything", "else"));
    }

    #[test]
    fn test_last_rule_wins_over_earlier_deny() {
        // Authored order: allow all, then deny the category, then allow one
        // named item back. The final allow decides for that item.
        let rules = vec![
            PolicyRule::allow_all(),
            PolicyRule::denying(vec![ItemMatcher::category("Heavy Weapons")]),
            PolicyRule::allowing(vec![ItemMatcher::name("Big Gun")]),
        ];
        assert!(evaluate_policy(&rules, "Heavy Weapons", "Big Gun"));
        // Other heavy weapons still hit the deny layer.
        assert!(!evaluate_policy(&rules, "Heavy Weapons", "Other Gun"));
        // Unrelated items fall through to the blanket allow.
        assert!(evaluate_policy(&rules, "Pistols", "Stub Gun"));
    }

    #[test]
    fn test_deny_checked_before_allow_within_one_rule() {
        let rules = vec![PolicyRule {
            allow: Some(PolicyTargets::All),
            deny: Some(PolicyTargets::Items(vec![ItemMatcher::name("Big Gun")])),
        }];
        assert!(!evaluate_policy(&rules, "Heavy Weapons", "Big Gun"));
        assert!(evaluate_policy(&rules, "Heavy Weapons", "Other Gun"));
    }

    #[test]
    fn test_undecided_rules_fall_through() {
        // A rule that matches nothing leaves the earlier rule in charge.
        let rules = vec![
            PolicyRule::deny_all(),
            PolicyRule::allowing(vec![ItemMatcher::name("Big Gun")]),
        ];
        assert!(evaluate_policy(&rules, "Heavy Weapons", "Big Gun"));
        assert!(!evaluate_policy(&rules, "Heavy Weapons", "Other Gun"));
    }
}
