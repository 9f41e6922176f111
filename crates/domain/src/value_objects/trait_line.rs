//! Trait line resolution
//!
//! Weapon traits, fighter rules, and fighter skills are all ordered name
//! lists that modifiers can add to or remove from. Resolution partitions the
//! outcome into names retained from the base list (kept in authored order)
//! and names contributed only by modifiers (sorted alphabetically), so the
//! display layer can mark which entries came from where.

use serde::{Deserialize, Serialize};

/// One ordered change to a name list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListChange<'a> {
    /// Insert a name (no-op if already present)
    Add(&'a str),
    /// Remove a name (no-op if absent)
    Remove(&'a str),
}

/// Resolved trait/rule/skill line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitLine {
    /// Names present in both the base list and the result, in base order
    pub retained: Vec<String>,
    /// Names present only via a modifier, alphabetically sorted
    pub added: Vec<String>,
}

impl TraitLine {
    /// Apply ordered changes over a base list and partition the result.
    pub fn resolve<'a>(
        base: &[String],
        changes: impl IntoIterator<Item = ListChange<'a>>,
    ) -> TraitLine {
        let mut working: Vec<String> = base.to_vec();

        for change in changes {
            match change {
                ListChange::Add(name) => {
                    if !working.iter().any(|n| n == name) {
                        working.push(name.to_string());
                    }
                }
                ListChange::Remove(name) => {
                    working.retain(|n| n != name);
                }
            }
        }

        let retained: Vec<String> = base
            .iter()
            .filter(|name| working.iter().any(|n| n == *name))
            .cloned()
            .collect();

        let mut added: Vec<String> = working
            .into_iter()
            .filter(|name| !base.contains(name))
            .collect();
        added.sort();

        TraitLine { retained, added }
    }

    /// Full display order: retained first, then added.
    pub fn names(&self) -> Vec<String> {
        self.retained
            .iter()
            .chain(self.added.iter())
            .cloned()
            .collect()
    }

    /// True when no modifier changed the base list.
    pub fn is_unchanged_from(&self, base: &[String]) -> bool {
        self.added.is_empty() && self.retained == base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_add_and_remove_partition() {
        let line = TraitLine::resolve(
            &base(&["Knockback", "Rapid Fire"]),
            [ListChange::Add("Unwieldy"), ListChange::Remove("Knockback")],
        );
        assert_eq!(line.retained, base(&["Rapid Fire"]));
        assert_eq!(line.added, base(&["Unwieldy"]));
        assert_eq!(line.names(), base(&["Rapid Fire", "Unwieldy"]));
    }

    #[test]
    fn test_duplicate_add_is_noop() {
        let line = TraitLine::resolve(
            &base(&["Knockback"]),
            [ListChange::Add("Knockback"), ListChange::Add("Knockback")],
        );
        assert_eq!(line.retained, base(&["Knockback"]));
        assert!(line.added.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let line = TraitLine::resolve(&base(&["Knockback"]), [ListChange::Remove("Unwieldy")]);
        assert_eq!(line.retained, base(&["Knockback"]));
    }

    #[test]
    fn test_added_names_sort_alphabetically() {
        let line = TraitLine::resolve(
            &[],
            [
                ListChange::Add("Unwieldy"),
                ListChange::Add("Blaze"),
                ListChange::Add("Pulverise"),
            ],
        );
        assert_eq!(line.added, base(&["Blaze", "Pulverise", "Unwieldy"]));
    }

    #[test]
    fn test_add_then_remove_cancels() {
        let line = TraitLine::resolve(
            &[],
            [ListChange::Add("Blaze"), ListChange::Remove("Blaze")],
        );
        assert!(line.names().is_empty());
    }

    #[test]
    fn test_unchanged_detection() {
        let b = base(&["Knockback", "Rapid Fire"]);
        let line = TraitLine::resolve(&b, []);
        assert!(line.is_unchanged_from(&b));
    }
}
