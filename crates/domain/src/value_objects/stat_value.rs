//! Stat value parsing and formatting
//!
//! Catalog stat lines are authored as compact strings: `4"` (inches), `3+`
//! (target roll), `+1` (roll modifier), `S+1` (linked to the fighter's own
//! Strength), `-` (no value). This module parses those strings into a
//! numeric value plus optional linkage, and formats them back under a
//! classification, so modifiers can do arithmetic in between.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error when parsing a stat string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatParseError {
    /// A segment that should be numeric was not (e.g. the `x` in `"S+x"`)
    #[error("Non-numeric stat segment: '{0}'")]
    Numeric(String),
}

/// Display classification for one stat field.
///
/// Parsing does not need these flags (the suffix carries enough shape), but
/// formatting and directional modification do: an inches stat renders as
/// `4"`, a target-roll stat as `3+`, and an inverted stat improves by
/// decreasing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatClass {
    /// Lower printed number is the better outcome (target rolls)
    #[serde(default)]
    pub is_inverted: bool,
    /// Rendered with a trailing `"` (movement, ranges)
    #[serde(default)]
    pub is_inches: bool,
    /// Rendered with an explicit sign (accuracy, hit modifiers)
    #[serde(default)]
    pub is_modifier: bool,
    /// Rendered with a trailing `+` (ammo, save, target rolls)
    #[serde(default)]
    pub is_target: bool,
}

impl StatClass {
    /// A plain numeric stat with no suffix and normal direction.
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn inches() -> Self {
        Self {
            is_inches: true,
            ..Self::default()
        }
    }

    pub fn modifier() -> Self {
        Self {
            is_modifier: true,
            ..Self::default()
        }
    }

    /// Target rolls are inverted: a `3+` is better than a `4+`.
    pub fn target() -> Self {
        Self {
            is_target: true,
            is_inverted: true,
            ..Self::default()
        }
    }
}

/// A parsed stat string: a signed number plus optional linkage.
///
/// Linkage is the non-numeric prefix of a stat-linked value - the `S` in
/// `S+1` means "the fighter's own Strength". A value may carry several
/// linked segments (`S+T+1` links both Strength and Toughness).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatValue {
    /// Numeric component (negative for `S-1` style values)
    pub number: i32,
    /// Linked stat names, in authored order
    pub linkage: Option<Vec<String>>,
}

impl StatValue {
    /// A zero value with no linkage (the parse of `""` or `"-"`).
    pub fn zero() -> Self {
        Self {
            number: 0,
            linkage: None,
        }
    }

    /// Create a plain numeric value.
    pub fn plain(number: i32) -> Self {
        Self {
            number,
            linkage: None,
        }
    }

    /// Create a linked value (e.g. `S+1`).
    pub fn linked(linkage: Vec<String>, number: i32) -> Self {
        Self {
            number,
            linkage: Some(linkage),
        }
    }

    /// Parse a stat string.
    ///
    /// Grammar, tried in order:
    /// - `""` or `"-"` - no value
    /// - trailing `"` - inches
    /// - trailing `+` - target roll
    /// - leading `+` - roll modifier
    /// - `"S"` - pure linkage
    /// - `X+n` / `X-n` - linkage with offset
    /// - plain integer
    ///
    /// A non-numeric segment where a number is required is an error; callers
    /// decide their own fallback rather than this parser guessing zero.
    pub fn parse(raw: &str) -> Result<Self, StatParseError> {
        let raw = raw.trim();

        if raw.is_empty() || raw == "-" {
            return Ok(Self::zero());
        }

        if let Some(stripped) = raw.strip_suffix('"') {
            return Ok(Self::plain(parse_int(stripped)?));
        }

        if let Some(stripped) = raw.strip_suffix('+') {
            return Ok(Self::plain(parse_int(stripped)?));
        }

        if let Some(stripped) = raw.strip_prefix('+') {
            return Ok(Self::plain(parse_int(stripped)?));
        }

        if raw == "S" {
            return Ok(Self::linked(vec!["S".to_string()], 0));
        }

        if let Some((prefix, last)) = raw.rsplit_once('+') {
            if !prefix.is_empty() {
                return Ok(Self::linked(split_linkage(prefix), parse_int(last)?));
            }
        }

        if let Some((prefix, last)) = raw.rsplit_once('-') {
            if !prefix.is_empty() {
                return Ok(Self::linked(split_linkage(prefix), -parse_int(last)?));
            }
        }

        Ok(Self::plain(parse_int(raw)?))
    }

    /// Format back to the compact string form under a classification.
    ///
    /// Linkage takes priority over every display flag; a zero value with no
    /// linkage renders as the empty string so untouched blank fields stay
    /// blank.
    pub fn format(&self, class: StatClass) -> String {
        if let Some(linkage) = &self.linkage {
            let base = linkage.join("+");
            return match self.number {
                0 => base,
                n if n > 0 => format!("{base}+{n}"),
                n => format!("{base}{n}"),
            };
        }

        if self.number == 0 {
            return String::new();
        }

        if class.is_inches {
            format!("{}\"", self.number)
        } else if class.is_modifier {
            if self.number > 0 {
                format!("+{}", self.number)
            } else {
                self.number.to_string()
            }
        } else if class.is_target {
            format!("{}+", self.number)
        } else {
            self.number.to_string()
        }
    }
}

fn parse_int(segment: &str) -> Result<i32, StatParseError> {
    segment
        .trim()
        .parse::<i32>()
        .map_err(|_| StatParseError::Numeric(segment.to_string()))
}

fn split_linkage(prefix: &str) -> Vec<String> {
    prefix.split('+').map(|s| s.to_string()).collect()
}
