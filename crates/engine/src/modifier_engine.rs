//! Directional stat modification
//!
//! Applies one stat modifier to one authored stat string: `set` replaces
//! the text verbatim, `improve`/`worsen` shift the numeric component in the
//! direction the stat's classification says is better/worse. Linkage (the
//! `S` in `S+1`) survives untouched - only the offset moves.

use thiserror::Error;

use warbandr_domain::{StatClass, StatModMode, StatModifier, StatParseError, StatValue};

/// Error applying a stat modifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModifierError {
    /// The modifier's magnitude was not a signed integer
    #[error("Non-numeric modifier magnitude: '{0}'")]
    Magnitude(String),

    /// The current stat value failed to parse
    #[error(transparent)]
    Stat(#[from] StatParseError),
}

/// Apply one modifier to an authored stat string.
///
/// Pure function: the inputs are never mutated, the result is a freshly
/// formatted stat string under the same classification. Malformed input is
/// an error - callers choose their own fallback rather than this function
/// guessing zero.
pub fn apply_stat_modifier(
    current: &str,
    mode: StatModMode,
    value: &str,
    class: StatClass,
) -> Result<String, ModifierError> {
    let direction: i32 = match mode {
        // Set bypasses numeric logic entirely; the authored replacement
        // text is the new value even if it would not parse.
        StatModMode::Set => return Ok(value.to_string()),
        StatModMode::Improve => 1,
        StatModMode::Worsen => -1,
    };
    let direction = if class.is_inverted { -direction } else { direction };

    let magnitude: i32 = value
        .trim()
        .parse()
        .map_err(|_| ModifierError::Magnitude(value.to_string()))?;

    let parsed = StatValue::parse(current)?;
    let shifted = StatValue {
        number: parsed.number + magnitude * direction,
        linkage: parsed.linkage,
    };
    Ok(shifted.format(class))
}

/// Apply an entire [`StatModifier`] record.
pub fn apply(current: &str, modifier: &StatModifier, class: StatClass) -> Result<String, ModifierError> {
    apply_stat_modifier(current, modifier.mode, &modifier.value, class)
}
