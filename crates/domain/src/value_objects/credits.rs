//! Credits value object for resolved costs

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A resolved credit cost.
///
/// Authored override costs are non-negative by invariant; the engine trusts
/// that and never re-validates. Kept as a newtype so resolved costs cannot
/// be confused with positions or stat numbers.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Credits(pub i32);

impl Credits {
    pub const ZERO: Credits = Credits(0);

    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(self) -> i32 {
        self.0
    }
}

impl Add for Credits {
    type Output = Credits;

    fn add(self, rhs: Credits) -> Credits {
        Credits(self.0 + rhs.0)
    }
}

impl Sum for Credits {
    fn sum<I: Iterator<Item = Credits>>(iter: I) -> Credits {
        iter.fold(Credits::ZERO, Add::add)
    }
}

impl From<i32> for Credits {
    fn from(value: i32) -> Self {
        Credits(value)
    }
}

impl fmt::Display for Credits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_of_credits() {
        let total: Credits = [Credits(10), Credits(15), Credits(20)].into_iter().sum();
        assert_eq!(total, Credits(45));
    }

    #[test]
    fn test_serde_is_transparent() {
        assert_eq!(serde_json::to_string(&Credits(75)).unwrap(), "75");
    }
}
