//! Value objects - immutable domain values with no identity

pub mod credits;
pub mod policy;
pub mod stat_registry;
pub mod stat_value;
pub mod trait_line;

pub use credits::Credits;
pub use policy::{ItemMatcher, PolicyRule, PolicyTargets};
pub use stat_registry::{default_class, StatRegistry};
pub use stat_value::{StatClass, StatParseError, StatValue};
pub use trait_line::{ListChange, TraitLine};
