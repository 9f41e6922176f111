//! Warbandr engine - cost resolution and stat-modifier composition.
//!
//! Every entry point here is a pure, synchronous function over immutable
//! values from `warbandr-domain`: resolve a cost, compose an effective
//! profile, decide a policy admission. No I/O, no shared mutable state;
//! arbitrarily many resolutions may run concurrently with zero
//! coordination. The only ordering that matters is intra-call: the modifier
//! list handed to one composition is applied in declaration order.

pub mod composition;
pub mod cost;
pub mod cost_expression;
pub mod modifier_engine;
pub mod policy;

pub use composition::{
    compose_fighter, compose_weapon_profile, ComposeError, EffectiveFighter,
    EffectiveWeaponProfile, StatField,
};
pub use cost::{build_override_table, CostResolver, ResolutionContext};
pub use cost_expression::ExpressionError;
pub use modifier_engine::{apply_stat_modifier, ModifierError};
pub use policy::evaluate_policy;
