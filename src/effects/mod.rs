//! Card effects: what they are, what they target, and how they resolve.
//!
//! - `EffectSpec` / `EffectKind`: one declared effect of a card
//! - `TargetKind` / `TargetRef`: declared and supplied targets
//! - resolution: an exhaustive match over `EffectKind` (see `resolver`)
//!
//! Adding a kind means adding a variant; the compiler then points at every
//! place that must handle it.

mod effect;
mod resolver;
mod targeting;

pub use effect::{EffectKind, EffectSpec};
pub use targeting::{TargetKind, TargetRef};
