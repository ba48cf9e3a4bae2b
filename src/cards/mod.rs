//! Card system: templates, instances, and registry.
//!
//! ## Key Types
//!
//! - `CardTemplate`: Immutable card data from the catalog
//! - `CardType`: Creature or spell
//! - `CardInstance`: Runtime card state (buffs, damage, readiness)
//! - `CardRegistry`: Template lookup and deck building

pub mod definition;
pub mod instance;
pub mod registry;

pub use definition::{CardTemplate, CardType, EffectList};
pub use instance::CardInstance;
pub use registry::CardRegistry;
