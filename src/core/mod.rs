//! Core engine types: identifiers, RNG port, options, players, the game
//! aggregate and actions.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use entity::{InstanceId, PlayerId, Seat};
pub use player::PlayerState;
pub use rng::{shuffle, GameRng, GameRngState, RandomSource};
pub use config::{GameOptions, DEFAULT_MAX_ENERGY, DEFAULT_STARTING_HAND, DEFAULT_STARTING_LIFE};
pub use action::{replay, Action};
pub use state::{CombatPhase, CombatState, Game};
