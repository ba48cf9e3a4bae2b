//! # tcg-engine
//!
//! Rules engine for a two-player creature/spell card game.
//!
//! The engine owns all game-state mutation: turn flow, energy, effect
//! resolution, targeting, zone moves and win/loss. It does no I/O and is
//! deterministic given a seed, so a game can be rebuilt from
//! (seed, decks, actions).
//!
//! ## Design Principles
//!
//! 1. **Arena + ids**: card instances live in one ordered map; zones hold
//!    only instance ids. Moving a card never invalidates another reference.
//!
//! 2. **Closed sets**: effect kinds, target kinds and error kinds are enums,
//!    so every consumer matches them exhaustively.
//!
//! 3. **Persistent Data Structures**: the arena, event log and history use
//!    `im-rs`, so snapshots are cheap.
//!
//! ## Quick start
//!
//! ```
//! use std::sync::Arc;
//! use tcg_engine::cards::CardTemplate;
//! use tcg_engine::core::{GameOptions, PlayerId, Seat};
//! use tcg_engine::effects::TargetKind;
//! use tcg_engine::rules::new_game;
//!
//! let zap = Arc::new(CardTemplate::spell("zap", "Zap", 1).with_damage(3, TargetKind::EnemyPlayer));
//! let deck = vec![zap; 10];
//! let mut game = new_game("alice", "bob", &deck, &deck, GameOptions::new().with_seed(42)).unwrap();
//!
//! game.start_turn();
//! game.play_card(&PlayerId::new("alice"), 0, &[None]).unwrap();
//! assert_eq!(game.player(Seat::SECOND).unwrap().life, 17);
//! ```
//!
//! ## Modules
//!
//! - `core`: Ids, RNG port, options, player state, the `Game` aggregate, actions
//! - `cards`: Templates, instances, registry
//! - `zones`: Card arena and zone manager
//! - `effects`: Effect specs, targeting, resolution
//! - `events`: Append-only event log
//! - `rules`: Setup, turn controller, validation, play, state-based effects
//! - `error`: `GameError` and `ErrorKind`

pub mod core;
pub mod cards;
pub mod zones;
pub mod effects;
pub mod events;
pub mod rules;
pub mod error;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use crate::core::{
    replay, Action, CombatPhase, CombatState, Game, GameOptions, GameRng, InstanceId, PlayerId,
    PlayerState, RandomSource, Seat,
};

pub use crate::cards::{CardInstance, CardRegistry, CardTemplate, CardType};

pub use crate::zones::{Zone, ZoneManager};

pub use crate::effects::{EffectKind, EffectSpec, TargetKind, TargetRef};

pub use crate::events::{Event, EventKind, EventLog};

pub use crate::rules::{new_game, new_game_with_rng, GameResult};

pub use crate::error::{ErrorKind, GameError, Result};
