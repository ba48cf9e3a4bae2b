//! Per-player resources.
//!
//! `PlayerState` holds a player's life and energy. The player's four zones
//! (deck, hand, board, graveyard) are kept by the zone manager and read
//! through `Game::zone`.

use serde::{Deserialize, Serialize};

use super::entity::PlayerId;

/// Life and energy for one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Caller-supplied identifier.
    pub id: PlayerId,

    /// Display name. Defaults to the identifier.
    pub name: String,

    /// Life total. Zero or below loses the game.
    pub life: i32,

    /// Energy available to spend this turn.
    pub current_energy: i32,

    /// Energy cap, ramped by one per own turn up to the configured ceiling.
    pub max_energy: i32,
}

impl PlayerState {
    /// Create a player with the given starting life and no energy.
    #[must_use]
    pub fn new(id: PlayerId, life: i32) -> Self {
        Self {
            name: id.0.clone(),
            id,
            life,
            current_energy: 0,
            max_energy: 0,
        }
    }

    /// Set the display name (builder pattern).
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// True while life is above zero.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    /// Raise the cap by one (bounded by `ceiling`) and refill.
    pub fn ramp_energy(&mut self, ceiling: i32) {
        self.max_energy = self.max_energy.saturating_add(1).min(ceiling);
        self.current_energy = self.max_energy;
    }

    /// Deduct `cost` from current energy.
    pub fn spend_energy(&mut self, cost: i32) {
        self.current_energy = self.current_energy.saturating_sub(cost);
    }
}
