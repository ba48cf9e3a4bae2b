//! State-based effects: game end and creature deaths.
//!
//! Runs after every successful play. Life totals are checked first; if the
//! game ends, creature deaths are not processed.

use serde::{Deserialize, Serialize};

use crate::core::entity::{PlayerId, Seat};
use crate::core::state::Game;
use crate::events::EventKind;
use crate::zones::Zone;

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Both players reached zero life together.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: &PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => p == player,
            GameResult::Draw => false,
        }
    }

    #[must_use]
    pub fn winner(&self) -> Option<&PlayerId> {
        match self {
            GameResult::Winner(p) => Some(p),
            GameResult::Draw => None,
        }
    }
}

impl Game {
    /// Evaluate state-based effects. Returns `true` if the game is over.
    pub fn check_state_based_effects(&mut self) -> bool {
        if self.is_ended() {
            return true;
        }
        if self.check_life_totals() {
            return true;
        }
        self.bury_dead_creatures();
        false
    }

    fn check_life_totals(&mut self) -> bool {
        let alive = [self.players[0].is_alive(), self.players[1].is_alive()];

        let (result, outcome) = match alive {
            [true, true] => return false,
            [false, false] => {
                self.log_event(
                    None,
                    EventKind::GameEnd,
                    "Both players died simultaneously - game is a draw!",
                );
                (GameResult::Draw, "Draw!".to_string())
            }
            [winner_alive, _] => {
                let (winner, loser) = if winner_alive {
                    (Seat::FIRST, Seat::SECOND)
                } else {
                    (Seat::SECOND, Seat::FIRST)
                };
                let w = &self.players[winner.index()];
                let l = &self.players[loser.index()];
                let message = format!("{} wins! {} died with {} life", w.name, l.name, l.life);
                let result = GameResult::Winner(w.id.clone());
                let outcome = format!("{} wins!", w.name);
                self.log_event(Some(winner), EventKind::GameEnd, message);
                (result, outcome)
            }
        };

        self.log_event(None, EventKind::StateBasedEffects, format!("Game ended: {outcome}"));
        log::info!("game {} ended: {outcome}", self.id);
        self.result = Some(result);
        self.outcome = Some(outcome);
        true
    }

    /// Move every creature at zero or less health to its owner's graveyard.
    fn bury_dead_creatures(&mut self) {
        for seat in Seat::BOTH {
            let board = self.zones.cards(seat, Zone::Board).to_vec();
            for id in board.iter().rev() {
                let Some(card) = self.zones.get(id) else {
                    continue;
                };
                if !card.is_dead() {
                    continue;
                }
                let message = format!("{} ({}) died with {} health", card.name(), id, card.current_health());
                self.log_event(Some(seat), EventKind::CreatureDeath, message);
                if let Err(err) = self.move_to_graveyard(id, "life reached 0") {
                    self.log_error(Some(seat), format!("failed to bury {id}: {err}"));
                }
            }
        }
    }
}
