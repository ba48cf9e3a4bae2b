//! Actions and replay.
//!
//! An `Action` is one call a driver can make against a game. Every action
//! that succeeds is appended to the game's history; a guard no-op or a
//! rejected play is not. Because the engine is deterministic given its seed,
//! feeding the history back through [`replay`] rebuilds the same game, event
//! log included.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::config::GameOptions;
use super::entity::PlayerId;
use super::state::Game;
use crate::cards::CardTemplate;
use crate::effects::TargetRef;
use crate::error::Result;
use crate::rules::new_game;

/// A driver-issued game action.
///
/// ## Example
///
/// ```
/// use tcg_engine::core::{Action, PlayerId};
/// use tcg_engine::effects::TargetRef;
///
/// let play = Action::PlayCard {
///     player: PlayerId::new("alice"),
///     hand_index: 0,
///     targets: vec![Some(TargetRef::player("bob"))],
/// };
/// assert!(play.is_play());
/// assert!(!Action::EndTurn.is_play());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    StartTurn,
    EndTurn,
    PlayCard {
        player: PlayerId,
        hand_index: usize,
        targets: Vec<Option<TargetRef>>,
    },
}

impl Action {
    #[must_use]
    pub fn is_play(&self) -> bool {
        matches!(self, Action::PlayCard { .. })
    }
}

impl Game {
    /// Dispatch one action.
    ///
    /// Turn actions never fail (guard failures are logged); plays return
    /// the validation error, if any.
    pub fn apply(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::StartTurn => {
                self.start_turn();
                Ok(())
            }
            Action::EndTurn => {
                self.end_turn();
                Ok(())
            }
            Action::PlayCard {
                player,
                hand_index,
                targets,
            } => self.play_card(player, *hand_index, targets),
        }
    }
}

/// Rebuild a game from its inputs and an action sequence.
///
/// `options` must carry the seed the original game used (see
/// [`Game::options`]); a zero seed would pick a fresh one.
pub fn replay<'a>(
    player1: impl Into<PlayerId>,
    player2: impl Into<PlayerId>,
    deck1: &[Arc<CardTemplate>],
    deck2: &[Arc<CardTemplate>],
    options: GameOptions,
    actions: impl IntoIterator<Item = &'a Action>,
) -> Result<Game> {
    let mut game = new_game(player1, player2, deck1, deck2, options)?;
    for action in actions {
        game.apply(action)?;
    }
    Ok(game)
}
