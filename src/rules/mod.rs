//! Rules: game setup, turn flow, play validation and commit, state-based
//! effects.
//!
//! Everything here is implemented as methods on [`Game`](crate::core::Game)
//! except construction:
//!
//! - [`new_game`] / [`new_game_with_rng`]
//! - `Game::start_turn`, `Game::end_turn`, `Game::draw`
//! - `Game::can_play_card`, `Game::play_card`, `Game::playable_hand_indices`
//! - `Game::check_state_based_effects`

mod play;
mod setup;
mod state_based;
mod turn;
mod validate;

pub use setup::{new_game, new_game_with_rng};
pub use state_based::GameResult;
