//! Shared fixtures for unit tests.

use std::sync::Arc;

use crate::cards::{CardInstance, CardTemplate};
use crate::core::{GameOptions, InstanceId, Seat};
use crate::core::state::Game;
use crate::rules::new_game;
use crate::zones::Zone;

/// p1 vs p2, ten 1-cost 1/1 fillers each, three-card opening hands, seed 7.
pub(crate) fn bare_game() -> Game {
    let filler = Arc::new(CardTemplate::creature("filler", "Filler", 1, 1, 1));
    let deck = vec![filler; 10];
    new_game("p1", "p2", &deck, &deck, GameOptions::new().with_seed(7)).unwrap()
}

fn insert(game: &mut Game, seat: Seat, template: &CardTemplate, zone: Zone) -> InstanceId {
    let id = InstanceId::new(&template.id, 1000 + game.zones.total_cards() as u64);
    let owner = game.players[seat.index()].id.clone();
    let card = CardInstance::new(id.clone(), Arc::new(template.clone()), owner);
    game.zones.insert(card, seat, zone).unwrap();
    id
}

/// Place a fresh instance on `seat`'s board.
pub(crate) fn put_on_board(game: &mut Game, seat: Seat, template: &CardTemplate) -> InstanceId {
    insert(game, seat, template, Zone::Board)
}

/// Append a fresh instance to `seat`'s hand and return its hand index.
pub(crate) fn put_in_hand(game: &mut Game, seat: Seat, template: &CardTemplate) -> usize {
    insert(game, seat, template, Zone::Hand);
    game.hand(seat).len() - 1
}
