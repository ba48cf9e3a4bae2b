//! Turn controller.
//!
//! ## Turn structure
//!
//! `start_turn`: advance the counter, ramp and refill energy, draw (unless
//! this is the first player's first turn and `first_player_draws` is off),
//! ready the active player's creatures.
//!
//! `end_turn`: log, expire damage and temporary buffs on every board, pass
//! the turn to the other seat.
//!
//! Both guard against a corrupt active seat by logging an error and doing
//! nothing.

use crate::core::action::Action;
use crate::core::entity::Seat;
use crate::core::state::Game;
use crate::events::EventKind;
use crate::zones::Zone;

impl Game {
    /// Begin the active player's turn.
    pub fn start_turn(&mut self) {
        let Some(seat) = self.checked_active("start_turn") else {
            return;
        };

        self.turn += 1;

        let ceiling = self.options.max_energy;
        self.players[seat.index()].ramp_energy(ceiling);

        let skip_draw = self.turn == 1 && seat == Seat::FIRST && !self.options.first_player_draws;
        if skip_draw {
            self.log_event(Some(seat), EventKind::Draw, "no card drawn (first turn skip)");
        } else {
            self.draw(seat, 1);
        }

        self.ready_creatures(seat);

        let player = &self.players[seat.index()];
        let message = format!(
            "start turn: cap={} energy={}",
            player.max_energy, player.current_energy
        );
        self.log_event(Some(seat), EventKind::Start, message);
        self.history.push_back(Action::StartTurn);
    }

    /// End the active player's turn and pass to the other seat.
    ///
    /// Does not advance the turn counter.
    pub fn end_turn(&mut self) {
        let Some(seat) = self.checked_active("end_turn") else {
            return;
        };

        self.log_event(Some(seat), EventKind::End, "end turn");
        self.cleanup();
        self.active = seat.other();
        self.history.push_back(Action::EndTurn);
    }

    /// Move up to `n` cards from the top of `seat`'s deck to their hand.
    ///
    /// Returns how many were drawn. Always logs, even when nothing was.
    pub fn draw(&mut self, seat: Seat, n: usize) -> usize {
        let mut drawn = 0;
        while drawn < n && self.zones.draw(seat).is_some() {
            drawn += 1;
        }
        self.log_event(Some(seat), EventKind::Draw, format!("drew {drawn}"));
        drawn
    }

    /// Expire damage and temporary buffs on every board.
    ///
    /// Creatures with nothing to expire are left alone and not logged.
    fn cleanup(&mut self) {
        for seat in Seat::BOTH {
            let board = self.zones.cards(seat, Zone::Board).to_vec();
            for id in board {
                let Some(card) = self.zones.get_mut(&id) else {
                    continue;
                };
                if !card.clear_end_of_turn() {
                    continue;
                }
                let message = format!(
                    "{} ({}) refreshed to {}/{}",
                    card.name(),
                    id,
                    card.current_attack(),
                    card.current_health()
                );
                self.log_event(Some(seat), EventKind::Refresh, message);
            }
        }
    }

    /// Clear exhaustion and summoning sickness on `seat`'s board.
    fn ready_creatures(&mut self, seat: Seat) {
        let board = self.zones.cards(seat, Zone::Board).to_vec();
        for id in &board {
            if let Some(card) = self.zones.get_mut(id) {
                if card.template().is_creature() {
                    card.ready();
                }
            }
        }
    }

    fn checked_active(&mut self, operation: &str) -> Option<Seat> {
        if self.active.is_valid() {
            return Some(self.active);
        }
        let message = format!("invalid active index in {operation}: active={}", self.active.0);
        self.log_error(None, message);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardTemplate;
    use crate::testing::{bare_game, put_on_board};

    #[test]
    fn test_first_turn_skips_draw() {
        let mut game = bare_game();
        let before = game.hand(Seat::FIRST).len();
        game.start_turn();

        assert_eq!(game.turn(), 1);
        assert_eq!(game.hand(Seat::FIRST).len(), before);
        let skip: Vec<_> = game.events().of_kind(EventKind::Draw).collect();
        assert_eq!(skip.last().unwrap().message, "no card drawn (first turn skip)");
        assert_eq!(game.events().last().unwrap().message, "start turn: cap=1 energy=1");
    }

    #[test]
    fn test_first_player_draws_option() {
        let mut game = bare_game();
        game.options.first_player_draws = true;
        let before = game.hand(Seat::FIRST).len();
        game.start_turn();
        assert_eq!(game.hand(Seat::FIRST).len(), before + 1);
    }

    #[test]
    fn test_second_player_draws() {
        let mut game = bare_game();
        game.start_turn();
        game.end_turn();
        let before = game.hand(Seat::SECOND).len();
        game.start_turn();

        assert_eq!(game.turn(), 2);
        assert_eq!(game.active_seat(), Seat::SECOND);
        assert_eq!(game.hand(Seat::SECOND).len(), before + 1);
    }

    #[test]
    fn test_draw_stops_at_empty_deck() {
        let mut game = bare_game();
        let deck = game.zone(Seat::FIRST, Zone::Deck).len();
        let drawn = game.draw(Seat::FIRST, deck + 5);

        assert_eq!(drawn, deck);
        assert_eq!(game.events().last().unwrap().message, format!("drew {deck}"));
        assert_eq!(game.draw(Seat::FIRST, 1), 0);
        assert_eq!(game.events().last().unwrap().message, "drew 0");
    }

    #[test]
    fn test_energy_refills_each_turn() {
        let mut game = bare_game();
        game.start_turn();
        game.players[0].spend_energy(1);
        game.end_turn();
        game.start_turn();
        game.end_turn();
        game.start_turn();

        let p1 = game.player(Seat::FIRST).unwrap();
        assert_eq!(p1.max_energy, 2);
        assert_eq!(p1.current_energy, 2);
    }

    #[test]
    fn test_end_turn_flips_without_advancing() {
        let mut game = bare_game();
        game.start_turn();
        game.end_turn();
        assert_eq!(game.active_seat(), Seat::SECOND);
        assert_eq!(game.turn(), 1);
        assert_eq!(game.events().of_kind(EventKind::End).count(), 1);
    }

    #[test]
    fn test_start_turn_readies_creatures() {
        let mut game = bare_game();
        let bear = CardTemplate::creature("bear", "Bear", 2, 2, 2);
        let id = put_on_board(&mut game, Seat::FIRST, &bear);
        let theirs = put_on_board(&mut game, Seat::SECOND, &bear);
        for card_id in [&id, &theirs] {
            let card = game.zones.get_mut(card_id).unwrap();
            card.summoning_sick = true;
            card.exhausted = true;
        }

        game.start_turn();
        let card = game.card(&id).unwrap();
        assert!(!card.summoning_sick);
        assert!(!card.exhausted);
        // Only the active player's creatures ready.
        assert!(game.card(&theirs).unwrap().summoning_sick);
    }

    #[test]
    fn test_cleanup_only_logs_touched_creatures() {
        let mut game = bare_game();
        let bear = CardTemplate::creature("bear", "Bear", 2, 2, 4);
        let hurt = put_on_board(&mut game, Seat::SECOND, &bear);
        let buffed = put_on_board(&mut game, Seat::FIRST, &bear);
        let untouched = put_on_board(&mut game, Seat::FIRST, &bear);

        game.zones.get_mut(&hurt).unwrap().add_damage(3);
        {
            let card = game.zones.get_mut(&buffed).unwrap();
            card.add_permanent_buff(1, 1);
            card.add_temporary_buff(2, 2);
        }
        game.zones.get_mut(&untouched).unwrap().add_permanent_buff(1, 0);

        game.start_turn();
        let before = game.events().len();
        game.end_turn();

        let new: Vec<_> = game.events().since(before).collect();
        // end, two refreshes
        assert_eq!(new.len(), 3);
        assert_eq!(new[0].kind, EventKind::End);
        assert_eq!(new.iter().filter(|e| e.kind == EventKind::Refresh).count(), 2);
        assert!(new.iter().all(|e| !e.message.contains(untouched.as_str())));

        assert_eq!(game.card(&hurt).unwrap().current_health(), 4);
        let card = game.card(&buffed).unwrap();
        assert_eq!(card.current_attack(), 3);
        assert_eq!(card.current_health(), 5);
        assert_eq!(game.card(&untouched).unwrap().current_attack(), 3);
    }

    #[test]
    fn test_corrupt_active_is_noop() {
        let mut game = bare_game();
        game.active = Seat(4);
        let before = game.events().len();

        game.start_turn();
        game.end_turn();

        assert_eq!(game.turn(), 0);
        assert_eq!(game.active_seat(), Seat(4));
        let new: Vec<_> = game.events().since(before).collect();
        assert_eq!(new.len(), 2);
        assert!(new.iter().all(|e| e.kind == EventKind::Error && e.is_system()));
        assert!(game.history().is_empty());
    }
}
