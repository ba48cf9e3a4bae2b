//! Committing a card play.

use std::sync::Arc;

use crate::core::action::Action;
use crate::core::entity::PlayerId;
use crate::core::state::Game;
use crate::effects::TargetRef;
use crate::error::{GameError, Result};
use crate::events::EventKind;
use crate::zones::Zone;

impl Game {
    /// Validate and commit a play.
    ///
    /// On success: energy is spent, the card leaves the hand (later cards
    /// shift down by one) for the board (creature) or graveyard (spell),
    /// spell effects resolve in order, and state-based effects run.
    ///
    /// Effects resolve best-effort: a handler that fails is logged and the
    /// rest still resolve. Nothing is rolled back and the play still
    /// succeeds. Ending the game is not an error either.
    pub fn play_card(
        &mut self,
        player: &PlayerId,
        hand_index: usize,
        targets: &[Option<TargetRef>],
    ) -> Result<()> {
        let (seat, id) = self.check_play(player, hand_index, targets)?;
        let template = match self.zones.get(&id) {
            Some(card) => Arc::clone(card.template_arc()),
            None => return Err(GameError::CardNotFound(id)),
        };

        self.players[seat.index()].spend_energy(template.cost);

        let destination = if template.is_creature() {
            Zone::Board
        } else {
            Zone::Graveyard
        };
        self.zones.move_card(&id, seat, destination)?;
        if template.is_creature() {
            if let Some(card) = self.zones.get_mut(&id) {
                card.summoning_sick = true;
            }
        }
        self.log_event(Some(seat), EventKind::Play, format!("played {} ({id})", template.name));

        if template.is_spell() {
            for (i, effect) in template.effects.iter().enumerate() {
                let supplied = targets.get(i).and_then(Option::as_ref);
                let target = self.resolve_target(effect.target, supplied, seat);
                if let Err(err) = self.resolve_effect(effect, target.as_ref(), seat) {
                    let message = format!(
                        "{} effect {i} ({}) failed: {err}",
                        template.name,
                        effect.kind.as_str()
                    );
                    self.log_error(Some(seat), message);
                }
            }
        }

        self.check_state_based_effects();
        self.history.push_back(Action::PlayCard {
            player: player.clone(),
            hand_index,
            targets: targets.to_vec(),
        });
        Ok(())
    }
}
