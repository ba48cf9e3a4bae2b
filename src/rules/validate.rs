//! Play validation.
//!
//! `can_play_card` and `play_card` run the same pipeline; the first is the
//! dry run. Checks, in order:
//!
//! 1. the caller is the active player
//! 2. the hand index is in range
//! 3. the player has enough energy
//! 4. spells: at least one effect, one target slot per effect, each
//!    non-player target valid for its effect's kind
//! 5. creatures: the board has room

use crate::core::entity::{InstanceId, PlayerId, Seat};
use crate::core::state::Game;
use crate::effects::TargetRef;
use crate::error::{GameError, Result};
use crate::zones::Zone;

impl Game {
    /// Check whether a play would be accepted. Never mutates the game.
    pub fn can_play_card(
        &self,
        player: &PlayerId,
        hand_index: usize,
        targets: &[Option<TargetRef>],
    ) -> Result<()> {
        self.check_play(player, hand_index, targets).map(|_| ())
    }

    /// Hand indices that pass every check except targeting.
    #[must_use]
    pub fn playable_hand_indices(&self, player: &PlayerId) -> Vec<usize> {
        let Ok(seat) = self.check_turn(player) else {
            return Vec::new();
        };
        self.zones
            .cards(seat, Zone::Hand)
            .iter()
            .enumerate()
            .filter(|(_, id)| self.check_affordable(seat, id).is_ok())
            .map(|(i, _)| i)
            .collect()
    }

    /// Full pipeline. Returns the caster's seat and the card to play.
    pub(crate) fn check_play(
        &self,
        player: &PlayerId,
        hand_index: usize,
        targets: &[Option<TargetRef>],
    ) -> Result<(Seat, InstanceId)> {
        let seat = self.check_turn(player)?;
        let id = self
            .zones
            .cards(seat, Zone::Hand)
            .get(hand_index)
            .ok_or(GameError::InvalidHandIndex)?;
        self.check_affordable(seat, id)?;

        let template = self
            .zones
            .get(id)
            .ok_or_else(|| GameError::CardNotFound(id.clone()))?
            .template();

        if template.is_spell() {
            if template.effects.is_empty() {
                return Err(GameError::SpellWithoutEffects);
            }
            if targets.len() != template.effects.len() {
                return Err(GameError::TargetCountMismatch {
                    expected: template.effects.len(),
                    got: targets.len(),
                });
            }
            for (i, (effect, target)) in template.effects.iter().zip(targets).enumerate() {
                if effect.target.is_auto_player() {
                    continue;
                }
                self.validate_target(effect.target, target.as_ref(), seat)
                    .map_err(|e| GameError::for_effect(i, e))?;
            }
        }

        Ok((seat, id.clone()))
    }

    fn check_turn(&self, player: &PlayerId) -> Result<Seat> {
        match self.current_player() {
            Some(p) if &p.id == player => Ok(self.active),
            _ => Err(GameError::NotYourTurn),
        }
    }

    /// Energy and board-size checks for one card in hand.
    fn check_affordable(&self, seat: Seat, id: &InstanceId) -> Result<()> {
        let card = self
            .zones
            .get(id)
            .ok_or_else(|| GameError::CardNotFound(id.clone()))?;
        let player = self.player(seat).ok_or(GameError::PlayerNotFound)?;

        if player.current_energy < card.template().cost {
            return Err(GameError::NotEnoughEnergy);
        }
        if card.template().is_creature()
            && self.options.board_is_full(self.zones.zone_size(seat, Zone::Board))
        {
            return Err(GameError::BoardFull);
        }
        Ok(())
    }
}
