//! Effect resolution - applying one declared effect to the game.
//!
//! Resolution assumes the play already passed validation. A handler that
//! still cannot find its target returns an integrity error; the play
//! pipeline logs it and moves on to the next effect.

use crate::core::entity::{InstanceId, Seat};
use crate::core::state::Game;
use crate::error::{GameError, Result};
use crate::events::EventKind;

use super::effect::{EffectKind, EffectSpec};
use super::targeting::TargetRef;

impl Game {
    /// Resolve one effect cast by `caster` against an already resolved target.
    pub(crate) fn resolve_effect(
        &mut self,
        effect: &EffectSpec,
        target: Option<&TargetRef>,
        caster: Seat,
    ) -> Result<()> {
        match effect.kind {
            EffectKind::Damage => self.apply_damage(effect.amount, target, caster),
            EffectKind::Heal => self.apply_heal(effect.amount, target, caster),
            EffectKind::DrawCards => self.apply_draw(effect.amount, target, caster),
            EffectKind::BuffStatsPerm => {
                self.apply_buff(effect.attack_buff, effect.health_buff, true, target, caster)
            }
            EffectKind::BuffStatsTemp => {
                self.apply_buff(effect.attack_buff, effect.health_buff, false, target, caster)
            }
        }
    }

    fn apply_damage(&mut self, amount: i32, target: Option<&TargetRef>, caster: Seat) -> Result<()> {
        match target {
            Some(TargetRef::Player(id)) => {
                let seat = self.seat_of(id).ok_or(GameError::PlayerNotFound)?;
                let life = &mut self.players[seat.index()].life;
                *life = life.saturating_sub(amount);
                self.log_event(Some(caster), EventKind::Damage, format!("{amount} damage dealt to {id}"));
                Ok(())
            }
            Some(TargetRef::Creature(id)) => {
                let card = self
                    .zones
                    .board_card_mut(id)
                    .ok_or_else(|| GameError::CardNotFound(id.clone()))?;
                card.add_damage(amount);
                let dead = card.is_dead();
                let name = card.name().to_string();

                self.log_event(Some(caster), EventKind::Damage, format!("{amount} damage dealt to {name}"));
                if dead {
                    self.move_to_graveyard(id, &format!("destroyed by {amount} damage"))?;
                }
                Ok(())
            }
            None => Err(GameError::MissingTarget),
        }
    }

    fn apply_heal(&mut self, amount: i32, target: Option<&TargetRef>, caster: Seat) -> Result<()> {
        let seat = self.target_player(target)?;
        let life = &mut self.players[seat.index()].life;
        *life = life.saturating_add(amount);
        let id = &self.players[seat.index()].id;
        let message = format!("{amount} healing applied to {id}");
        self.log_event(Some(caster), EventKind::Healing, message);
        Ok(())
    }

    fn apply_draw(&mut self, amount: i32, target: Option<&TargetRef>, caster: Seat) -> Result<()> {
        let seat = self.target_player(target)?;
        let drawn = self.draw(seat, usize::try_from(amount).unwrap_or(0));
        let id = &self.players[seat.index()].id;
        let message = format!("{id} drew {drawn} cards");
        self.log_event(Some(caster), EventKind::DrawCards, message);
        Ok(())
    }

    fn apply_buff(
        &mut self,
        attack: i32,
        health: i32,
        permanent: bool,
        target: Option<&TargetRef>,
        caster: Seat,
    ) -> Result<()> {
        let id = self.target_creature(target)?;
        let card = self
            .zones
            .board_card_mut(&id)
            .ok_or(GameError::InvalidTarget)?;

        let (kind, label) = if permanent {
            card.add_permanent_buff(attack, health);
            (EventKind::BuffCreaturePerm, "permanent")
        } else {
            card.add_temporary_buff(attack, health);
            (EventKind::BuffCreatureTemp, "temporary")
        };
        self.log_event(
            Some(caster),
            kind,
            format!("+{attack}/+{health} {label} buff applied to {id}"),
        );
        Ok(())
    }

    /// Seat of a player target. Anything else is `PlayerNotFound`.
    fn target_player(&self, target: Option<&TargetRef>) -> Result<Seat> {
        target
            .and_then(TargetRef::as_player)
            .and_then(|id| self.seat_of(id))
            .ok_or(GameError::PlayerNotFound)
    }

    /// Instance id of a creature target. Anything else is `InvalidTarget`.
    fn target_creature(&self, target: Option<&TargetRef>) -> Result<InstanceId> {
        target
            .and_then(TargetRef::as_creature)
            .cloned()
            .ok_or(GameError::InvalidTarget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardTemplate;
    use crate::effects::TargetKind;
    use crate::error::ErrorKind;
    use crate::testing::{bare_game, put_on_board};
    use crate::zones::Zone;

    fn spec(kind: EffectKind) -> EffectSpec {
        EffectSpec::new(kind, TargetKind::AnyCreature)
    }

    #[test]
    fn test_damage_player() {
        let mut game = bare_game();
        let target = TargetRef::player("p2");
        game.resolve_effect(&spec(EffectKind::Damage).with_amount(4), Some(&target), Seat::FIRST)
            .unwrap();

        assert_eq!(game.player(Seat::SECOND).unwrap().life, 16);
        let last = game.events().last().unwrap();
        assert_eq!(last.kind, EventKind::Damage);
        assert_eq!(last.message, "4 damage dealt to p2");
    }

    #[test]
    fn test_lethal_damage_moves_creature() {
        let mut game = bare_game();
        let bear = CardTemplate::creature("bear", "Bear", 2, 2, 2);
        let id = put_on_board(&mut game, Seat::SECOND, &bear);

        let target = TargetRef::creature(id.clone());
        game.resolve_effect(&spec(EffectKind::Damage).with_amount(3), Some(&target), Seat::FIRST)
            .unwrap();

        assert_eq!(game.locate(&id), Some((Seat::SECOND, Zone::Graveyard)));
        assert_eq!(game.card(&id).unwrap().current_health(), -1);
        let last = game.events().last().unwrap();
        assert_eq!(last.kind, EventKind::Graveyard);
        assert_eq!(last.message, "Bear moved to graveyard (destroyed by 3 damage)");
    }

    #[test]
    fn test_non_lethal_damage_stays_on_board() {
        let mut game = bare_game();
        let bear = CardTemplate::creature("bear", "Bear", 2, 2, 3);
        let id = put_on_board(&mut game, Seat::SECOND, &bear);

        let target = TargetRef::creature(id.clone());
        game.resolve_effect(&spec(EffectKind::Damage).with_amount(2), Some(&target), Seat::FIRST)
            .unwrap();
        assert_eq!(game.locate(&id), Some((Seat::SECOND, Zone::Board)));
        assert_eq!(game.card(&id).unwrap().current_health(), 1);
    }

    #[test]
    fn test_heal_requires_player() {
        let mut game = bare_game();
        let target = TargetRef::player("p1");
        game.resolve_effect(&spec(EffectKind::Heal).with_amount(5), Some(&target), Seat::FIRST)
            .unwrap();
        assert_eq!(game.player(Seat::FIRST).unwrap().life, 25);

        let bear = CardTemplate::creature("bear", "Bear", 2, 2, 2);
        let id = put_on_board(&mut game, Seat::FIRST, &bear);
        let err = game
            .resolve_effect(&spec(EffectKind::Heal).with_amount(5), Some(&TargetRef::creature(id)), Seat::FIRST)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PlayerNotFound);
    }

    #[test]
    fn test_draw_cards() {
        let mut game = bare_game();
        let before = game.hand(Seat::FIRST).len();
        let target = TargetRef::player("p1");
        game.resolve_effect(&spec(EffectKind::DrawCards).with_amount(2), Some(&target), Seat::FIRST)
            .unwrap();

        assert_eq!(game.hand(Seat::FIRST).len(), before + 2);
        assert_eq!(game.events().last().unwrap().message, "p1 drew 2 cards");

        let err = game
            .resolve_effect(&spec(EffectKind::DrawCards).with_amount(1), None, Seat::FIRST)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PlayerNotFound);
    }

    #[test]
    fn test_buffs_layer() {
        let mut game = bare_game();
        let bear = CardTemplate::creature("bear", "Bear", 2, 2, 2);
        let id = put_on_board(&mut game, Seat::FIRST, &bear);
        let target = TargetRef::creature(id.clone());

        game.resolve_effect(&spec(EffectKind::BuffStatsPerm).with_buff(1, 2), Some(&target), Seat::FIRST)
            .unwrap();
        game.resolve_effect(&spec(EffectKind::BuffStatsTemp).with_buff(3, 1), Some(&target), Seat::FIRST)
            .unwrap();

        let card = game.card(&id).unwrap();
        assert_eq!(card.current_attack(), 2 + 1 + 3);
        assert_eq!(card.current_health(), 2 + 2 + 1);

        let last = game.events().last().unwrap();
        assert_eq!(last.kind, EventKind::BuffCreatureTemp);
        assert_eq!(last.message, format!("+3/+1 temporary buff applied to {id}"));
    }

    #[test]
    fn test_buff_on_player_is_invalid() {
        let mut game = bare_game();
        let err = game
            .resolve_effect(
                &spec(EffectKind::BuffStatsPerm).with_buff(1, 1),
                Some(&TargetRef::player("p1")),
                Seat::FIRST,
            )
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidTarget);
    }

    #[test]
    fn test_extreme_amounts_saturate_life() {
        let mut game = bare_game();
        let me = TargetRef::player("p1");
        game.resolve_effect(&spec(EffectKind::Heal).with_amount(i32::MAX), Some(&me), Seat::FIRST)
            .unwrap();
        assert_eq!(game.player(Seat::FIRST).unwrap().life, i32::MAX);

        let them = TargetRef::player("p2");
        game.resolve_effect(&spec(EffectKind::Damage).with_amount(i32::MAX), Some(&them), Seat::FIRST)
            .unwrap();
        game.resolve_effect(&spec(EffectKind::Damage).with_amount(i32::MAX), Some(&them), Seat::FIRST)
            .unwrap();
        assert_eq!(game.player(Seat::SECOND).unwrap().life, i32::MIN);
    }
}
