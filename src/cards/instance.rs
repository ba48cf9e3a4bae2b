//! Card instances - runtime card state.
//!
//! `CardInstance` represents one copy of a template inside one game. It
//! tracks buffs, damage and readiness flags.
//!
//! ## Stat layering
//!
//! The derived stats are always:
//!
//! ```text
//! current_attack = base attack + permanent attack + temporary attack
//! current_health = base health + permanent health + temporary health - damage
//! ```
//!
//! Every mutator recomputes both, so the fields can never drift from the
//! formula. End-of-turn cleanup zeroes the temporary layer and damage.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::definition::CardTemplate;
use crate::core::entity::{InstanceId, PlayerId};

/// A card instance in a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance {
    instance_id: InstanceId,
    template: Arc<CardTemplate>,

    /// Who started with this card.
    pub owner: PlayerId,

    /// Who currently controls it.
    pub controller: PlayerId,

    perm_attack_buff: i32,
    perm_health_buff: i32,
    temp_attack_buff: i32,
    temp_health_buff: i32,
    damage: i32,

    current_attack: i32,
    current_health: i32,

    /// Cannot act until its controller's next turn begins.
    pub summoning_sick: bool,

    /// Tapped for this turn.
    pub exhausted: bool,
}

impl CardInstance {
    /// Create an instance owned and controlled by `owner`.
    #[must_use]
    pub fn new(instance_id: InstanceId, template: Arc<CardTemplate>, owner: PlayerId) -> Self {
        let current_attack = template.attack;
        let current_health = template.health;
        Self {
            instance_id,
            template,
            controller: owner.clone(),
            owner,
            perm_attack_buff: 0,
            perm_health_buff: 0,
            temp_attack_buff: 0,
            temp_health_buff: 0,
            damage: 0,
            current_attack,
            current_health,
            summoning_sick: false,
            exhausted: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> &InstanceId {
        &self.instance_id
    }

    #[must_use]
    pub fn template(&self) -> &CardTemplate {
        &self.template
    }

    /// Shared handle to the template.
    #[must_use]
    pub fn template_arc(&self) -> &Arc<CardTemplate> {
        &self.template
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.template.name
    }

    #[must_use]
    pub fn current_attack(&self) -> i32 {
        self.current_attack
    }

    #[must_use]
    pub fn current_health(&self) -> i32 {
        self.current_health
    }

    #[must_use]
    pub fn damage(&self) -> i32 {
        self.damage
    }

    /// Permanent (attack, health) buffs.
    #[must_use]
    pub fn permanent_buff(&self) -> (i32, i32) {
        (self.perm_attack_buff, self.perm_health_buff)
    }

    /// Temporary (attack, health) buffs.
    #[must_use]
    pub fn temporary_buff(&self) -> (i32, i32) {
        (self.temp_attack_buff, self.temp_health_buff)
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.current_health <= 0
    }

    /// Add to the damage counter.
    pub fn add_damage(&mut self, amount: i32) {
        self.damage = self.damage.saturating_add(amount);
        self.recompute();
    }

    pub fn add_permanent_buff(&mut self, attack: i32, health: i32) {
        self.perm_attack_buff = self.perm_attack_buff.saturating_add(attack);
        self.perm_health_buff = self.perm_health_buff.saturating_add(health);
        self.recompute();
    }

    pub fn add_temporary_buff(&mut self, attack: i32, health: i32) {
        self.temp_attack_buff = self.temp_attack_buff.saturating_add(attack);
        self.temp_health_buff = self.temp_health_buff.saturating_add(health);
        self.recompute();
    }

    /// True if end-of-turn cleanup has anything to reset.
    #[must_use]
    pub fn needs_cleanup(&self) -> bool {
        self.damage != 0 || self.temp_attack_buff != 0 || self.temp_health_buff != 0
    }

    /// Expire damage and temporary buffs.
    ///
    /// Returns `false` (and changes nothing) if there was nothing to expire.
    pub fn clear_end_of_turn(&mut self) -> bool {
        if !self.needs_cleanup() {
            return false;
        }
        self.damage = 0;
        self.temp_attack_buff = 0;
        self.temp_health_buff = 0;
        self.recompute();
        true
    }

    /// Clear exhaustion and summoning sickness.
    pub fn ready(&mut self) {
        self.exhausted = false;
        self.summoning_sick = false;
    }

    fn recompute(&mut self) {
        let base = &self.template;
        self.current_attack = base
            .attack
            .saturating_add(self.perm_attack_buff)
            .saturating_add(self.temp_attack_buff);
        self.current_health = base
            .health
            .saturating_add(self.perm_health_buff)
            .saturating_add(self.temp_health_buff)
            .saturating_sub(self.damage);
    }
}
