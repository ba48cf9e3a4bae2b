//! Card templates - static card data.
//!
//! `CardTemplate` holds the immutable properties of a card as supplied by
//! the external catalog. For example, "Fire Bolt" costs 1 and deals 2
//! damage to a creature - these are part of the template.
//!
//! Instance-specific data (damage taken, buffs, zone) is stored separately
//! in `CardInstance`, which references its template through an `Arc`.
//!
//! The serde field names follow the catalog schema:
//! `id, name, type, cost, attack, health, text, effects`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::effects::{EffectKind, EffectSpec, TargetKind};

/// Card type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    Creature,
    Spell,
}

impl CardType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CardType::Creature => "creature",
            CardType::Spell => "spell",
        }
    }
}

/// Effect list storage. Most cards carry one or two effects.
pub type EffectList = SmallVec<[EffectSpec; 2]>;

/// Static card template.
///
/// ## Example
///
/// ```
/// use tcg_engine::cards::CardTemplate;
/// use tcg_engine::effects::TargetKind;
///
/// let bolt = CardTemplate::spell("fire_bolt", "Fire Bolt", 1)
///     .with_damage(2, TargetKind::AnyCreature);
/// let bear = CardTemplate::creature("bear", "Bear", 2, 2, 2);
///
/// assert_eq!(bolt.effects.len(), 1);
/// assert!(bear.is_creature());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTemplate {
    /// Unique identifier within the catalog.
    pub id: String,

    /// Card name (for display/logging).
    pub name: String,

    /// Creature or spell.
    #[serde(rename = "type")]
    pub card_type: CardType,

    /// Energy cost.
    pub cost: i32,

    /// Base attack (creatures only).
    #[serde(default)]
    pub attack: i32,

    /// Base health (creatures only).
    #[serde(default)]
    pub health: i32,

    /// Rules text.
    #[serde(default)]
    pub text: String,

    /// Ordered effects. Spells need at least one.
    #[serde(default)]
    pub effects: EffectList,
}

impl CardTemplate {
    /// Create a creature template.
    #[must_use]
    pub fn creature(
        id: impl Into<String>,
        name: impl Into<String>,
        cost: i32,
        attack: i32,
        health: i32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            card_type: CardType::Creature,
            cost,
            attack,
            health,
            text: String::new(),
            effects: EffectList::new(),
        }
    }

    /// Create a spell template with no effects yet.
    #[must_use]
    pub fn spell(id: impl Into<String>, name: impl Into<String>, cost: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            card_type: CardType::Spell,
            cost,
            attack: 0,
            health: 0,
            text: String::new(),
            effects: EffectList::new(),
        }
    }

    /// Set the rules text (builder pattern).
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Append an effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: EffectSpec) -> Self {
        self.effects.push(effect);
        self
    }

    #[must_use]
    pub fn with_damage(self, amount: i32, target: TargetKind) -> Self {
        self.with_effect(EffectSpec::new(EffectKind::Damage, target).with_amount(amount))
    }

    #[must_use]
    pub fn with_heal(self, amount: i32, target: TargetKind) -> Self {
        self.with_effect(EffectSpec::new(EffectKind::Heal, target).with_amount(amount))
    }

    #[must_use]
    pub fn with_draw(self, amount: i32, target: TargetKind) -> Self {
        self.with_effect(EffectSpec::new(EffectKind::DrawCards, target).with_amount(amount))
    }

    #[must_use]
    pub fn with_permanent_buff(self, attack: i32, health: i32, target: TargetKind) -> Self {
        self.with_effect(EffectSpec::new(EffectKind::BuffStatsPerm, target).with_buff(attack, health))
    }

    #[must_use]
    pub fn with_temporary_buff(self, attack: i32, health: i32, target: TargetKind) -> Self {
        self.with_effect(EffectSpec::new(EffectKind::BuffStatsTemp, target).with_buff(attack, health))
    }

    #[must_use]
    pub fn is_creature(&self) -> bool {
        self.card_type == CardType::Creature
    }

    #[must_use]
    pub fn is_spell(&self) -> bool {
        self.card_type == CardType::Spell
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creature_builder() {
        let card = CardTemplate::creature("ogre", "Ogre", 3, 3, 4).with_text("Big.");
        assert_eq!(card.card_type, CardType::Creature);
        assert_eq!(card.cost, 3);
        assert_eq!(card.attack, 3);
        assert_eq!(card.health, 4);
        assert_eq!(card.text, "Big.");
        assert!(card.effects.is_empty());
    }

    #[test]
    fn test_spell_effects_in_order() {
        let card = CardTemplate::spell("combo", "Combo", 2)
            .with_damage(1, TargetKind::EnemyPlayer)
            .with_draw(1, TargetKind::SelfPlayer);

        assert!(card.is_spell());
        assert_eq!(card.effects[0].kind, EffectKind::Damage);
        assert_eq!(card.effects[1].kind, EffectKind::DrawCards);
    }

    #[test]
    fn test_deserialize_catalog_entry() {
        let json = r#"{
            "id": "s_firebolt",
            "name": "Fire Bolt",
            "type": "spell",
            "cost": 1,
            "text": "Deal 2 damage to any creature.",
            "effects": [{"kind": "damage", "amount": 2, "target": "any_creature"}]
        }"#;

        let card: CardTemplate = serde_json::from_str(json).unwrap();
        assert_eq!(card.card_type, CardType::Spell);
        assert_eq!(card.attack, 0);
        assert_eq!(card.effects.len(), 1);
        assert_eq!(card.effects[0].amount, 2);
        assert_eq!(card.effects[0].target, TargetKind::AnyCreature);
    }

    #[test]
    fn test_deserialize_creature_without_effects() {
        let json = r#"{"id": "c_bear", "name": "Bear", "type": "creature", "cost": 2, "attack": 2, "health": 3}"#;
        let card: CardTemplate = serde_json::from_str(json).unwrap();
        assert!(card.is_creature());
        assert_eq!(card.health, 3);
        assert!(card.effects.is_empty());
    }
}
