//! Card registry for template lookup.
//!
//! The `CardRegistry` is the hand-off point between whatever loads the card
//! catalog and the engine. It checks the catalog rules the engine relies on
//! (unique ids, non-negative costs, spells carry at least one effect) and
//! builds decks of shared template handles from id lists.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::definition::CardTemplate;
use crate::error::{GameError, Result};

/// Registry of card templates.
///
/// ## Example
///
/// ```
/// use tcg_engine::cards::{CardRegistry, CardTemplate};
/// use tcg_engine::effects::TargetKind;
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardTemplate::creature("bear", "Bear", 2, 2, 2)).unwrap();
/// registry
///     .register(CardTemplate::spell("bolt", "Bolt", 1).with_damage(3, TargetKind::AnyCreature))
///     .unwrap();
///
/// let deck = registry.build_deck(["bear", "bear", "bolt"]).unwrap();
/// assert_eq!(deck.len(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<String, Arc<CardTemplate>>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a list of templates.
    pub fn from_templates(templates: impl IntoIterator<Item = CardTemplate>) -> Result<Self> {
        let mut registry = Self::new();
        for template in templates {
            registry.register(template)?;
        }
        Ok(registry)
    }

    /// Register a template.
    ///
    /// Fails on duplicate ids, negative costs, and spells without effects.
    pub fn register(&mut self, card: CardTemplate) -> Result<Arc<CardTemplate>> {
        validate_template(&card)?;
        if self.cards.contains_key(&card.id) {
            return Err(invalid(&card.id, "already registered"));
        }
        let card = Arc::new(card);
        self.cards.insert(card.id.clone(), Arc::clone(&card));
        Ok(card)
    }

    /// Get a template by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Arc<CardTemplate>> {
        self.cards.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.cards.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all templates (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &Arc<CardTemplate>> {
        self.cards.values()
    }

    /// Resolve a list of template ids into a deck.
    pub fn build_deck<'a>(
        &self,
        ids: impl IntoIterator<Item = &'a str>,
    ) -> Result<Vec<Arc<CardTemplate>>> {
        ids.into_iter()
            .map(|id| {
                self.get(id)
                    .cloned()
                    .ok_or_else(|| invalid(id, "not in registry"))
            })
            .collect()
    }
}

fn validate_template(card: &CardTemplate) -> Result<()> {
    if card.id.is_empty() {
        return Err(invalid(&card.id, "empty id"));
    }
    if card.cost < 0 {
        return Err(invalid(&card.id, "negative cost"));
    }
    if card.is_spell() && card.effects.is_empty() {
        return Err(invalid(&card.id, "spells must declare at least one effect"));
    }
    Ok(())
}

fn invalid(id: &str, reason: &str) -> GameError {
    GameError::InvalidCard {
        id: id.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::TargetKind;
    use crate::error::ErrorKind;

    #[test]
    fn test_register_and_get() {
        let mut registry = CardRegistry::new();
        registry
            .register(CardTemplate::creature("bear", "Bear", 2, 2, 2))
            .unwrap();

        assert_eq!(registry.get("bear").unwrap().name, "Bear");
        assert!(registry.get("missing").is_none());
        assert!(registry.contains("bear"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut registry = CardRegistry::new();
        registry
            .register(CardTemplate::creature("bear", "Bear", 2, 2, 2))
            .unwrap();
        let err = registry
            .register(CardTemplate::creature("bear", "Other Bear", 1, 1, 1))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCard);
    }

    #[test]
    fn test_spell_without_effects_rejected() {
        let mut registry = CardRegistry::new();
        let err = registry
            .register(CardTemplate::spell("dud", "Dud", 0))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCard);
    }

    #[test]
    fn test_negative_cost_rejected() {
        let mut registry = CardRegistry::new();
        assert!(registry
            .register(CardTemplate::creature("cheat", "Cheat", -1, 1, 1))
            .is_err());
    }

    #[test]
    fn test_build_deck_shares_templates() {
        let registry = CardRegistry::from_templates([
            CardTemplate::creature("bear", "Bear", 2, 2, 2),
            CardTemplate::spell("bolt", "Bolt", 1).with_damage(3, TargetKind::AnyCreature),
        ])
        .unwrap();

        let deck = registry.build_deck(["bear", "bolt", "bear"]).unwrap();
        assert_eq!(deck.len(), 3);
        assert!(Arc::ptr_eq(&deck[0], &deck[2]));

        assert!(registry.build_deck(["bear", "nope"]).is_err());
    }

    #[test]
    fn test_load_from_json_catalog() {
        let json = r#"[
            {"id": "c_bear", "name": "Bear", "type": "creature", "cost": 2, "attack": 2, "health": 2},
            {"id": "s_mend", "name": "Mend", "type": "spell", "cost": 1,
             "effects": [{"kind": "heal", "amount": 3, "target": "self_player"}]}
        ]"#;
        let templates: Vec<CardTemplate> = serde_json::from_str(json).unwrap();
        let registry = CardRegistry::from_templates(templates).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.iter().count(), 2);
    }
}
