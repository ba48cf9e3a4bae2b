//! Zone manager for card locations and movement.
//!
//! The `ZoneManager` is the only code that moves a card between zones. It
//! keeps three structures in step:
//! - an arena of card instances keyed by `InstanceId` (ordered, so
//!   iteration is deterministic)
//! - per-player ordered zone lists holding only `InstanceId`s
//! - a location index, instance -> (seat, zone)
//!
//! Because zones never hold the instances themselves, a reference into one
//! zone cannot be invalidated by another zone growing or shrinking.

use im::OrdMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::CardInstance;
use crate::core::entity::{InstanceId, Seat};
use crate::core::rng::{self, RandomSource};
use crate::error::{GameError, Result};

/// The four zones each player has.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    /// Draw pile. The last element is the top.
    Deck,
    Hand,
    Board,
    Graveyard,
}

impl Zone {
    pub const ALL: [Zone; 4] = [Zone::Deck, Zone::Hand, Zone::Board, Zone::Graveyard];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Zone::Deck => "deck",
            Zone::Hand => "hand",
            Zone::Board => "board",
            Zone::Graveyard => "graveyard",
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered zone contents for one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerZones {
    pub deck: Vec<InstanceId>,
    pub hand: Vec<InstanceId>,
    pub board: Vec<InstanceId>,
    pub graveyard: Vec<InstanceId>,
}

impl PlayerZones {
    #[must_use]
    pub fn get(&self, zone: Zone) -> &[InstanceId] {
        match zone {
            Zone::Deck => &self.deck,
            Zone::Hand => &self.hand,
            Zone::Board => &self.board,
            Zone::Graveyard => &self.graveyard,
        }
    }

    fn get_mut(&mut self, zone: Zone) -> &mut Vec<InstanceId> {
        match zone {
            Zone::Deck => &mut self.deck,
            Zone::Hand => &mut self.hand,
            Zone::Board => &mut self.board,
            Zone::Graveyard => &mut self.graveyard,
        }
    }
}

/// Manages card instances and their locations.
///
/// ## Usage
///
/// ```
/// use std::sync::Arc;
/// use tcg_engine::cards::{CardInstance, CardTemplate};
/// use tcg_engine::core::{InstanceId, PlayerId, Seat};
/// use tcg_engine::zones::{Zone, ZoneManager};
///
/// let bear = Arc::new(CardTemplate::creature("bear", "Bear", 2, 2, 2));
/// let id = InstanceId::new("bear", 1);
///
/// let mut zones = ZoneManager::new();
/// zones
///     .insert(CardInstance::new(id.clone(), bear, PlayerId::new("p1")), Seat::FIRST, Zone::Deck)
///     .unwrap();
///
/// assert_eq!(zones.draw(Seat::FIRST), Some(id.clone()));
/// assert_eq!(zones.locate(&id), Some((Seat::FIRST, Zone::Hand)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ZoneManager {
    /// Card arena: instance_id -> instance
    cards: OrdMap<InstanceId, CardInstance>,

    /// Card locations: instance_id -> (seat, zone)
    locations: FxHashMap<InstanceId, (Seat, Zone)>,

    /// Ordered zone lists, indexed by seat.
    zones: [PlayerZones; 2],
}

impl ZoneManager {
    /// Create a new empty zone manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new instance to the end of a zone.
    ///
    /// Fails if the instance ID is already tracked or the seat is invalid.
    pub fn insert(&mut self, card: CardInstance, seat: Seat, zone: Zone) -> Result<()> {
        let id = card.id().clone();
        if self.cards.contains_key(&id) {
            return Err(GameError::InvalidInput(format!("duplicate instance {id}")));
        }
        let zones = self
            .zones
            .get_mut(seat.index())
            .ok_or_else(|| GameError::InvalidInput(format!("invalid {seat}")))?;
        zones.get_mut(zone).push(id.clone());
        self.locations.insert(id.clone(), (seat, zone));
        self.cards.insert(id, card);
        Ok(())
    }

    /// Get a card instance.
    #[must_use]
    pub fn get(&self, id: &InstanceId) -> Option<&CardInstance> {
        self.cards.get(id)
    }

    /// Get a mutable card instance.
    pub fn get_mut(&mut self, id: &InstanceId) -> Option<&mut CardInstance> {
        self.cards.get_mut(id)
    }

    /// Where an instance currently is.
    #[must_use]
    pub fn locate(&self, id: &InstanceId) -> Option<(Seat, Zone)> {
        self.locations.get(id).copied()
    }

    /// A card on either board, if `id` names one.
    #[must_use]
    pub fn board_card(&self, id: &InstanceId) -> Option<&CardInstance> {
        match self.locate(id) {
            Some((_, Zone::Board)) => self.get(id),
            _ => None,
        }
    }

    /// Mutable access to a card on either board.
    pub fn board_card_mut(&mut self, id: &InstanceId) -> Option<&mut CardInstance> {
        match self.locate(id) {
            Some((_, Zone::Board)) => self.get_mut(id),
            _ => None,
        }
    }

    /// Ordered contents of a zone. Empty for an invalid seat.
    #[must_use]
    pub fn cards(&self, seat: Seat, zone: Zone) -> &[InstanceId] {
        self.zones.get(seat.index()).map_or(&[], |z| z.get(zone))
    }

    /// All four zones of a player.
    #[must_use]
    pub fn player_zones(&self, seat: Seat) -> Option<&PlayerZones> {
        self.zones.get(seat.index())
    }

    #[must_use]
    pub fn zone_size(&self, seat: Seat, zone: Zone) -> usize {
        self.cards(seat, zone).len()
    }

    /// Move an instance to the end of another zone.
    ///
    /// Removal from the old zone preserves the order of the remaining cards.
    /// Returns the previous location.
    pub fn move_card(&mut self, id: &InstanceId, to_seat: Seat, to_zone: Zone) -> Result<(Seat, Zone)> {
        let (from_seat, from_zone) = self
            .locate(id)
            .ok_or_else(|| GameError::CardNotFound(id.clone()))?;
        if !to_seat.is_valid() {
            return Err(GameError::InvalidInput(format!("invalid {to_seat}")));
        }

        let from = self.zones[from_seat.index()].get_mut(from_zone);
        let pos = from
            .iter()
            .position(|c| c == id)
            .ok_or_else(|| GameError::CardNotFound(id.clone()))?;
        from.remove(pos);

        self.zones[to_seat.index()].get_mut(to_zone).push(id.clone());
        self.locations.insert(id.clone(), (to_seat, to_zone));

        Ok((from_seat, from_zone))
    }

    /// Move an instance into `owner`'s graveyard.
    ///
    /// Graveyard-to-graveyard moves are rejected.
    pub fn move_to_graveyard(&mut self, id: &InstanceId, owner: Seat) -> Result<(Seat, Zone)> {
        match self.locate(id) {
            None => Err(GameError::CardNotFound(id.clone())),
            Some((_, Zone::Graveyard)) => Err(GameError::AlreadyInGraveyard(id.clone())),
            Some(_) => self.move_card(id, owner, Zone::Graveyard),
        }
    }

    /// Move the top card of a player's deck to the end of their hand.
    pub fn draw(&mut self, seat: Seat) -> Option<InstanceId> {
        let zones = self.zones.get_mut(seat.index())?;
        let id = zones.deck.pop()?;
        zones.hand.push(id.clone());
        self.locations.insert(id.clone(), (seat, Zone::Hand));
        Some(id)
    }

    /// Shuffle one zone in place.
    pub fn shuffle<R: RandomSource + ?Sized>(&mut self, seat: Seat, zone: Zone, rng: &mut R) {
        if let Some(zones) = self.zones.get_mut(seat.index()) {
            rng::shuffle(rng, zones.get_mut(zone));
        }
    }

    /// Iterate over all instances in id order.
    pub fn iter(&self) -> impl Iterator<Item = &CardInstance> {
        self.cards.values()
    }

    /// Get total number of cards tracked.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn contains(&self, id: &InstanceId) -> bool {
        self.cards.contains_key(id)
    }
}
