//! Identifiers for players and card instances.
//!
//! ## Kinds of identity
//!
//! - `PlayerId`: the caller-supplied identifier of a player (opaque string).
//! - `Seat`: the position of a player in the game, 0 or 1. Seat 0 takes the
//!   first turn.
//! - `InstanceId`: a card instance, formatted `"<templateID>#<n>"` where `n`
//!   comes from a counter shared across both decks of one game.
//!
//! ```
//! use tcg_engine::core::{InstanceId, Seat};
//!
//! let id = InstanceId::new("fire_bolt", 7);
//! assert_eq!(id.as_str(), "fire_bolt#7");
//! assert_eq!(id.template_id(), "fire_bolt");
//!
//! assert_eq!(Seat::FIRST.other(), Seat::SECOND);
//! ```

use serde::{Deserialize, Serialize};

/// Caller-supplied player identifier.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Create a new player ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the identifier is the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for PlayerId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PlayerId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Seat index of a player (0 or 1).
///
/// Stored as a raw byte so a corrupt value can be detected rather than
/// being unrepresentable; see the turn controller guards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Seat(pub u8);

impl Seat {
    /// The player who takes the first turn.
    pub const FIRST: Seat = Seat(0);
    /// The other player.
    pub const SECOND: Seat = Seat(1);

    /// Both seats in turn order.
    pub const BOTH: [Seat; 2] = [Seat::FIRST, Seat::SECOND];

    /// Get the raw seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// True if this is seat 0 or 1.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 < 2
    }

    /// The opposing seat.
    #[must_use]
    pub const fn other(self) -> Seat {
        Seat(1 - (self.0 & 1))
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat({})", self.0)
    }
}

/// Unique identifier for a card instance within a game.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InstanceId(String);

impl InstanceId {
    /// Build an instance ID from a template ID and a counter value.
    #[must_use]
    pub fn new(template_id: &str, counter: u64) -> Self {
        Self(format!("{template_id}#{counter}"))
    }

    /// Get the raw ID.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The template part of the ID (everything before the last `#`).
    #[must_use]
    pub fn template_id(&self) -> &str {
        self.0.rsplit_once('#').map_or(self.0.as_str(), |(base, _)| base)
    }
}

impl From<&str> for InstanceId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
