//! Zone system for card locations.
//!
//! Every card instance is in exactly one of four zones (deck, hand, board,
//! graveyard) of exactly one player.
//!
//! ## Key Types
//!
//! - `Zone`: Which of the four zones
//! - `PlayerZones`: One player's ordered zone contents
//! - `ZoneManager`: Card arena, location index and movement

pub mod manager;
mod transfer;

pub use manager::{PlayerZones, Zone, ZoneManager};
