//! The game aggregate.
//!
//! `Game` owns everything one match needs: both players' resources, the
//! zone manager (card arena plus zone lists), the options it was created
//! with, its random source, the event log and the action history.
//!
//! Operations are implemented next to the concern they belong to:
//!
//! - `rules::setup`: construction
//! - `rules::turn`: `start_turn`, `end_turn`, `draw`
//! - `rules::validate` and `rules::play`: `can_play_card`, `play_card`
//! - `effects`: target validation and effect resolution
//! - `rules::state_based`: deaths and game end
//!
//! ## Single writer
//!
//! A `Game` is a plain value with no interior mutability. Callers that
//! share one across threads must serialize access themselves (one lock or
//! one owning task per game).

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::action::Action;
use super::config::GameOptions;
use super::entity::{InstanceId, PlayerId, Seat};
use super::player::PlayerState;
use super::rng::RandomSource;
use crate::cards::CardInstance;
use crate::events::{EventKind, EventLog};
use crate::rules::GameResult;
use crate::zones::{Zone, ZoneManager};

/// Combat step. Reserved; nothing transitions between these yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatPhase {
    #[default]
    None,
    DeclareAttackers,
    DeclareBlockers,
    ResolveDamage,
}

/// Reserved combat bookkeeping.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatState {
    pub phase: CombatPhase,

    /// Declared attackers, in declaration order.
    pub attackers: Vec<InstanceId>,

    /// attacker -> blocker
    pub blockers: FxHashMap<InstanceId, InstanceId>,
}

/// One two-player game.
#[derive(Debug)]
pub struct Game {
    pub(crate) id: String,
    pub(crate) players: [PlayerState; 2],
    pub(crate) active: Seat,
    pub(crate) turn: u32,
    pub(crate) options: GameOptions,
    pub(crate) rng: Box<dyn RandomSource>,
    pub(crate) zones: ZoneManager,
    pub(crate) events: EventLog,
    pub(crate) result: Option<GameResult>,
    pub(crate) outcome: Option<String>,
    pub(crate) combat: CombatState,
    pub(crate) history: Vector<Action>,
}

impl Game {
    /// Synthetic game identifier (`g_` + hex).
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Turn counter. 0 until the first `start_turn`.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Seat of the active player.
    #[must_use]
    pub fn active_seat(&self) -> Seat {
        self.active
    }

    /// Options as resolved at creation (defaults applied, seed fixed).
    #[must_use]
    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    /// The active player. `None` only if the active seat is corrupt.
    #[must_use]
    pub fn current_player(&self) -> Option<&PlayerState> {
        self.player(self.active)
    }

    /// The player waiting for their turn.
    #[must_use]
    pub fn opponent(&self) -> Option<&PlayerState> {
        if !self.active.is_valid() {
            return None;
        }
        self.player(self.active.other())
    }

    #[must_use]
    pub fn player(&self, seat: Seat) -> Option<&PlayerState> {
        self.players.get(seat.index())
    }

    pub(crate) fn player_mut(&mut self, seat: Seat) -> Option<&mut PlayerState> {
        self.players.get_mut(seat.index())
    }

    /// Both players in seat order.
    #[must_use]
    pub fn players(&self) -> &[PlayerState; 2] {
        &self.players
    }

    /// Seat of the player with this identifier.
    #[must_use]
    pub fn seat_of(&self, id: &PlayerId) -> Option<Seat> {
        Seat::BOTH.into_iter().find(|s| &self.players[s.index()].id == id)
    }

    /// Ordered instance ids in one zone.
    #[must_use]
    pub fn zone(&self, seat: Seat, zone: Zone) -> &[InstanceId] {
        self.zones.cards(seat, zone)
    }

    /// Instances in one zone, in zone order.
    pub fn cards_in(&self, seat: Seat, zone: Zone) -> impl Iterator<Item = &CardInstance> {
        self.zones
            .cards(seat, zone)
            .iter()
            .filter_map(move |id| self.zones.get(id))
    }

    #[must_use]
    pub fn hand(&self, seat: Seat) -> &[InstanceId] {
        self.zone(seat, Zone::Hand)
    }

    #[must_use]
    pub fn board(&self, seat: Seat) -> &[InstanceId] {
        self.zone(seat, Zone::Board)
    }

    #[must_use]
    pub fn card(&self, id: &InstanceId) -> Option<&CardInstance> {
        self.zones.get(id)
    }

    /// Current (seat, zone) of an instance.
    #[must_use]
    pub fn locate(&self, id: &InstanceId) -> Option<(Seat, Zone)> {
        self.zones.locate(id)
    }

    #[must_use]
    pub fn zones(&self) -> &ZoneManager {
        &self.zones
    }

    #[must_use]
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    #[must_use]
    pub fn combat(&self) -> &CombatState {
        &self.combat
    }

    /// Successfully applied actions, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<Action> {
        &self.history
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.result.is_some()
    }

    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    /// Human-readable outcome, once the game has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<&str> {
        self.outcome.as_deref()
    }

    /// Append to the event log, attributing the event to `seat`'s player.
    pub(crate) fn log_event(&mut self, seat: Option<Seat>, kind: EventKind, message: impl Into<String>) {
        let player = seat
            .and_then(|s| self.players.get(s.index()))
            .map(|p| &p.id);
        self.events.push(self.turn, player, kind, message);
    }

    /// Log an internal failure to both the event log and the `log` facade.
    pub(crate) fn log_error(&mut self, seat: Option<Seat>, message: String) {
        log::warn!("game {}: {message}", self.id);
        self.log_event(seat, EventKind::Error, message);
    }
}
