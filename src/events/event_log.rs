//! Append-only event log.
//!
//! Every state transition the engine performs is recorded as an `Event`.
//! Events are never edited or removed; the log is an `im::Vector` so taking
//! a snapshot of it is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::entity::PlayerId;

/// Event type tag.
///
/// ## Tags
///
/// | kind                | tag                   | logged by                 |
/// |---------------------|-----------------------|---------------------------|
/// | `Init`              | `init`                | game creation             |
/// | `Draw`              | `draw`                | opening hands, draw step  |
/// | `Start` / `End`     | `start` / `end`       | turn controller           |
/// | `Refresh`           | `refresh`             | end-of-turn cleanup       |
/// | `Play`              | `play`                | a successful card play    |
/// | `Damage` ...        | `damage` ...          | effect handlers           |
/// | `Graveyard`         | `graveyard`           | zone moves to graveyard   |
/// | `CreatureDeath`     | `creature_death`      | state-based effects       |
/// | `GameEnd`           | `game_end`            | state-based effects       |
/// | `StateBasedEffects` | `state_based_effects` | game end summary          |
/// | `Error`             | `error`               | guards, failed handlers   |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Init,
    Draw,
    Start,
    End,
    Refresh,
    Play,
    Damage,
    Healing,
    DrawCards,
    BuffCreaturePerm,
    BuffCreatureTemp,
    Graveyard,
    CreatureDeath,
    GameEnd,
    StateBasedEffects,
    Error,
}

impl EventKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Init => "init",
            EventKind::Draw => "draw",
            EventKind::Start => "start",
            EventKind::End => "end",
            EventKind::Refresh => "refresh",
            EventKind::Play => "play",
            EventKind::Damage => "damage",
            EventKind::Healing => "healing",
            EventKind::DrawCards => "draw_cards",
            EventKind::BuffCreaturePerm => "buff_creature_perm",
            EventKind::BuffCreatureTemp => "buff_creature_temp",
            EventKind::Graveyard => "graveyard",
            EventKind::CreatureDeath => "creature_death",
            EventKind::GameEnd => "game_end",
            EventKind::StateBasedEffects => "state_based_effects",
            EventKind::Error => "error",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One logged state transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Turn counter when the event was logged (0 before the first turn).
    pub turn: u32,

    /// Acting player. `None` for system events.
    pub player: Option<PlayerId>,

    pub kind: EventKind,

    /// Human-readable description.
    pub message: String,
}

impl Event {
    /// True if this is a system event (no acting player).
    #[must_use]
    pub fn is_system(&self) -> bool {
        self.player.is_none()
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.player {
            Some(p) => write!(f, "[t{} {} {}] {}", self.turn, self.kind, p, self.message),
            None => write!(f, "[t{} {}] {}", self.turn, self.kind, self.message),
        }
    }
}

/// Ordered, append-only record of events.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vector<Event>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event and mirror it to the `log` facade.
    pub fn push(
        &mut self,
        turn: u32,
        player: Option<&PlayerId>,
        kind: EventKind,
        message: impl Into<String>,
    ) {
        let event = Event {
            turn,
            player: player.cloned(),
            kind,
            message: message.into(),
        };
        log::debug!("{event}");
        self.events.push_back(event);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Event> {
        self.events.get(index)
    }

    #[must_use]
    pub fn last(&self) -> Option<&Event> {
        self.events.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// Events with the given tag, in order.
    pub fn of_kind(&self, kind: EventKind) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(move |e| e.kind == kind)
    }

    /// Events from `index` onwards.
    pub fn since(&self, index: usize) -> impl Iterator<Item = &Event> {
        self.events.iter().skip(index)
    }

    /// O(1) snapshot of the whole log.
    #[must_use]
    pub fn snapshot(&self) -> Vector<Event> {
        self.events.clone()
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a Event;
    type IntoIter = im::vector::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
