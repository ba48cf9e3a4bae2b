//! Effect targeting.
//!
//! - `TargetKind`: what an effect must be pointed at (declared on the card)
//! - `TargetRef`: what the caller actually pointed it at
//! - `Game::validate_target`: checks one against the other
//!
//! A missing target and a wrong target are different errors. `MissingTarget`
//! means nothing usable was supplied where the kind requires something;
//! `InvalidTarget` means something was supplied but fails the kind's check.

use serde::{Deserialize, Serialize};

use crate::core::entity::{InstanceId, PlayerId, Seat};
use crate::core::state::Game;
use crate::error::{GameError, Result};

/// Target kind declared by an effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    /// No target; the supplied target must be absent.
    #[default]
    None,
    /// A creature on either board.
    AnyCreature,
    /// A creature the caster controls.
    AllyCreature,
    /// A creature the caster does not control.
    EnemyCreature,
    /// The caster.
    SelfPlayer,
    /// The caster's opponent.
    EnemyPlayer,
    /// Anything the catalog names that this engine does not know.
    /// Always fails validation.
    #[serde(other)]
    Unknown,
}

impl TargetKind {
    /// True for the two player kinds, whose targets are filled in by the
    /// engine at resolution time.
    #[must_use]
    pub fn is_auto_player(self) -> bool {
        matches!(self, TargetKind::SelfPlayer | TargetKind::EnemyPlayer)
    }

    #[must_use]
    pub fn is_creature(self) -> bool {
        matches!(
            self,
            TargetKind::AnyCreature | TargetKind::AllyCreature | TargetKind::EnemyCreature
        )
    }
}

/// A reference to a player or a creature instance.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetRef {
    Player(PlayerId),
    Creature(InstanceId),
}

impl TargetRef {
    pub fn player(id: impl Into<PlayerId>) -> Self {
        TargetRef::Player(id.into())
    }

    pub fn creature(id: impl Into<InstanceId>) -> Self {
        TargetRef::Creature(id.into())
    }

    #[must_use]
    pub fn as_player(&self) -> Option<&PlayerId> {
        match self {
            TargetRef::Player(p) => Some(p),
            TargetRef::Creature(_) => None,
        }
    }

    #[must_use]
    pub fn as_creature(&self) -> Option<&InstanceId> {
        match self {
            TargetRef::Creature(c) => Some(c),
            TargetRef::Player(_) => None,
        }
    }
}

impl From<InstanceId> for TargetRef {
    fn from(id: InstanceId) -> Self {
        TargetRef::Creature(id)
    }
}

impl From<PlayerId> for TargetRef {
    fn from(id: PlayerId) -> Self {
        TargetRef::Player(id)
    }
}

impl Game {
    /// Check `target` against `kind` for a card cast by the player in `caster`.
    ///
    /// Pure: never mutates the game.
    pub fn validate_target(&self, kind: TargetKind, target: Option<&TargetRef>, caster: Seat) -> Result<()> {
        let caster_id = &self.player(caster).ok_or(GameError::PlayerNotFound)?.id;

        match kind {
            TargetKind::None => match target {
                None => Ok(()),
                Some(_) => Err(GameError::InvalidTarget),
            },

            TargetKind::AnyCreature | TargetKind::AllyCreature | TargetKind::EnemyCreature => {
                let id = match target {
                    None => return Err(GameError::MissingTarget),
                    Some(t) => t.as_creature().ok_or(GameError::InvalidTarget)?,
                };
                let card = self.zones.board_card(id).ok_or(GameError::InvalidTarget)?;
                let allied = &card.controller == caster_id;
                match kind {
                    TargetKind::AllyCreature if !allied => Err(GameError::InvalidTarget),
                    TargetKind::EnemyCreature if allied => Err(GameError::InvalidTarget),
                    _ => Ok(()),
                }
            }

            TargetKind::SelfPlayer | TargetKind::EnemyPlayer => {
                let wanted = if kind == TargetKind::SelfPlayer {
                    caster
                } else {
                    caster.other()
                };
                let wanted_id = &self.player(wanted).ok_or(GameError::PlayerNotFound)?.id;
                match target {
                    None => Err(GameError::MissingTarget),
                    Some(TargetRef::Player(p)) if p == wanted_id => Ok(()),
                    Some(_) => Err(GameError::InvalidTarget),
                }
            }

            TargetKind::Unknown => Err(GameError::InvalidTarget),
        }
    }

    /// The target an effect actually resolves against.
    ///
    /// Player kinds ignore whatever was supplied and point at the caster or
    /// the opponent.
    pub(crate) fn resolve_target(&self, kind: TargetKind, supplied: Option<&TargetRef>, caster: Seat) -> Option<TargetRef> {
        let seat = match kind {
            TargetKind::SelfPlayer => caster,
            TargetKind::EnemyPlayer => caster.other(),
            _ => return supplied.cloned(),
        };
        self.player(seat).map(|p| TargetRef::Player(p.id.clone()))
    }
}
