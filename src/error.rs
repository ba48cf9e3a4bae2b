//! Error types for the rules engine.
//!
//! Two classes of failure come out of the engine:
//!
//! - **Rule violations**: the caller asked for something the rules forbid
//!   (wrong turn, not enough energy, bad target). These are expected and the
//!   caller should relay them to the acting player.
//! - **Integrity violations**: state the validator should have made
//!   impossible (a validated card that cannot be located). Treat as bugs.
//!
//! Match on [`GameError::kind`] rather than on display strings.

use thiserror::Error;

use crate::core::{InstanceId, PlayerId};

/// Closed set of error kinds callers can branch on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    NotYourTurn,
    InvalidHandIndex,
    NotEnoughEnergy,
    MissingTarget,
    InvalidTarget,
    TargetCountMismatch,
    SpellWithoutEffects,
    BoardFull,
    PlayerNotFound,
    CardNotFound,
    AlreadyInGraveyard,
    InvalidCard,
}

impl ErrorKind {
    /// True for errors the acting player can fix by choosing differently.
    #[must_use]
    pub fn is_rule_violation(self) -> bool {
        matches!(
            self,
            ErrorKind::NotYourTurn
                | ErrorKind::InvalidHandIndex
                | ErrorKind::NotEnoughEnergy
                | ErrorKind::MissingTarget
                | ErrorKind::InvalidTarget
                | ErrorKind::TargetCountMismatch
                | ErrorKind::BoardFull
                | ErrorKind::PlayerNotFound
        )
    }
}

/// Errors produced by the engine.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("not your turn")]
    NotYourTurn,

    #[error("invalid hand index")]
    InvalidHandIndex,

    #[error("not enough energy")]
    NotEnoughEnergy,

    #[error("missing target")]
    MissingTarget,

    #[error("invalid target")]
    InvalidTarget,

    #[error("expected {expected} targets, got {got}")]
    TargetCountMismatch { expected: usize, got: usize },

    #[error("spells must have at least 1 effect, got 0")]
    SpellWithoutEffects,

    #[error("effect {index} validation failed: {source}")]
    EffectTarget {
        index: usize,
        #[source]
        source: Box<GameError>,
    },

    #[error("board is full")]
    BoardFull,

    #[error("player not found")]
    PlayerNotFound,

    #[error("owner {0} not found")]
    OwnerNotFound(PlayerId),

    #[error("card {0} not found in any zone")]
    CardNotFound(InstanceId),

    #[error("unable to move card {0} from graveyard to graveyard")]
    AlreadyInGraveyard(InstanceId),

    #[error("invalid card {id}: {reason}")]
    InvalidCard { id: String, reason: String },
}

impl GameError {
    /// Wrap a targeting failure with the index of the effect it belongs to.
    #[must_use]
    pub fn for_effect(index: usize, source: GameError) -> Self {
        GameError::EffectTarget {
            index,
            source: Box::new(source),
        }
    }

    /// The discriminant of this error, looking through effect wrappers.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::InvalidInput(_) => ErrorKind::InvalidInput,
            GameError::NotYourTurn => ErrorKind::NotYourTurn,
            GameError::InvalidHandIndex => ErrorKind::InvalidHandIndex,
            GameError::NotEnoughEnergy => ErrorKind::NotEnoughEnergy,
            GameError::MissingTarget => ErrorKind::MissingTarget,
            GameError::InvalidTarget => ErrorKind::InvalidTarget,
            GameError::TargetCountMismatch { .. } => ErrorKind::TargetCountMismatch,
            GameError::SpellWithoutEffects => ErrorKind::SpellWithoutEffects,
            GameError::EffectTarget { source, .. } => source.kind(),
            GameError::BoardFull => ErrorKind::BoardFull,
            GameError::PlayerNotFound | GameError::OwnerNotFound(_) => ErrorKind::PlayerNotFound,
            GameError::CardNotFound(_) => ErrorKind::CardNotFound,
            GameError::AlreadyInGraveyard(_) => ErrorKind::AlreadyInGraveyard,
            GameError::InvalidCard { .. } => ErrorKind::InvalidCard,
        }
    }

    /// Shorthand for `self.kind().is_rule_violation()`.
    #[must_use]
    pub fn is_rule_violation(&self) -> bool {
        self.kind().is_rule_violation()
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;
