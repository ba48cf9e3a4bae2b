//! Effect definitions.
//!
//! An `EffectSpec` is one entry of a card's effect list, as written in the
//! catalog: what happens (`kind`), how much (`amount` or the two buff
//! magnitudes), and what it needs to be pointed at (`target`).

use serde::{Deserialize, Serialize};

use super::targeting::TargetKind;

/// The closed set of effect kinds the resolver understands.
///
/// ## Kinds
///
/// - `Damage`: `amount` to a player's life or a creature's damage counter
/// - `Heal`: `amount` to a player's life
/// - `DrawCards`: `amount` cards for a player
/// - `BuffStatsPerm`: `attack_buff`/`health_buff` to a creature, persists
/// - `BuffStatsTemp`: `attack_buff`/`health_buff` to a creature until end of turn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    Damage,
    Heal,
    DrawCards,
    BuffStatsPerm,
    BuffStatsTemp,
}

impl EffectKind {
    /// Catalog name of the kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EffectKind::Damage => "damage",
            EffectKind::Heal => "heal",
            EffectKind::DrawCards => "draw_cards",
            EffectKind::BuffStatsPerm => "buff_stats_perm",
            EffectKind::BuffStatsTemp => "buff_stats_temp",
        }
    }

    /// True for the two buff kinds, which read the buff magnitudes instead
    /// of `amount`.
    #[must_use]
    pub fn is_buff(self) -> bool {
        matches!(self, EffectKind::BuffStatsPerm | EffectKind::BuffStatsTemp)
    }
}

/// One effect of a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectSpec {
    pub kind: EffectKind,

    #[serde(default)]
    pub amount: i32,

    #[serde(default)]
    pub attack_buff: i32,

    #[serde(default)]
    pub health_buff: i32,

    /// Required target kind. Absent in the catalog means `none`.
    #[serde(default)]
    pub target: TargetKind,
}

impl EffectSpec {
    /// Create an effect with zero magnitudes.
    #[must_use]
    pub fn new(kind: EffectKind, target: TargetKind) -> Self {
        Self {
            kind,
            amount: 0,
            attack_buff: 0,
            health_buff: 0,
            target,
        }
    }

    /// Set the amount (builder pattern).
    #[must_use]
    pub fn with_amount(mut self, amount: i32) -> Self {
        self.amount = amount;
        self
    }

    /// Set attack/health buff magnitudes (builder pattern).
    #[must_use]
    pub fn with_buff(mut self, attack: i32, health: i32) -> Self {
        self.attack_buff = attack;
        self.health_buff = health;
        self
    }
}
