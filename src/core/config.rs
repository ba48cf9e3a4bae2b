//! Game configuration.
//!
//! `GameOptions` is supplied by the caller when a game is created.
//! Out-of-range values fall back to defaults via [`GameOptions::normalized`]:
//!
//! | option               | default | fallback when               |
//! |----------------------|---------|-----------------------------|
//! | `starting_life`      | 20      | `<= 0`                      |
//! | `starting_hand`      | 3       | `< 0` (zero is legal)       |
//! | `max_energy`         | 10      | `<= 0`                      |
//! | `max_board_size`     | 0       | never (0 means unlimited)   |
//! | `first_player_draws` | false   | never                       |
//! | `seed`               | 0       | `0` becomes time-derived    |

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

pub const DEFAULT_STARTING_LIFE: i32 = 20;
pub const DEFAULT_STARTING_HAND: i32 = 3;
pub const DEFAULT_MAX_ENERGY: i32 = 10;

/// Options accepted when creating a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOptions {
    /// Life total each player starts with.
    pub starting_life: i32,

    /// Opening hand size. Zero means no opening hand.
    pub starting_hand: i32,

    /// Energy ceiling reached by the per-turn ramp.
    pub max_energy: i32,

    /// Maximum creatures per board. `0` for unlimited.
    pub max_board_size: usize,

    /// Whether seat 0 draws on turn 1.
    pub first_player_draws: bool,

    /// RNG seed. `0` picks a time-derived seed.
    ///
    /// Unsigned. Callers holding a signed 64-bit seed use
    /// [`GameOptions::with_signed_seed`], which keeps every bit.
    pub seed: u64,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_life: DEFAULT_STARTING_LIFE,
            starting_hand: DEFAULT_STARTING_HAND,
            max_energy: DEFAULT_MAX_ENERGY,
            max_board_size: 0,
            first_player_draws: false,
            seed: 0,
        }
    }
}

impl GameOptions {
    /// Create options with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_starting_life(mut self, life: i32) -> Self {
        self.starting_life = life;
        self
    }

    #[must_use]
    pub fn with_starting_hand(mut self, size: i32) -> Self {
        self.starting_hand = size;
        self
    }

    #[must_use]
    pub fn with_max_energy(mut self, cap: i32) -> Self {
        self.max_energy = cap;
        self
    }

    #[must_use]
    pub fn with_max_board_size(mut self, size: usize) -> Self {
        self.max_board_size = size;
        self
    }

    #[must_use]
    pub fn with_first_player_draws(mut self, draws: bool) -> Self {
        self.first_player_draws = draws;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the seed from a signed value, reinterpreting its bits.
    ///
    /// Distinct signed seeds stay distinct; `0` still means time-derived.
    #[must_use]
    pub fn with_signed_seed(self, seed: i64) -> Self {
        self.with_seed(u64::from_ne_bytes(seed.to_ne_bytes()))
    }

    /// Apply the defaulting rules and resolve a zero seed.
    ///
    /// The returned options have a non-zero seed, so storing them is enough
    /// to replay the game.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.starting_life <= 0 {
            self.starting_life = DEFAULT_STARTING_LIFE;
        }
        if self.starting_hand < 0 {
            self.starting_hand = DEFAULT_STARTING_HAND;
        }
        if self.max_energy <= 0 {
            self.max_energy = DEFAULT_MAX_ENERGY;
        }
        if self.seed == 0 {
            self.seed = time_seed();
        }
        self
    }

    /// Opening hand size as a count.
    #[must_use]
    pub fn opening_hand(&self) -> usize {
        usize::try_from(self.starting_hand).unwrap_or(0)
    }

    /// True if the board has a size limit and `occupied` has reached it.
    #[must_use]
    pub fn board_is_full(&self, occupied: usize) -> bool {
        self.max_board_size > 0 && occupied >= self.max_board_size
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(1, seed_from_elapsed)
}

/// Nanoseconds since the epoch, clamped to `1..=u64::MAX`.
fn seed_from_elapsed(elapsed: Duration) -> u64 {
    // A zero seed would mean "pick one" again.
    u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX).max(1)
}
