//! Game construction.

use std::sync::Arc;

use im::Vector;

use crate::cards::{CardInstance, CardTemplate};
use crate::core::config::GameOptions;
use crate::core::entity::{InstanceId, PlayerId, Seat};
use crate::core::player::PlayerState;
use crate::core::rng::{GameRng, RandomSource};
use crate::core::state::{CombatState, Game};
use crate::error::{GameError, Result};
use crate::events::{EventKind, EventLog};
use crate::zones::{Zone, ZoneManager};

/// Create a game seeded from `options.seed` (time-derived if zero).
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use tcg_engine::cards::CardTemplate;
/// use tcg_engine::core::{GameOptions, Seat};
/// use tcg_engine::rules::new_game;
///
/// let bear = Arc::new(CardTemplate::creature("bear", "Bear", 1, 1, 1));
/// let deck = vec![bear; 10];
///
/// let game = new_game("alice", "bob", &deck, &deck, GameOptions::new().with_seed(42)).unwrap();
/// assert_eq!(game.turn(), 0);
/// assert_eq!(game.hand(Seat::FIRST).len(), 3);
/// assert!(game.id().starts_with("g_"));
/// ```
pub fn new_game(
    player1: impl Into<PlayerId>,
    player2: impl Into<PlayerId>,
    deck1: &[Arc<CardTemplate>],
    deck2: &[Arc<CardTemplate>],
    options: GameOptions,
) -> Result<Game> {
    let options = options.normalized();
    let rng = Box::new(GameRng::new(options.seed));
    build(player1.into(), player2.into(), deck1, deck2, options, rng)
}

/// Create a game driven by a caller-supplied random source.
///
/// `options.seed` is still resolved and stored but does not drive `rng`.
pub fn new_game_with_rng(
    player1: impl Into<PlayerId>,
    player2: impl Into<PlayerId>,
    deck1: &[Arc<CardTemplate>],
    deck2: &[Arc<CardTemplate>],
    options: GameOptions,
    rng: Box<dyn RandomSource>,
) -> Result<Game> {
    build(player1.into(), player2.into(), deck1, deck2, options.normalized(), rng)
}

fn build(
    p1: PlayerId,
    p2: PlayerId,
    deck1: &[Arc<CardTemplate>],
    deck2: &[Arc<CardTemplate>],
    options: GameOptions,
    mut rng: Box<dyn RandomSource>,
) -> Result<Game> {
    if p1.is_empty() || p2.is_empty() {
        return Err(GameError::InvalidInput("player IDs must not be empty".into()));
    }
    if p1 == p2 {
        return Err(GameError::InvalidInput("player IDs must differ".into()));
    }
    if deck1.is_empty() || deck2.is_empty() {
        return Err(GameError::InvalidInput(
            "both players must provide a non-empty deck".into(),
        ));
    }

    // One counter for both decks so instance ids never collide.
    let mut zones = ZoneManager::new();
    let mut counter = 0u64;
    for (seat, owner, deck) in [(Seat::FIRST, &p1, deck1), (Seat::SECOND, &p2, deck2)] {
        for template in deck {
            counter += 1;
            let id = InstanceId::new(&template.id, counter);
            let card = CardInstance::new(id, Arc::clone(template), owner.clone());
            zones.insert(card, seat, Zone::Deck)?;
        }
    }

    for seat in Seat::BOTH {
        zones.shuffle(seat, Zone::Deck, rng.as_mut());
    }
    let id = format!("g_{:08x}", rng.next_u64());

    // Opening hands are silent; the summary events below cover them.
    for seat in Seat::BOTH {
        for _ in 0..options.opening_hand() {
            if zones.draw(seat).is_none() {
                break;
            }
        }
    }

    let life = options.starting_life;
    let mut game = Game {
        id,
        players: [PlayerState::new(p1, life), PlayerState::new(p2, life)],
        active: Seat::FIRST,
        turn: 0,
        options,
        rng,
        zones,
        events: EventLog::new(),
        result: None,
        outcome: None,
        combat: CombatState::default(),
        history: Vector::new(),
    };

    game.log_event(None, EventKind::Init, "game created");
    for seat in Seat::BOTH {
        let size = game.hand(seat).len();
        game.log_event(Some(seat), EventKind::Draw, format!("opening hand: {size}"));
    }

    log::info!("created game {} ({} vs {})", game.id, game.players[0].id, game.players[1].id);
    Ok(game)
}
