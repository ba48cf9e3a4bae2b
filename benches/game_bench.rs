use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tcg_engine::cards::CardTemplate;
use tcg_engine::core::{Game, GameOptions, Seat};
use tcg_engine::effects::{TargetKind, TargetRef};
use tcg_engine::rules::new_game;

/// 30 cards: creatures, burn, removal and a buff.
fn mixed_deck() -> Vec<Arc<CardTemplate>> {
    let cub = Arc::new(CardTemplate::creature("c_cub", "Cub", 1, 1, 2));
    let ox = Arc::new(CardTemplate::creature("c_ox", "Ox", 3, 3, 4));
    let zap = Arc::new(CardTemplate::spell("s_zap", "Zap", 1).with_damage(2, TargetKind::EnemyPlayer));
    let bolt = Arc::new(CardTemplate::spell("s_bolt", "Bolt", 2).with_damage(3, TargetKind::EnemyCreature));
    let rally = Arc::new(
        CardTemplate::spell("s_rally", "Rally", 1).with_temporary_buff(2, 1, TargetKind::AllyCreature),
    );
    [cub, ox, zap, bolt, rally]
        .into_iter()
        .cycle()
        .take(30)
        .collect()
}

/// Play every affordable card whose first target can be satisfied.
fn play_out_turn(game: &mut Game) {
    let seat = game.active_seat();
    let Some(player) = game.current_player().map(|p| p.id.clone()) else {
        return;
    };

    let mut index = 0;
    while index < game.hand(seat).len() && !game.is_ended() {
        let target = game
            .card(&game.hand(seat)[index])
            .and_then(|card| card.template().effects.first().map(|e| e.target))
            .and_then(|kind| {
                let pool = match kind {
                    TargetKind::EnemyCreature => game.board(seat.other()),
                    TargetKind::AllyCreature => game.board(seat),
                    _ => return None,
                };
                pool.first().cloned().map(TargetRef::creature)
            });

        if game.play_card(&player, index, &[target]).is_err() {
            index += 1;
        }
    }
}

fn scripted_game(seed: u64, turns: usize) -> Game {
    let deck = mixed_deck();
    let mut game = new_game("p1", "p2", &deck, &deck, GameOptions::new().with_seed(seed)).unwrap();
    for _ in 0..turns {
        if game.is_ended() {
            break;
        }
        game.start_turn();
        play_out_turn(&mut game);
        game.end_turn();
    }
    game
}

fn bench_new_game(c: &mut Criterion) {
    let deck = mixed_deck();
    c.bench_function("new_game_30_card_decks", |b| {
        b.iter(|| {
            new_game("p1", "p2", black_box(&deck), black_box(&deck), GameOptions::new().with_seed(42))
                .unwrap()
        });
    });
}

fn bench_scripted_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("scripted_game");
    for turns in [4, 10, 20] {
        group.bench_with_input(BenchmarkId::from_parameter(turns), &turns, |b, &turns| {
            b.iter(|| scripted_game(black_box(42), turns));
        });
    }
    group.finish();
}

fn bench_validation(c: &mut Criterion) {
    let game = scripted_game(7, 6);
    let player = game.current_player().unwrap().id.clone();
    c.bench_function("playable_hand_indices", |b| {
        b.iter(|| game.playable_hand_indices(black_box(&player)));
    });
    // Arena clone is O(1); the location index and zone lists are copied.
    c.bench_function("zone_manager_clone", |b| {
        b.iter(|| {
            let copy = game.zones().clone();
            black_box(copy.zone_size(Seat::FIRST, tcg_engine::zones::Zone::Board))
        });
    });
}

criterion_group!(benches, bench_new_game, bench_scripted_game, bench_validation);
criterion_main!(benches);
