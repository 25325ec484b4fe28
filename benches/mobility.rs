use criterion::{black_box, criterion_group, criterion_main, Criterion};

use kuba_rules::rules::{has_legal_move, legal_pushes, simulate};
use kuba_rules::{Board, Color, Direction, KubaGame, Push};

fn bench_mobility(c: &mut Criterion) {
    let board = Board::standard();

    c.bench_function("has_legal_move/standard", |b| {
        b.iter(|| has_legal_move(black_box(&board), Color::White, None))
    });
    c.bench_function("legal_pushes/standard", |b| {
        b.iter(|| legal_pushes(black_box(&board), Color::Black, None))
    });
}

fn bench_push(c: &mut Criterion) {
    let board = Board::standard();
    let push = Push::new((0, 0), Direction::Right);

    c.bench_function("simulate/standard", |b| {
        b.iter(|| simulate(black_box(&board), black_box(push), Color::White, None))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut game = KubaGame::new(("Ann", Color::White), ("Ben", Color::Black))
        .expect("distinct players");
    for _ in 0..20 {
        let actor = game.current_turn().unwrap_or("Ann").to_owned();
        let Some(push) = game.legal_pushes(&actor).and_then(|p| p.first().copied()) else {
            break;
        };
        if !game.make_move(&actor, push.origin, push.direction) {
            break;
        }
    }

    c.bench_function("match/clone", |b| b.iter(|| black_box(&game).clone()));
}

criterion_group!(benches, bench_mobility, bench_push, bench_snapshot);
criterion_main!(benches);
