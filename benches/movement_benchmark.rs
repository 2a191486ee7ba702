use criterion::{Criterion, criterion_group, criterion_main};
use hexx::Hex;
use stolen_lands::map::{PartyPosition, Region, Tile, TileId, TileKind, TileRoster};
use stolen_lands::movement::{attempt_move, evaluate_move, legal_moves};

const RADIUS: i32 = 30;

/// Hexagonal map of the given radius; sectors alternate between two regions
fn build_roster() -> TileRoster {
    let mut tiles = vec![Tile::new(
        "capital",
        "Capital",
        Hex::ZERO,
        Region::Hub,
        TileKind::Capital,
    )];
    for q in -RADIUS..=RADIUS {
        for r in (-RADIUS).max(-q - RADIUS)..=RADIUS.min(-q + RADIUS) {
            if q == 0 && r == 0 {
                continue;
            }
            let region = if q >= 0 { Region::Greenbelt } else { Region::Pitax };
            tiles.push(Tile::new(
                format!("t{q}_{r}"),
                "wild",
                Hex::new(q, r),
                region,
                TileKind::Wild,
            ));
        }
    }
    TileRoster::from_tiles(tiles).expect("generated roster is valid")
}

fn bench_movement(c: &mut Criterion) {
    let roster = build_roster();
    let from = TileId::from("t5_5");
    let adjacent = TileId::from("t6_5");
    let across = TileId::from("t-1_5");

    let mut group = c.benchmark_group("movement");

    group.bench_function("evaluate_legal", |b| {
        b.iter(|| std::hint::black_box(evaluate_move(&roster, &from, &adjacent)))
    });

    group.bench_function("evaluate_not_adjacent", |b| {
        b.iter(|| std::hint::black_box(evaluate_move(&roster, &from, &across)))
    });

    group.bench_function("legal_moves", |b| {
        b.iter(|| std::hint::black_box(legal_moves(&roster, &from)))
    });

    group.bench_function("attempt_round_trip", |b| {
        let mut roster = roster.clone();
        let mut party = PartyPosition::place(&roster, from.clone()).expect("tile exists");
        b.iter(|| {
            attempt_move(&mut roster, &mut party, &adjacent);
            std::hint::black_box(attempt_move(&mut roster, &mut party, &from));
        })
    });

    group.finish();
}

criterion_group!(benches, bench_movement);
criterion_main!(benches);
