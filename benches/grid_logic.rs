use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockbreaker_core::core::{Grid, GridRng};
use blockbreaker_core::types::{coord, Color, MAX_GAME_SIZE};

fn bench_populate(c: &mut Criterion) {
    c.bench_function("populate_16x16", |b| {
        let mut rng = GridRng::new(12345);
        b.iter(|| {
            let grid = Grid::populate(black_box(MAX_GAME_SIZE), &Color::ALL, &mut rng).unwrap();
            black_box(grid)
        })
    });
}

fn bench_find_group_worst_case(c: &mut Criterion) {
    // Uniform grid: the group is the entire board.
    let rows = vec![vec![Some(Color::Blue); MAX_GAME_SIZE as usize]; MAX_GAME_SIZE as usize];
    let grid = Grid::from_rows(rows).unwrap();

    c.bench_function("find_group_uniform_16x16", |b| {
        b.iter(|| grid.find_group(black_box(coord(0, 0))).unwrap())
    });
}

fn bench_apply_gravity(c: &mut Criterion) {
    let mut rng = GridRng::new(777);
    let mut punched = Grid::populate(MAX_GAME_SIZE, &Color::ALL, &mut rng).unwrap();
    let group = punched.find_group(coord(0, 3)).unwrap();
    punched.remove_group(&group);

    c.bench_function("apply_gravity_16x16", |b| {
        b.iter(|| {
            let mut grid = punched.clone();
            black_box(grid.apply_gravity())
        })
    });
}

criterion_group!(
    benches,
    bench_populate,
    bench_find_group_worst_case,
    bench_apply_gravity
);
criterion_main!(benches);
