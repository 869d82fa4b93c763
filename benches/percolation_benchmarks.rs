use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use percolation_sim::grid::Percolation;
use percolation_sim::simulation::run_trial;

fn benchmark_percolation(c: &mut Criterion) {
    c.bench_function("fill_grid_n20", |b| {
        b.iter(|| {
            let mut grid = Percolation::new(black_box(20)).unwrap();
            for row in 1..=20 {
                for col in 1..=20 {
                    grid.open(row, col).unwrap();
                }
            }
            grid.percolates()
        });
    });

    c.bench_function("trial_n20", |b| {
        let mut rng = StdRng::seed_from_u64(17);
        b.iter(|| run_trial(black_box(20), &mut rng).unwrap());
    });
}

criterion_group!(benches, benchmark_percolation);
criterion_main!(benches);
