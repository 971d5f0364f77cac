use criterion::{Criterion, black_box, criterion_group, criterion_main};
use orbita_kepler::*;

fn bench_solve_low_eccentricity(c: &mut Criterion) {
    let solver = KeplerSolver::default();
    c.bench_function("solve_e0.0167", |bencher| {
        bencher.iter(|| black_box(solver.solve(black_box(1.234), black_box(0.0167))))
    });
}

fn bench_solve_high_eccentricity(c: &mut Criterion) {
    let solver = KeplerSolver::default();
    c.bench_function("solve_e0.9", |bencher| {
        bencher.iter(|| black_box(solver.solve(black_box(0.05), black_box(0.9))))
    });
}

fn bench_solve_near_parabolic(c: &mut Criterion) {
    let solver = KeplerSolver::new(1e-12, DEFAULT_MAX_ITERATIONS).unwrap();
    c.bench_function("solve_e0.999_tight", |bencher| {
        bencher.iter(|| black_box(solver.solve(black_box(0.01), black_box(0.999))))
    });
}

fn bench_full_period(c: &mut Criterion) {
    let elements = OrbitalElements::new(units::SOLAR_MASS_KG, units::AU_METERS, 0.9).unwrap();
    let sampler = OrbitSampler::new(elements, 1000).unwrap();
    c.bench_function("sample_period_1000_e0.9", |bencher| {
        bencher.iter(|| {
            for (_, pos) in sampler.samples() {
                black_box(pos.ok());
            }
        })
    });
}

criterion_group!(
    benches,
    bench_solve_low_eccentricity,
    bench_solve_high_eccentricity,
    bench_solve_near_parabolic,
    bench_full_period,
);
criterion_main!(benches);
