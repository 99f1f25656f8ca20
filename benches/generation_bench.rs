use criterion::{black_box, criterion_group, criterion_main, Criterion};

use starseed::galaxy::survey::{numbered_seeds, survey};
use starseed::{generate_galaxy, GenerationLimits, GenerationParams, Preset};

fn bench_generate(c: &mut Criterion) {
    let lightweight = Preset::Lightweight.params();
    let classic = Preset::Classic.params();
    let extreme = GenerationParams {
        galaxy_size: 1e9,
        star_density: 1e9,
        planet_probability: 1.0,
        ..GenerationParams::default()
    };

    c.bench_function("generate_lightweight", |b| {
        b.iter(|| generate_galaxy(black_box("abc"), black_box(&lightweight)))
    });
    c.bench_function("generate_classic", |b| {
        b.iter(|| generate_galaxy(black_box("abc"), black_box(&classic)))
    });
    c.bench_function("generate_capped", |b| {
        b.iter(|| generate_galaxy(black_box("abc"), black_box(&extreme)))
    });
}

fn bench_survey(c: &mut Criterion) {
    let seeds = numbered_seeds("bench-", 256);
    let params = GenerationParams::default();
    let limits = GenerationLimits::default();

    c.bench_function("survey_256", |b| {
        b.iter(|| survey(black_box(&seeds), &params, &limits))
    });
}

criterion_group!(benches, bench_generate, bench_survey);
criterion_main!(benches);
