//! Benchmarks for puzzle generation.
//!
//! Measures the complete generation pipeline (seed, solve, dedup, punch) for
//! a few fixed RNG seeds, with and without the uniqueness probe.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use gridpunch_generator::{GeneratorConfig, PuzzleGenerator, SolutionRegistry};

const SEEDS: [u64; 3] = [42, 0xdead_beef, 0x5eed_5eed_5eed_5eed];

fn bench_generate(c: &mut Criterion) {
    for seed in SEEDS {
        c.bench_with_input(
            BenchmarkId::new("generate", seed),
            &seed,
            |b, &seed| {
                b.iter_batched(
                    || {
                        (
                            PuzzleGenerator::with_seed(seed).with_config(GeneratorConfig::easy()),
                            SolutionRegistry::new(),
                        )
                    },
                    |(mut generator, mut registry)| generator.generate(&mut registry),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_generate_unique(c: &mut Criterion) {
    let config = GeneratorConfig {
        verify_unique: true,
        ..GeneratorConfig::easy()
    };

    for seed in SEEDS {
        c.bench_with_input(
            BenchmarkId::new("generate_unique", seed),
            &seed,
            |b, &seed| {
                b.iter_batched(
                    || {
                        (
                            PuzzleGenerator::with_seed(seed).with_config(config),
                            SolutionRegistry::new(),
                        )
                    },
                    |(mut generator, mut registry)| generator.generate(&mut registry),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(benches, bench_generate, bench_generate_unique);
criterion_main!(benches);
