use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use dense_dp::TripleLcs;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx]
        })
        .collect()
}

fn bench_triple_lcs(c: &mut Criterion) {
    let mut group = c.benchmark_group("triple_lcs_rolling_planes");
    for &len in &[32usize, 64, 128] {
        group.bench_function(format!("triple_len_{len}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(99);
                    let s = random_dna(&mut rng, len);
                    let t = random_dna(&mut rng, len);
                    let u = random_dna(&mut rng, len);
                    (s, t, u)
                },
                |(s, t, u)| {
                    let problem = TripleLcs::new(&s, &t, &u);
                    criterion::black_box(problem.length());
                },
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_triple_lcs);
criterion_main!(benches);
