#![cfg(feature = "heavy")]
use dense_dp::{lcs_length, triple_lcs_length};
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

#[test]
fn heavy_stress_pairwise_medium() {
    let mut rng = StdRng::seed_from_u64(123);
    let s = random_dna(&mut rng, 20_000);
    let t = random_dna(&mut rng, 20_000);
    let len = lcs_length(&s, &t);
    // Random DNA of equal length shares a long but partial subsequence.
    assert!(len <= 20_000);
    assert!(len >= 10_000);
}

#[test]
fn heavy_stress_triple_medium() {
    let mut rng = StdRng::seed_from_u64(321);
    let s = random_dna(&mut rng, 300);
    let t = random_dna(&mut rng, 300);
    let u = random_dna(&mut rng, 300);
    let len = triple_lcs_length(&s, &t, &u);
    assert!(len <= 300);
    assert!(len <= lcs_length(&s, &t));
}
