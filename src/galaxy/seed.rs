//! Seed strings and their integer hash

use rand::Rng;

/// Hash a seed string to the integer that seeds the PRS
///
/// 31-multiplier string hash over UTF-16 code units in wrapping 32-bit
/// arithmetic, folded to its absolute value. Stable across platforms and
/// releases, unlike `std::hash::DefaultHasher`.
pub fn hash_seed(seed: &str) -> u32 {
    let hash = seed.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(unit as i32)
    });
    hash.unsigned_abs()
}

const SEED_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Fresh random seed string, 11–13 lowercase base-36 characters
pub fn random_seed() -> String {
    let mut rng = rand::thread_rng();
    let len = rng.gen_range(11..=13);
    (0..len)
        .map(|_| SEED_ALPHABET[rng.gen_range(0..SEED_ALPHABET.len())] as char)
        .collect()
}
