//! Seeded, stateless number sequences for jitter and ambient decoration.
//!
//! Every value is a pure function of `(seed, index)`: the seed bytes and the
//! index are folded with FNV-1a and finished with a SplitMix64 mix, so two
//! calls with the same arguments agree bit for bit regardless of what ran in
//! between.

const FNV1A_OFFSET: u64 = 0xcbf29ce484222325;
const FNV1A_PRIME: u64 = 0x100000001b3;

fn fnv1a(hash: &mut u64, bytes: &[u8]) {
    for byte in bytes {
        *hash ^= u64::from(*byte);
        *hash = hash.wrapping_mul(FNV1A_PRIME);
    }
}

fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9e3779b97f4a7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

fn seed_hash(seed: &str) -> u64 {
    let mut h = FNV1A_OFFSET;
    fnv1a(&mut h, seed.as_bytes());
    h
}

/// Unit value in `[0, 1)` for one `(seed, index)` pair.
pub fn unit(seed: &str, index: usize) -> f64 {
    unit_from_hash(seed_hash(seed), index)
}

fn unit_from_hash(seed_hash: u64, index: usize) -> f64 {
    let mut h = seed_hash;
    fnv1a(&mut h, &(index as u64).to_le_bytes());
    let mixed = splitmix64(h);
    // Top 53 bits fill an f64 mantissa exactly.
    (mixed >> 11) as f64 / (1u64 << 53) as f64
}

/// `count` values in `[low, high]`, uniform-like over `[low, high)`.
///
/// Bounds given in the wrong order are swapped; `low == high` yields the
/// constant repeated. A NaN bound yields NaN values instead of panicking.
pub fn deterministic_random(seed: &str, count: usize, low: f32, high: f32) -> Vec<f32> {
    let (low, high) = if low <= high { (low, high) } else { (high, low) };
    let h = seed_hash(seed);
    let span = f64::from(high) - f64::from(low);
    (0..count)
        .map(|index| {
            let value = f64::from(low) + unit_from_hash(h, index) * span;
            // f32 rounding can land a hair outside the range.
            (value as f32).max(low).min(high)
        })
        .collect()
}
