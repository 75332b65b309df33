//! common routines to be included by benches

use decimal_bigint::{BigInteger, DigitBuffer, Digit};

/// Random integers with digit counts between `min_digits` and `max_digits`
///
/// The most significant digit is never zero.
pub fn random_bigintegers(
    count: usize,
    min_digits: usize,
    max_digits: usize,
    seed: u64,
) -> Vec<BigInteger> {
    let mut rng = oorandom::Rand32::new(seed);
    let spread = (max_digits - min_digits + 1) as u32;

    (0..count)
        .map(|_| {
            let len = min_digits + rng.rand_range(0..spread) as usize;
            let mut digits: Vec<Digit> = (0..len)
                .map(|_| rng.rand_range(0..10) as Digit)
                .collect();
            if let Some(high) = digits.last_mut() {
                *high = 1 + rng.rand_range(0..9) as Digit;
            }
            BigInteger::from_digits(DigitBuffer::from_vec(digits))
        })
        .collect()
}

/// Every unordered pair of distinct entries, in seeded random order
pub fn shuffled_pairs(ints: &[BigInteger], seed: u64) -> Vec<(&BigInteger, &BigInteger)> {
    let mut pairs = Vec::with_capacity(ints.len() * ints.len().saturating_sub(1) / 2);
    for (i, x) in ints.iter().enumerate() {
        pairs.extend(ints[i + 1..].iter().map(|y| (x, y)));
    }

    // Fisher-Yates
    let mut rng = oorandom::Rand32::new(seed);
    for i in (1..pairs.len()).rev() {
        let j = rng.rand_range(0..(i as u32 + 1)) as usize;
        pairs.swap(i, j);
    }
    pairs
}
