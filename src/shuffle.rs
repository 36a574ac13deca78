//! Uniform in-place permutation of catalog order.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Fisher–Yates: walk from the last index down to 1, swapping each slot with
/// a uniformly chosen slot in `[0, i]`.
pub fn shuffle_in_place<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Shuffled copy, leaving the input untouched.
pub fn shuffled<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    shuffle_in_place(&mut out, rng);
    out
}

pub fn seeded_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_is_a_permutation() {
        let mut rng = seeded_rng(7);
        let input: Vec<u32> = (1..=6).collect();
        for _ in 0..200 {
            let mut out = shuffled(&input, &mut rng);
            out.sort_unstable();
            assert_eq!(out, input);
        }
    }

    #[test]
    fn same_seed_same_order() {
        let input: Vec<u32> = (1..=6).collect();
        let a = shuffled(&input, &mut seeded_rng(42));
        let b = shuffled(&input, &mut seeded_rng(42));
        assert_eq!(a, b);
    }

    #[test]
    fn short_inputs_are_untouched() {
        let mut rng = seeded_rng(1);
        let mut empty: Vec<u32> = Vec::new();
        shuffle_in_place(&mut empty, &mut rng);
        assert!(empty.is_empty());
        let mut one = vec![9];
        shuffle_in_place(&mut one, &mut rng);
        assert_eq!(one, vec![9]);
    }

    #[test]
    fn positions_are_close_to_uniform() {
        const N: usize = 6;
        const TRIALS: usize = 60_000;
        let mut rng = seeded_rng(0xC0FFEE);
        let mut counts = [[0usize; N]; N];
        let input: Vec<usize> = (0..N).collect();
        for _ in 0..TRIALS {
            let out = shuffled(&input, &mut rng);
            for (pos, item) in out.into_iter().enumerate() {
                counts[pos][item] += 1;
            }
        }
        let expected = (TRIALS / N) as f64;
        for row in counts {
            for c in row {
                let dev = (c as f64 - expected).abs() / expected;
                assert!(dev < 0.05, "count {c} deviates {dev:.3} from {expected}");
            }
        }
    }

    #[test]
    fn every_ordering_of_three_appears() {
        let mut rng = seeded_rng(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(shuffled(&[1, 2, 3], &mut rng));
        }
        assert_eq!(seen.len(), 6);
    }
}
