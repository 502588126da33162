//! Deterministic pseudo-random numbers for the randomized layout variants.
//!
//! Layouts must be reproducible: the same images on the same canvas always
//! land in the same spots. The generator below is a small linear
//! congruential generator whose sequence is fixed by its constants, so saved
//! projects re-render identically.

/// Linear congruential generator:
/// `state = (state * 9301 + 49297) mod 233280`, yielding `state / 233280`.
///
/// A fresh instance is created for every layout call and passed by `&mut`
/// to the engine that consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    const MULTIPLIER: u64 = 9301;
    const INCREMENT: u64 = 49297;
    const MODULUS: u64 = 233_280;

    /// Seed multiplier applied to the item count.
    pub const SEED_FACTOR: u64 = 1337;

    /// Creates a generator from a raw seed.
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed % Self::MODULUS,
        }
    }

    /// Creates the generator used for a layout of `count` items.
    pub fn for_item_count(count: usize) -> Self {
        Self::new((count as u64).wrapping_mul(Self::SEED_FACTOR))
    }

    /// Advances the generator and returns a value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * Self::MULTIPLIER + Self::INCREMENT) % Self::MODULUS;
        self.state as f64 / Self::MODULUS as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_values_for_single_item() {
        let mut rng = Lcg::for_item_count(1);
        // (1337 * 9301 + 49297) % 233280 = 120894
        assert_eq!(rng.next_f64(), 120_894.0 / 233_280.0);
    }

    #[test]
    fn test_values_in_unit_interval() {
        let mut rng = Lcg::for_item_count(10);
        for _ in 0..10_000 {
            let value = rng.next_f64();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Lcg::for_item_count(6);
        let mut b = Lcg::for_item_count(6);
        for _ in 0..100 {
            assert_eq!(a.next_f64(), b.next_f64());
        }
    }

    #[test]
    fn test_large_seed_is_reduced() {
        let mut a = Lcg::new(233_280 + 5);
        let mut b = Lcg::new(5);
        assert_eq!(a.next_f64(), b.next_f64());
    }
}
