use avsin_core::Randomizer;
use rand::Rng;
use rand::rngs::ThreadRng;
use std::cmp::Ordering;

/// `Randomizer` over any `rand` generator. Empty or inverted ranges yield `lower`.
pub struct RandomizerImpl<R: Rng = ThreadRng> {
    rng: R,
}

impl RandomizerImpl {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for RandomizerImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomizerImpl<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Randomizer for RandomizerImpl<R> {
    fn between(&mut self, lower: f64, upper: f64) -> f64 {
        if lower.partial_cmp(&upper) != Some(Ordering::Less) {
            return lower;
        }
        self.rng.random_range(lower..=upper)
    }

    fn int_between(&mut self, lower: i32, upper: i32) -> i32 {
        if lower >= upper {
            return lower;
        }
        self.rng.random_range(lower..=upper)
    }
}
