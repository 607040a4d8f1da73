use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;

pub trait Shuffle {
    fn shuffle(&mut self, items: &mut [String]);
}

/// Fisher-Yates shuffle over any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomShuffle<R: Rng = ThreadRng> {
    rng: R,
}

impl RandomShuffle {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for RandomShuffle {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomShuffle<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Shuffle for RandomShuffle<R> {
    fn shuffle(&mut self, items: &mut [String]) {
        items.shuffle(&mut self.rng);
    }
}
