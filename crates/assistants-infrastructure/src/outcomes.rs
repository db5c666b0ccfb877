//! `OutcomeSource` implementations backed by `rand`.

use std::sync::Mutex;

use assistants_core::outcome::OutcomeSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngOutcomes;

impl OutcomeSource for ThreadRngOutcomes {
    fn sample(&self) -> f64 {
        rand::thread_rng().gen_range(0.0..1.0)
    }
}

/// Reproducible outcomes from a seeded RNG.
#[derive(Debug)]
pub struct SeededOutcomes {
    rng: Mutex<StdRng>,
}

impl SeededOutcomes {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl OutcomeSource for SeededOutcomes {
    fn sample(&self) -> f64 {
        match self.rng.lock() {
            Ok(mut rng) => rng.gen_range(0.0..1.0),
            // A poisoned lock only means another thread panicked mid-draw.
            Err(poisoned) => poisoned.into_inner().gen_range(0.0..1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_in_unit_interval() {
        let thread = ThreadRngOutcomes;
        let seeded = SeededOutcomes::new(7);
        for _ in 0..1000 {
            let a = thread.sample();
            let b = seeded.sample();
            assert!((0.0..1.0).contains(&a));
            assert!((0.0..1.0).contains(&b));
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let first = SeededOutcomes::new(42);
        let second = SeededOutcomes::new(42);
        for _ in 0..16 {
            assert_eq!(first.sample(), second.sample());
        }
    }
}
