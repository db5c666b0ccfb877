//! Injectable source of randomness.
//!
//! Simulated latency, the delete failure rate and the pick of canned chat
//! replies all draw from an [`OutcomeSource`], so tests can script every
//! branch instead of relying on luck.

use std::collections::VecDeque;
use std::sync::Mutex;

/// A source of uniformly distributed samples in `[0, 1)`.
pub trait OutcomeSource: Send + Sync {
    /// Draws the next sample in `[0, 1)`.
    fn sample(&self) -> f64;

    /// Returns `true` with the given probability.
    fn occurs(&self, probability: f64) -> bool {
        self.sample() < probability
    }

    /// Draws a value in `[min, max]`. Bounds given in the wrong order are swapped.
    fn within(&self, min: u64, max: u64) -> u64 {
        let (low, high) = if min <= max { (min, max) } else { (max, min) };
        let span = (high - low) as f64;
        low + ((span * self.sample()).round() as u64).min(high - low)
    }

    /// Draws an index into a collection of `len` elements (`len > 0`).
    fn index(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        ((len as f64 * self.sample()) as usize).min(len - 1)
    }
}

/// Always returns the same sample.
#[derive(Debug, Clone, Copy)]
pub struct FixedOutcome(pub f64);

impl FixedOutcome {
    /// A sample that never triggers `occurs` for any probability below 1.
    pub const NEVER: FixedOutcome = FixedOutcome(0.999_999);
    /// A sample that triggers `occurs` for any positive probability.
    pub const ALWAYS: FixedOutcome = FixedOutcome(0.0);
}

impl OutcomeSource for FixedOutcome {
    fn sample(&self) -> f64 {
        self.0
    }
}

/// Replays a scripted list of samples, then falls back to a fixed one.
#[derive(Debug)]
pub struct ScriptedOutcomes {
    queue: Mutex<VecDeque<f64>>,
    fallback: f64,
}

impl ScriptedOutcomes {
    pub fn new(samples: impl IntoIterator<Item = f64>, fallback: f64) -> Self {
        Self {
            queue: Mutex::new(samples.into_iter().collect()),
            fallback,
        }
    }

    /// Appends samples to the script.
    pub fn push(&self, samples: impl IntoIterator<Item = f64>) {
        if let Ok(mut queue) = self.queue.lock() {
            queue.extend(samples);
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.lock().map(|q| q.len()).unwrap_or(0)
    }
}

impl OutcomeSource for ScriptedOutcomes {
    fn sample(&self) -> f64 {
        self.queue
            .lock()
            .ok()
            .and_then(|mut queue| queue.pop_front())
            .unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occurs_threshold() {
        assert!(FixedOutcome(0.05).occurs(0.1));
        assert!(!FixedOutcome(0.1).occurs(0.1));
        assert!(!FixedOutcome::NEVER.occurs(0.1));
        assert!(FixedOutcome::ALWAYS.occurs(0.1));
        assert!(!FixedOutcome::ALWAYS.occurs(0.0));
    }

    #[test]
    fn test_within_bounds() {
        assert_eq!(FixedOutcome(0.0).within(100, 500), 100);
        assert_eq!(FixedOutcome(0.5).within(100, 500), 300);
        assert_eq!(FixedOutcome::NEVER.within(100, 500), 500);
        assert_eq!(FixedOutcome(0.5).within(0, 0), 0);
        assert_eq!(FixedOutcome(0.0).within(500, 100), 100);
    }

    #[test]
    fn test_index_stays_in_range() {
        assert_eq!(FixedOutcome::NEVER.index(4), 3);
        assert_eq!(FixedOutcome(0.5).index(4), 2);
        assert_eq!(FixedOutcome(0.5).index(0), 0);
    }

    #[test]
    fn test_scripted_outcomes_replay_then_fallback() {
        let outcomes = ScriptedOutcomes::new([0.1, 0.9], 0.5);
        assert_eq!(outcomes.sample(), 0.1);
        assert_eq!(outcomes.sample(), 0.9);
        assert_eq!(outcomes.sample(), 0.5);

        outcomes.push([0.2]);
        assert_eq!(outcomes.remaining(), 1);
        assert_eq!(outcomes.sample(), 0.2);
    }
}
