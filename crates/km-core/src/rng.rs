//! Stream-indexed deterministic random sources.
//!
//! # Determinism strategy
//!
//! Every independent source of randomness inside a motion model owns one
//! `RandomStream`.  Its sequence is a pure function of two numbers:
//!
//!   seed = run_seed XOR ((stream + 1) * MIXING_CONSTANT)
//!
//! The run seed is shared by the whole simulation; the stream index is handed
//! out by the stream-assignment pass, which gives every source a distinct
//! index.  Two sources therefore never share a sequence, and a given source
//! replays identically across runs regardless of how many other models exist.
//!
//! Until a stream index is assigned the source is seeded from the run seed
//! alone.  That is reproducible but not collision-free, so drawing before
//! assignment should be reserved for throwaway setups.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// A uniform random source whose sequence is selected by a stream index.
#[derive(Clone, Debug)]
pub struct RandomStream {
    run_seed: u64,
    stream:   Option<i64>,
    rng:      SmallRng,
}

impl RandomStream {
    /// An unassigned stream for the given run seed.
    pub fn new(run_seed: u64) -> Self {
        Self {
            run_seed,
            stream: None,
            rng:    SmallRng::seed_from_u64(run_seed),
        }
    }

    /// Bind this source to `stream` and restart its sequence.
    pub fn set_stream(&mut self, stream: i64) {
        let mixed = (stream as u64).wrapping_add(1).wrapping_mul(MIXING_CONSTANT);
        self.rng = SmallRng::seed_from_u64(self.run_seed ^ mixed);
        self.stream = Some(stream);
    }

    /// The assigned stream index, or `None` before assignment.
    #[inline]
    pub fn stream(&self) -> Option<i64> {
        self.stream
    }

    #[inline]
    pub fn run_seed(&self) -> u64 {
        self.run_seed
    }

    /// Uniform draw in `[min, max)`.  Returns `min` when the range is empty.
    #[inline]
    pub fn uniform(&mut self, min: f64, max: f64) -> f64 {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..max)
    }
}
