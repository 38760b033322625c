//! Random sources for opponent move selection
//!
//! The resolver never reaches for ambient randomness: every draw goes
//! through a [`RandomSource`] supplied by the caller. Two sources ship with
//! the crate, a seeded xorshift generator for play and a scripted one for
//! tests and demos.

/// Capability returning uniform samples in `[0, 1)`
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Largest `f64` strictly below 1.0
const UNIT_MAX: f64 = 1.0 - f64::EPSILON / 2.0;

/// Convert a JS-style numeric seed into a generator seed
///
/// Fractional seeds round to the nearest integer. Negative, non-finite and
/// out-of-range values are rejected.
pub fn seed_from_f64(seed: f64) -> Option<u64> {
    if !seed.is_finite() || seed < 0.0 {
        return None;
    }
    let rounded = seed.round();
    // 2^64 is the first value past u64::MAX
    if rounded >= 18_446_744_073_709_551_616.0 {
        return None;
    }
    Some(rounded as u64)
}

/// Seeded random number generator
///
/// Deterministic: same seed = same sequence
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a new RNG from a 64-bit seed
    pub fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9e3779b97f4a7c15;
        // xorshift never leaves the all-zero state
        if state == 0 {
            state = 0x2545f4914f6cdd1d;
        }

        // Warm up the generator
        let mut rng = Self { state };
        for _ in 0..8 {
            rng.next_u64();
        }

        rng
    }

    /// Create a generator from a sample in `[0, 1)`, e.g. `Math.random()`
    pub fn from_unit(sample: f64) -> Self {
        Self::new((sample.clamp(0.0, UNIT_MAX) * u64::MAX as f64) as u64)
    }

    /// Generate next u64
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64*
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545f4914f6cdd1d)
    }
}

impl RandomSource for SeededRng {
    fn next_unit(&mut self) -> f64 {
        // top 53 bits fill the mantissa exactly
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

/// Replays a fixed list of samples, cycling when exhausted
///
/// Samples outside `[0, 1)` are clamped into range. An empty script yields
/// `0.0` forever.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    samples: Vec<f64>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(samples: impl Into<Vec<f64>>) -> Self {
        Self { samples: samples.into(), cursor: 0 }
    }

    /// A source that always returns the same sample
    pub fn constant(sample: f64) -> Self {
        Self::new(vec![sample])
    }
}

impl RandomSource for ScriptedRng {
    fn next_unit(&mut self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sample = self.samples[self.cursor % self.samples.len()];
        self.cursor = self.cursor.wrapping_add(1);
        if sample.is_nan() {
            0.0
        } else {
            sample.clamp(0.0, UNIT_MAX)
        }
    }
}
