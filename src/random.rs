//! Pluggable uniform number sources.
//!
//! Every synthetic value in the SDK is derived from a [`NumberSource`], which
//! yields floats in `[0, 1)`. Production code uses the thread-local RNG; tests
//! inject a [`SequenceSource`] to assert exact outputs.

use rand::rngs::{StdRng, ThreadRng};
use rand::{thread_rng, Rng, SeedableRng};

/// A source of uniform floats in `[0, 1)`.
pub trait NumberSource {
    fn next(&mut self) -> f64;

    /// Draw an integer uniformly from `[min, min + span)`.
    ///
    /// Computed as `floor(next() * span) + min`.
    fn next_in(&mut self, min: i64, span: i64) -> i64 {
        (self.next() * span as f64).floor() as i64 + min
    }
}

impl<S: NumberSource + ?Sized> NumberSource for &mut S {
    fn next(&mut self) -> f64 {
        (**self).next()
    }
}

impl<S: NumberSource + ?Sized> NumberSource for Box<S> {
    fn next(&mut self) -> f64 {
        (**self).next()
    }
}

// ---------------------------------------------------------------------------
// ThreadSource
// ---------------------------------------------------------------------------

/// Non-deterministic source backed by [`rand::thread_rng`].
pub struct ThreadSource {
    rng: ThreadRng,
}

impl ThreadSource {
    pub fn new() -> Self {
        Self { rng: thread_rng() }
    }
}

impl Default for ThreadSource {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberSource for ThreadSource {
    fn next(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

// ---------------------------------------------------------------------------
// SeededSource
// ---------------------------------------------------------------------------

/// Reproducible source seeded from a `u64`.
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl NumberSource for SeededSource {
    fn next(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

// ---------------------------------------------------------------------------
// SequenceSource
// ---------------------------------------------------------------------------

/// Replays a fixed list of values, cycling when exhausted.
///
/// Values outside `[0, 1)` are clamped into range. An empty list always
/// yields `0.0`.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    pos: usize,
}

impl SequenceSource {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            pos: 0,
        }
    }

    /// Number of values drawn so far.
    pub fn drawn(&self) -> usize {
        self.pos
    }
}

impl NumberSource for SequenceSource {
    fn next(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_in_maps_unit_interval_onto_range() {
        let mut src = SequenceSource::new(vec![0.0, 0.5, 0.999_999]);
        assert_eq!(src.next_in(30_000, 50_000), 30_000);
        assert_eq!(src.next_in(30_000, 50_000), 55_000);
        assert_eq!(src.next_in(30_000, 50_000), 79_999);
    }

    #[test]
    fn sequence_cycles_and_counts() {
        let mut src = SequenceSource::new(vec![0.25]);
        assert_eq!(src.next(), 0.25);
        assert_eq!(src.next(), 0.25);
        assert_eq!(src.drawn(), 2);
    }

    #[test]
    fn sequence_clamps_out_of_range_values() {
        let mut src = SequenceSource::new(vec![1.5, -0.2]);
        assert!(src.next() < 1.0);
        assert_eq!(src.next(), 0.0);
    }

    #[test]
    fn seeded_sources_agree() {
        let mut a = SeededSource::new(7);
        let mut b = SeededSource::new(7);
        for _ in 0..16 {
            let x = a.next();
            assert!((0.0..1.0).contains(&x));
            assert_eq!(x, b.next());
        }
    }

    #[test]
    fn thread_source_stays_in_unit_interval() {
        let mut src = ThreadSource::new();
        for _ in 0..256 {
            let x = src.next();
            assert!((0.0..1.0).contains(&x));
        }
    }
}
