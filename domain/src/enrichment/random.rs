//! Random source port for enrichment draws.

/// Source of uniform random draws.
///
/// Production code uses an RNG-backed implementation from the infrastructure
/// layer; tests use [`FixedRandom`] to pin the outcome.
pub trait RandomSource: Send {
    /// Uniform draw in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform index in `0..len`. Callers never pass `len == 0`.
    fn index(&mut self, len: usize) -> usize;
}

/// A random source that always returns the same draw.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom {
    pub unit: f64,
    pub index: usize,
}

impl FixedRandom {
    pub fn new(unit: f64, index: usize) -> Self {
        Self { unit, index }
    }

    /// A draw that never passes a probability gate.
    pub fn never() -> Self {
        Self::new(0.999, 0)
    }

    /// A draw that always passes a probability gate.
    pub fn always() -> Self {
        Self::new(0.0, 0)
    }
}

impl RandomSource for FixedRandom {
    fn unit(&mut self) -> f64 {
        self.unit
    }

    fn index(&mut self, len: usize) -> usize {
        self.index % len
    }
}
