//! RNG-backed random source for reply enrichment

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reflct_domain::RandomSource;

/// [`RandomSource`] over a [`StdRng`].
pub struct StdRandomSource {
    rng: StdRng,
}

impl StdRandomSource {
    /// Seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic sequence for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdRandomSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for StdRandomSource {
    fn unit(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }

    fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reflct_domain::enrichment::MOTIVATIONAL_QUOTES;
    use reflct_domain::{Enrichment, ReplyEnricher};

    #[test]
    fn test_unit_in_range() {
        let mut source = StdRandomSource::seeded(7);
        for _ in 0..1_000 {
            let draw = source.unit();
            assert!((0.0..1.0).contains(&draw));
        }
    }

    #[test]
    fn test_index_in_range() {
        let mut source = StdRandomSource::seeded(7);
        for _ in 0..1_000 {
            assert!(source.index(5) < 5);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = StdRandomSource::seeded(42);
        let mut b = StdRandomSource::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.unit(), b.unit());
        }
    }

    #[test]
    fn test_quote_rate_is_about_thirty_percent() {
        let enricher = ReplyEnricher::new();
        let mut source = StdRandomSource::seeded(2024);
        let trials = 10_000;

        let mut quotes = 0;
        let mut seen = [false; MOTIVATIONAL_QUOTES.len()];
        for _ in 0..trials {
            for extra in enricher.select("Hello", &mut source) {
                if let Enrichment::Quote(text) = extra {
                    quotes += 1;
                    if let Some(i) = MOTIVATIONAL_QUOTES.iter().position(|q| *q == text) {
                        seen[i] = true;
                    }
                }
            }
        }

        let rate = quotes as f64 / trials as f64;
        assert!((0.27..0.33).contains(&rate), "quote rate was {}", rate);
        assert!(seen.iter().all(|s| *s), "every quote should appear");
    }

    #[test]
    fn test_keyword_blocks_independent_of_draws() {
        let enricher = ReplyEnricher::new();
        let mut source = StdRandomSource::seeded(1);
        for _ in 0..100 {
            let extras = enricher.select("I feel anxious and empty", &mut source);
            assert!(extras.contains(&Enrichment::BreathingExercise));
            assert!(extras.contains(&Enrichment::GratitudePrompt));
        }
    }
}
