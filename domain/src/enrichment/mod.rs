//! Reply enrichment
//!
//! Supportive content appended to a model reply: an occasional motivational
//! quote plus keyword-triggered exercises. Blocks are evaluated in a fixed
//! order and joined to the reply with a blank line. The base reply is never
//! altered.

mod random;

pub use random::{FixedRandom, RandomSource};

/// Chance of appending a quote to any reply.
pub const QUOTE_PROBABILITY: f64 = 0.3;

pub const MOTIVATIONAL_QUOTES: [&str; 5] = [
    "You are stronger than you think.",
    "This too shall pass.",
    "Be patient with yourself. Healing takes time.",
    "Your feelings are valid.",
    "Progress, not perfection.",
];

pub const BREATHING_EXERCISE: &str = "Let's try a short breathing exercise:
- Inhale slowly through your nose for 4 seconds.
- Hold your breath for 4 seconds.
- Exhale gently through your mouth for 4 seconds.
Repeat this for a minute. Let your mind settle.";

pub const GRATITUDE_PROMPT: &str = "Take a moment to reflect on something you're grateful for today.
It could be a small moment, a person, or even your own resilience.";

const BREATHING_TRIGGERS: [&str; 2] = ["anxious", "panic"];
const GRATITUDE_TRIGGERS: [&str; 2] = ["empty", "unmotivated"];

const BLOCK_SEPARATOR: &str = "\n\n";

/// A single block of supportive content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enrichment {
    Quote(&'static str),
    BreathingExercise,
    GratitudePrompt,
}

impl Enrichment {
    /// Text of the block as it appears in the reply.
    pub fn render(&self) -> String {
        match self {
            Enrichment::Quote(quote) => format!("💬 *Quote:* \"{}\"", quote),
            Enrichment::BreathingExercise => {
                format!("🧘 *Breathing Exercise:* {}", BREATHING_EXERCISE)
            }
            Enrichment::GratitudePrompt => format!("📓 *Gratitude Prompt:* {}", GRATITUDE_PROMPT),
        }
    }
}

/// Decides which blocks to append and renders the enriched reply.
#[derive(Debug, Clone, Copy)]
pub struct ReplyEnricher {
    quote_probability: f64,
}

impl Default for ReplyEnricher {
    fn default() -> Self {
        Self {
            quote_probability: QUOTE_PROBABILITY,
        }
    }
}

impl ReplyEnricher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks to append for `user_text`, in evaluation order.
    ///
    /// The quote index is only drawn when the probability gate passes.
    pub fn select(&self, user_text: &str, rng: &mut dyn RandomSource) -> Vec<Enrichment> {
        let mut extras = Vec::new();

        if rng.unit() < self.quote_probability {
            let quote = MOTIVATIONAL_QUOTES[rng.index(MOTIVATIONAL_QUOTES.len())];
            extras.push(Enrichment::Quote(quote));
        }

        let lowered = user_text.to_lowercase();
        if contains_any(&lowered, &BREATHING_TRIGGERS) {
            extras.push(Enrichment::BreathingExercise);
        }
        if contains_any(&lowered, &GRATITUDE_TRIGGERS) {
            extras.push(Enrichment::GratitudePrompt);
        }

        extras
    }

    /// `reply` followed by every selected block, separated by blank lines.
    pub fn enrich(&self, reply: &str, user_text: &str, rng: &mut dyn RandomSource) -> String {
        compose(reply, &self.select(user_text, rng))
    }
}

/// Join `reply` and the rendered `extras` with blank lines.
pub fn compose(reply: &str, extras: &[Enrichment]) -> String {
    if extras.is_empty() {
        return reply.to_string();
    }

    let mut blocks = Vec::with_capacity(extras.len() + 1);
    blocks.push(reply.to_string());
    blocks.extend(extras.iter().map(Enrichment::render));
    blocks.join(BLOCK_SEPARATOR)
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
