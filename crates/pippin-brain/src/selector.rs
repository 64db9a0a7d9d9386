//! Response selection: first matching category wins, random idle thought
//! otherwise.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::lexicon::{Category, CATEGORIES, RANDOM_THOUGHTS};

/// Maps one input utterance to exactly one reply.
///
/// Built once at startup and immutable afterwards. Selection is
/// deterministic for keyword matches; only the fallback branch touches a
/// random generator.
#[derive(Debug, Clone)]
pub struct ResponseSelector {
    categories: &'static [Category],
    thoughts: &'static [&'static str],
}

impl Default for ResponseSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseSelector {
    /// Create a selector over the fixed category table and thought pool.
    pub fn new() -> Self {
        Self {
            categories: CATEGORIES,
            thoughts: RANDOM_THOUGHTS,
        }
    }

    /// Select the reply for `input`.
    ///
    /// Lowercases the input, walks the category table in priority order, and
    /// returns the reply of the first category with at least one trigger
    /// contained in the input. When nothing matches the result is one idle
    /// thought, drawn uniformly from the process RNG. Never fails and never
    /// panics, including on empty input.
    pub fn select(&self, input: &str) -> &'static str {
        self.select_with(input, &mut rand::thread_rng())
    }

    /// Same as [`select`](Self::select) with a caller-supplied generator, so
    /// the fallback branch can be driven deterministically in tests.
    pub fn select_with<R: Rng + ?Sized>(&self, input: &str, rng: &mut R) -> &'static str {
        let text = input.to_lowercase();

        for category in self.categories {
            if category.triggers.iter().any(|t| text.contains(t)) {
                return category.reply;
            }
        }

        self.thoughts
            .choose(rng)
            .copied()
            .expect("thought pool is not empty")
    }

    /// Name of the category that would win for `input`, or `None` when the
    /// fallback would fire. Lets callers log the decision without
    /// re-deriving it.
    pub fn matched_category(&self, input: &str) -> Option<&'static str> {
        let text = input.to_lowercase();
        self.categories
            .iter()
            .find(|c| c.triggers.iter().any(|t| text.contains(t)))
            .map(|c| c.name)
    }
}
