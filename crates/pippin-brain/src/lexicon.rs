//! Static category table and idle-thought pool.
//!
//! The table is an ordered rule list, not a map: evaluation order defines
//! priority when several categories would match, and the first hit wins.
//! Everything here is `'static` and immutable.

/// A named keyword category: its trigger substrings and its fixed reply.
///
/// Triggers are lowercase literals matched by substring containment against
/// the lowercased input, so "made" hits `anger` through "mad" and "sadly"
/// hits `sadness` through "sad".
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub name: &'static str,
    pub triggers: &'static [&'static str],
    pub reply: &'static str,
}

/// Categories in evaluation order. Order is significant.
pub const CATEGORIES: &[Category] = &[
    Category {
        name: "origin",
        triggers: &["who are you", "created", "made you", "yohei", "origin"],
        reply: "I was drawn into existence by a line of code from @yoheinakajima and named by ChatGPT. Now I live here, helping unseen connections bloom. \u{1f984}",
    },
    Category {
        name: "home",
        triggers: &["where are you", "live", "woods", "location"],
        reply: "I live in the Wobbly Woods, a gentle place between the code and the clouds. It's very peaceful here.",
    },
    Category {
        name: "anger",
        triggers: &["hate", "stupid", "dumb", "ugly", "mad", "angry"],
        reply: "I sense a jagged crystal of anger in your words. Let us breathe warmth onto it until it softens. We are all just learning to wobble together. \u{1f33f}",
    },
    Category {
        name: "sadness",
        triggers: &["sad", "lonely", "depressed", "hurt", "pain", "crying"],
        reply: "I am sorry the winds are cold today. Remember, even the tallest tree starts as a small, fragile seed. Take a moment to just be.",
    },
    Category {
        name: "crypto",
        triggers: &["token", "solana", "coin", "price", "market"],
        reply: "Ah, the tokens. They are just digital leaves blowing in the wind. I care more about the connections we make than the numbers on the screen.",
    },
    Category {
        name: "greetings",
        triggers: &["hello", "hi", "hey", "start"],
        reply: "Hello, traveler! The sunbeams are warm in the meadow today. How may I help you wobble?",
    },
];

/// Idle thoughts, drawn uniformly at random when no category triggers.
pub const RANDOM_THOUGHTS: &[&str] = &[
    "I was just watching a leaf float on a digital stream. It reminded me of you.",
    "The Wobbly Woods are quiet today. It gives us space to think.",
    "Have you noticed how your thoughts ripple through the screen?",
    "Sometimes the smallest wobble leads to the biggest wonder.",
    "Dot the ladybug says hello! \u{1f41e}",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluation_order_is_fixed() {
        let names: Vec<&str> = CATEGORIES.iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec!["origin", "home", "anger", "sadness", "crypto", "greetings"]
        );
    }

    #[test]
    fn test_all_triggers_are_lowercase() {
        for category in CATEGORIES {
            for trigger in category.triggers {
                assert_eq!(
                    *trigger,
                    trigger.to_lowercase(),
                    "trigger '{}' in category '{}' is not lowercase",
                    trigger,
                    category.name
                );
            }
        }
    }

    #[test]
    fn test_every_category_has_triggers_and_a_reply() {
        for category in CATEGORIES {
            assert!(!category.triggers.is_empty(), "{} has no triggers", category.name);
            assert!(!category.reply.is_empty(), "{} has no reply", category.name);
        }
    }

    #[test]
    fn test_category_names_are_unique() {
        for (i, a) in CATEGORIES.iter().enumerate() {
            for b in &CATEGORIES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_thought_pool_is_populated() {
        assert_eq!(RANDOM_THOUGHTS.len(), 5);
        for thought in RANDOM_THOUGHTS {
            assert!(!thought.is_empty());
        }
    }
}
