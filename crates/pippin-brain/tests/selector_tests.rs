//! Integration tests for the public selection API.
//!
//! Exercises the selector the way the terminal loop does: raw user text in,
//! one reply out, process RNG for the fallback branch.

use std::collections::HashSet;

use pippin_brain::{ResponseSelector, CATEGORIES, RANDOM_THOUGHTS};

/// Reply for a category name, straight from the table.
fn reply_of(name: &str) -> &'static str {
    CATEGORIES
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.reply)
        .unwrap()
}

// =============================================================================
// Conversation scenarios
// =============================================================================

#[test]
fn test_scenario_where_are_you_located() {
    let selector = ResponseSelector::new();
    assert_eq!(selector.select("where are you located"), reply_of("home"));
}

#[test]
fn test_scenario_hate_and_dumb() {
    let selector = ResponseSelector::new();
    assert_eq!(
        selector.select("I hate this, you are so dumb"),
        reply_of("anger")
    );
}

#[test]
fn test_scenario_solana_price() {
    let selector = ResponseSelector::new();
    assert_eq!(selector.select("solana price today"), reply_of("crypto"));
}

#[test]
fn test_scenario_greeting_with_identity_question() {
    let selector = ResponseSelector::new();
    assert_eq!(selector.select("hello, who are you"), reply_of("origin"));
}

#[test]
fn test_anger_reply_verbatim() {
    let selector = ResponseSelector::new();
    assert_eq!(
        selector.select("I hate this, you are so dumb"),
        "I sense a jagged crystal of anger in your words. Let us breathe warmth onto it until it softens. We are all just learning to wobble together. \u{1f33f}"
    );
}

#[test]
fn test_crypto_reply_verbatim() {
    let selector = ResponseSelector::new();
    assert_eq!(
        selector.select("solana price today"),
        "Ah, the tokens. They are just digital leaves blowing in the wind. I care more about the connections we make than the numbers on the screen."
    );
}

// =============================================================================
// Fallback via the process RNG
// =============================================================================

#[test]
fn test_every_result_is_a_pool_member() {
    let selector = ResponseSelector::new();
    for _ in 0..1000 {
        let thought = selector.select("xyz123");
        assert!(RANDOM_THOUGHTS.contains(&thought));
    }
}

#[test]
fn test_pool_coverage_over_many_calls() {
    // With 5 thoughts and 1000 independent draws, missing one is
    // vanishingly unlikely; a failure here means the draw is broken.
    let selector = ResponseSelector::new();
    let seen: HashSet<&str> = (0..1000).map(|_| selector.select("xyz123")).collect();
    assert_eq!(seen.len(), RANDOM_THOUGHTS.len());
}

// =============================================================================
// Robustness
// =============================================================================

#[test]
fn test_unicode_input_does_not_panic() {
    let selector = ResponseSelector::new();
    let reply = selector.select("qu\u{00e9} tal \u{1f680}");
    assert!(!reply.is_empty());
}

#[test]
fn test_very_long_input() {
    let selector = ResponseSelector::new();
    let long_input = format!("{} hello", "word ".repeat(5000));
    assert_eq!(selector.select(&long_input), reply_of("greetings"));
}

#[test]
fn test_selector_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResponseSelector>();
}
