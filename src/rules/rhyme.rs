//! Rhyme rule - two rhyming words, in order, anywhere in the password.

use super::{RuleResult, appears_in_order};

/// Rhyme pairs as `(first, second)`; the second word must come after the first.
const RHYME_PAIRS: [(&str, &str); 6] = [
    ("love", "dove"),
    ("above", "move"),
    ("heart", "smart"),
    ("art", "part"),
    ("light", "bright"),
    ("height", "might"),
];

/// Checks for one of the rhyme pairs with its second word appearing after
/// the first. Matching is case-insensitive and does not require word
/// boundaries or adjacency.
pub fn has_rhyme_pair(password: &str) -> RuleResult {
    let lower = password.to_lowercase();
    Ok(RHYME_PAIRS
        .iter()
        .any(|(first, second)| appears_in_order(&lower, first, second)))
}
