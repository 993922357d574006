//! History rule - a scientist followed by the work they are known for.

use super::{RuleResult, appears_in_order};

const DISCOVERIES: [(&str, &str); 4] = [
    ("einstein", "relativity"),
    ("newton", "gravity"),
    ("marie curie", "radioactivity"),
    ("tesla", "electricity"),
];

/// Checks for a scientist's name with their achievement somewhere after it.
pub fn has_historical_reference(password: &str) -> RuleResult {
    let lower = password.to_lowercase();
    Ok(DISCOVERIES
        .iter()
        .any(|(name, achievement)| appears_in_order(&lower, name, achievement)))
}
