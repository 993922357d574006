//! Basic composition rules - length and character classes.

use super::RuleResult;

const MIN_LENGTH: usize = 5;
const SPECIAL_CHARS: &str = "!@#$%^&*()";

/// Checks that the password has at least 5 characters.
pub fn min_length(password: &str) -> RuleResult {
    Ok(password.chars().count() >= MIN_LENGTH)
}

/// Checks for at least one ASCII digit.
pub fn has_digit(password: &str) -> RuleResult {
    Ok(password.chars().any(|c| c.is_ascii_digit()))
}

/// Checks for at least one ASCII uppercase letter.
pub fn has_uppercase(password: &str) -> RuleResult {
    Ok(password.chars().any(|c| c.is_ascii_uppercase()))
}

/// Checks for at least one of `!@#$%^&*()`.
pub fn has_special_char(password: &str) -> RuleResult {
    Ok(password.chars().any(|c| SPECIAL_CHARS.contains(c)))
}
