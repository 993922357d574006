//! Pattern rules - repeated characters and palindromes.

use super::RuleResult;

const MAX_RUN: usize = 3;
const MIN_PALINDROME_LEN: usize = 3;

/// Rejects passwords with 3 or more identical consecutive characters.
///
/// Comparison is case-sensitive: "aAa" is fine, "aaa" is not.
pub fn no_repeated_run(password: &str) -> RuleResult {
    let chars: Vec<char> = password.chars().collect();

    let mut repeated_count = 1;
    for i in 1..chars.len() {
        if chars[i] == chars[i - 1] {
            repeated_count += 1;
            if repeated_count >= MAX_RUN {
                return Ok(false);
            }
        } else {
            repeated_count = 1;
        }
    }

    Ok(true)
}

/// Looks for a whitespace-delimited word that reads the same both ways.
///
/// Each word is lowercased and stripped of everything but ASCII letters
/// before the check, so "Level!" counts and "levels" does not.
pub fn has_palindrome_word(password: &str) -> RuleResult {
    Ok(password.split_whitespace().any(|word| {
        let cleaned: Vec<char> = word
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase())
            .collect();
        cleaned.len() >= MIN_PALINDROME_LEN && cleaned.iter().eq(cleaned.iter().rev())
    }))
}
