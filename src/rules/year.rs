//! Year rule - whole-word years from 1900 through 2029.

use std::sync::LazyLock;

use regex::Regex;

use super::RuleResult;

// ASCII word boundaries: letters like "é" do not glue onto the year
const YEAR_PATTERN: &str = r"(?-u:\b)(?:19[0-9]{2}|20[0-2][0-9])(?-u:\b)";

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(YEAR_PATTERN).expect("valid regex"));

/// Checks for a standalone year token `19xx` or `2000`-`2029`.
pub fn has_year(password: &str) -> RuleResult {
    Ok(YEAR_RE.is_match(password))
}
