//! Equation rule - an arithmetic statement that actually holds.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{RuleError, RuleResult};

const EQUATION_PATTERN: &str = r"([0-9]+)\s*([+\-*/])\s*([0-9]+)\s*=\s*([0-9]+)";

static EQUATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EQUATION_PATTERN).expect("valid regex"));

/// Checks for a correct `<int> <op> <int> = <int>` statement.
///
/// Every candidate in the password is tried; one correct equation is enough.
/// Candidates may overlap: in "1+1=3+1=4" the second one is "3+1=4".
/// If no candidate holds and at least one could not be computed, the last
/// computation error is returned instead of `Ok(false)`.
pub fn has_valid_equation(password: &str) -> RuleResult {
    let mut last_error = None;
    let mut start = 0;

    while let Some(caps) = EQUATION_RE.captures_at(password, start) {
        match check_equation(&caps) {
            Ok(true) => return Ok(true),
            Ok(false) => {}
            Err(e) => last_error = Some(e),
        }
        // resume at the right operand, which always lies past the match start
        start = match caps.get(3) {
            Some(m) => m.start(),
            None => break,
        };
    }

    match last_error {
        Some(e) => Err(e),
        None => Ok(false),
    }
}

fn check_equation(caps: &Captures<'_>) -> RuleResult {
    let lhs: i64 = caps[1].parse()?;
    let rhs: i64 = caps[3].parse()?;
    let expected: i64 = caps[4].parse()?;
    let Some(op) = caps[2].chars().next() else {
        return Ok(false);
    };

    let overflow = || RuleError::Overflow { lhs, op, rhs };
    let actual = match op {
        '+' => lhs.checked_add(rhs).ok_or_else(overflow)?,
        '-' => lhs.checked_sub(rhs).ok_or_else(overflow)?,
        '*' => lhs.checked_mul(rhs).ok_or_else(overflow)?,
        '/' => {
            if rhs == 0 {
                return Err(RuleError::DivisionByZero);
            }
            // fractional quotients never equal an integer right-hand side
            if lhs % rhs != 0 {
                return Ok(false);
            }
            lhs / rhs
        }
        _ => return Ok(false),
    };

    Ok(actual == expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equation_correct() {
        assert_eq!(has_valid_equation("2+2=4"), Ok(true));
        assert_eq!(has_valid_equation("xx 3 * 4 = 12 yy"), Ok(true));
        assert_eq!(has_valid_equation("10-7=3"), Ok(true));
        assert_eq!(has_valid_equation("12/4=3"), Ok(true));
    }

    #[test]
    fn test_equation_wrong() {
        assert_eq!(has_valid_equation("2+2=5"), Ok(false));
        assert_eq!(has_valid_equation("3-5=2"), Ok(false));
    }

    #[test]
    fn test_equation_negative_result() {
        // the right side has no sign, so 3-5 can never match
        assert_eq!(has_valid_equation("3-5=-2"), Ok(false));
    }

    #[test]
    fn test_equation_division_by_zero() {
        assert_eq!(has_valid_equation("5/0=0"), Err(RuleError::DivisionByZero));
    }

    #[test]
    fn test_equation_inexact_division() {
        assert_eq!(has_valid_equation("7/2=3"), Ok(false));
        assert_eq!(has_valid_equation("7/2=4"), Ok(false));
    }

    #[test]
    fn test_equation_overflow() {
        let result = has_valid_equation("9999999999*9999999999=1");
        assert!(matches!(result, Err(RuleError::Overflow { op: '*', .. })));
    }

    #[test]
    fn test_equation_unparseable_integer() {
        let result = has_valid_equation("99999999999999999999+1=1");
        assert!(matches!(result, Err(RuleError::Parse(_))));
    }

    #[test]
    fn test_equation_any_candidate_counts() {
        assert_eq!(has_valid_equation("5/0=0 and 1+1=2"), Ok(true));
        assert_eq!(has_valid_equation("1+1=3, 2*3=6"), Ok(true));
    }

    #[test]
    fn test_equation_overlapping_candidates() {
        assert_eq!(has_valid_equation("1+1=3+1=4"), Ok(true));
        assert_eq!(has_valid_equation("9*9=1*5=5"), Ok(true));
        assert_eq!(has_valid_equation("1+1=3+1=5"), Ok(false));
    }

    #[test]
    fn test_equation_operand_is_not_split() {
        // "12+2=4" must not be read as "2+2=4"
        assert_eq!(has_valid_equation("12+2=4"), Ok(false));
    }

    #[test]
    fn test_equation_missing() {
        assert_eq!(has_valid_equation("no math here"), Ok(false));
        assert_eq!(has_valid_equation("2+2"), Ok(false));
        assert_eq!(has_valid_equation("2^2=4"), Ok(false));
    }
}
