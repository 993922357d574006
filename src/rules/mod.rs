//! Password rules
//!
//! Each rule is a pure predicate over the candidate password. Rules are kept
//! as plain data (`id`, description, validator fn) in an ordered [`RuleSet`].

mod basic;
mod equation;
mod history;
mod pattern;
mod rhyme;
mod year;

use std::borrow::Cow;
use std::fmt;
use std::num::ParseIntError;
use thiserror::Error;

pub use basic::{has_digit, has_special_char, has_uppercase, min_length};
pub use equation::has_valid_equation;
pub use history::has_historical_reference;
pub use pattern::{has_palindrome_word, no_repeated_run};
pub use rhyme::has_rhyme_pair;
pub use year::has_year;

/// Rule identifier. Ids start at 1 and define the reveal order.
pub type RuleId = u32;

/// Result type for validator functions.
/// - `Ok(true)` - Rule satisfied
/// - `Ok(false)` - Rule not satisfied
/// - `Err(_)` - The validator could not reach a definitive answer
pub type RuleResult = Result<bool, RuleError>;

/// Validator signature shared by every rule.
pub type Validator = fn(&str) -> RuleResult;

/// Internal validator failures. Never surfaced past [`RuleSet::evaluate`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("Failed to parse integer: {0}")]
    Parse(#[from] ParseIntError),
    #[error("Integer overflow evaluating {lhs} {op} {rhs}")]
    Overflow { lhs: i64, op: char, rhs: i64 },
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Unknown rule id: {0}")]
    UnknownRule(RuleId),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleSetError {
    #[error("Rule set is empty")]
    Empty,
    #[error("Rule ids must be dense from 1: expected {expected}, found {found}")]
    Gap { expected: RuleId, found: RuleId },
    #[error("Duplicate rule id: {0}")]
    Duplicate(RuleId),
}

/// A single rule: stable id, text shown to the user, and its predicate.
#[derive(Clone)]
pub struct Rule {
    id: RuleId,
    description: Cow<'static, str>,
    validator: Validator,
}

impl Rule {
    pub fn new(id: RuleId, description: impl Into<Cow<'static, str>>, validator: Validator) -> Self {
        Self {
            id,
            description: description.into(),
            validator,
        }
    }

    const fn fixed(id: RuleId, description: &'static str, validator: Validator) -> Self {
        Self {
            id,
            description: Cow::Borrowed(description),
            validator,
        }
    }

    pub fn id(&self) -> RuleId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Runs the validator without absorbing errors.
    pub fn check(&self, input: &str) -> RuleResult {
        (self.validator)(input)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

const EXTENDED_RULES: [Rule; 10] = [
    Rule::fixed(1, "Your password must be at least 5 characters.", min_length),
    Rule::fixed(2, "Your password must include a number.", has_digit),
    Rule::fixed(3, "Your password must include an uppercase letter.", has_uppercase),
    Rule::fixed(
        4,
        "Your password must include a special character: !@#$%^&*()",
        has_special_char,
    ),
    Rule::fixed(
        5,
        "Your password must not repeat the same character 3 times in a row.",
        no_repeated_run,
    ),
    Rule::fixed(
        6,
        "Your password must include a palindrome word of at least 3 letters.",
        has_palindrome_word,
    ),
    Rule::fixed(
        7,
        "Your password must include a year between 1900 and 2029.",
        has_year,
    ),
    Rule::fixed(
        8,
        "Your password must include two words that rhyme.",
        has_rhyme_pair,
    ),
    Rule::fixed(
        9,
        "Your password must include a correct equation, like 3*4=12.",
        has_valid_equation,
    ),
    Rule::fixed(
        10,
        "Your password must name a famous scientist followed by their discovery.",
        has_historical_reference,
    ),
];

const MINIMAL_RULE_COUNT: usize = 3;

/// Ordered, immutable collection of rules with dense ids starting at 1.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Builds a rule set from caller-supplied rules.
    ///
    /// Rules may be given in any order; they are sorted by id.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The list is empty
    /// - Two rules share an id
    /// - The ids do not form the sequence `1..=N`
    pub fn new(mut rules: Vec<Rule>) -> Result<Self, RuleSetError> {
        if rules.is_empty() {
            return Err(RuleSetError::Empty);
        }
        rules.sort_by_key(Rule::id);

        for (i, rule) in rules.iter().enumerate() {
            if i > 0 && rules[i - 1].id == rule.id {
                return Err(RuleSetError::Duplicate(rule.id));
            }
            let expected = i as RuleId + 1;
            if rule.id != expected {
                return Err(RuleSetError::Gap {
                    expected,
                    found: rule.id,
                });
            }
        }

        Ok(Self { rules })
    }

    /// The full 10-rule catalog.
    pub fn extended() -> Self {
        Self {
            rules: EXTENDED_RULES.to_vec(),
        }
    }

    /// Length, digit and uppercase rules only.
    pub fn minimal() -> Self {
        Self {
            rules: EXTENDED_RULES[..MINIMAL_RULE_COUNT].to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Highest rule id, which equals the number of rules.
    pub fn last_id(&self) -> RuleId {
        self.rules.len() as RuleId
    }

    pub fn get(&self, id: RuleId) -> Option<&Rule> {
        // ids are dense from 1, so the id doubles as an index
        let index = (id as usize).checked_sub(1)?;
        self.rules.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Evaluates rule `id` against `input`.
    ///
    /// Unknown ids and validator failures both count as "not satisfied".
    pub fn evaluate(&self, id: RuleId, input: &str) -> bool {
        let result = match self.get(id) {
            Some(rule) => rule.check(input),
            None => Err(RuleError::UnknownRule(id)),
        };

        match result {
            Ok(valid) => valid,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("Rule {} could not be evaluated: {}", id, _e);
                false
            }
        }
    }
}

/// Returns `true` if `second` occurs somewhere after the first occurrence of
/// `first` in `haystack`. Both needles must already be lowercase.
pub(crate) fn appears_in_order(haystack: &str, first: &str, second: &str) -> bool {
    haystack
        .find(first)
        .map(|pos| haystack[pos + first.len()..].contains(second))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn always_true(_: &str) -> RuleResult {
        Ok(true)
    }

    fn always_err(_: &str) -> RuleResult {
        Err(RuleError::DivisionByZero)
    }

    #[test]
    fn test_extended_catalog_is_dense() {
        let rules = RuleSet::extended();
        assert_eq!(rules.len(), 10);
        for (i, rule) in rules.iter().enumerate() {
            assert_eq!(rule.id(), i as RuleId + 1);
            assert!(!rule.description().is_empty());
        }
        assert!(RuleSet::new(EXTENDED_RULES.to_vec()).is_ok());
    }

    #[test]
    fn test_minimal_catalog() {
        let rules = RuleSet::minimal();
        assert_eq!(rules.len(), 3);
        assert_eq!(rules.last_id(), 3);
        assert!(rules.evaluate(3, "Abcde1"));
        assert!(!rules.evaluate(4, "Abcde1!"));
    }

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(RuleSet::new(Vec::new()).unwrap_err(), RuleSetError::Empty);
    }

    #[test]
    fn test_new_rejects_gap() {
        let result = RuleSet::new(vec![
            Rule::new(1, "one", always_true),
            Rule::new(3, "three", always_true),
        ]);
        assert_eq!(
            result.unwrap_err(),
            RuleSetError::Gap {
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn test_new_rejects_duplicate() {
        let result = RuleSet::new(vec![
            Rule::new(1, "one", always_true),
            Rule::new(1, "uno", always_true),
        ]);
        assert_eq!(result.unwrap_err(), RuleSetError::Duplicate(1));
    }

    #[test]
    fn test_new_sorts_by_id() {
        let rules = RuleSet::new(vec![
            Rule::new(2, "two".to_string(), always_true),
            Rule::new(1, "one", always_true),
        ])
        .expect("dense ids");
        let ids: Vec<_> = rules.iter().map(Rule::id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_evaluate_absorbs_errors() {
        let rules = RuleSet::new(vec![Rule::new(1, "broken", always_err)]).expect("dense ids");
        assert_eq!(rules.get(1).unwrap().check("x"), Err(RuleError::DivisionByZero));
        assert!(!rules.evaluate(1, "x"));
    }

    #[test]
    fn test_evaluate_unknown_id() {
        let rules = RuleSet::extended();
        assert!(!rules.evaluate(0, "anything"));
        assert!(!rules.evaluate(11, "anything"));
    }

    #[test]
    fn test_appears_in_order() {
        assert!(appears_in_order("newton and gravity", "newton", "gravity"));
        assert!(!appears_in_order("gravity and newton", "newton", "gravity"));
        assert!(!appears_in_order("heart", "heart", "art"));
    }
}
