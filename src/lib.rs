//! Progressive password rules
//!
//! This library evaluates a candidate password against an ordered list of
//! rules and reveals the rules one at a time: the next rule becomes visible
//! only once the most recently revealed one is satisfied.
//!
//! # Features
//!
//! - `async` (default): Enables debounced, cancellable session updates
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_RULES_PROFILE`: Rule catalog to use, `minimal` or `extended`
//!   (default: `extended`)
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use pwd_rules::{init_rule_set, RevealSession};
//! use secrecy::SecretString;
//!
//! // Load the configured rule set (call once at startup)
//! let rules = Arc::new(init_rule_set().expect("Invalid rule profile"));
//!
//! // One session per form instance
//! let mut session = RevealSession::new(rules);
//! let snapshot = session.on_input(SecretString::new("abcde".to_string().into()));
//!
//! for status in &snapshot.failing {
//!     println!("✗ {}. {}", status.id, status.description);
//! }
//! for status in &snapshot.passing {
//!     println!("✓ {}. {}", status.id, status.description);
//! }
//! ```

// Internal modules
mod engine;
mod profile;
mod rules;

// Public API
pub use engine::{
    Partition, RevealSession, RevealSnapshot, RuleStatus, VisibleRules, partition, update,
};
pub use profile::{PROFILE_ENV, ProfileError, RuleProfile, get_profile, init_rule_set};
pub use rules::{
    Rule, RuleError, RuleId, RuleResult, RuleSet, RuleSetError, Validator, has_digit,
    has_historical_reference, has_palindrome_word, has_rhyme_pair, has_special_char,
    has_uppercase, has_valid_equation, has_year, min_length, no_repeated_run,
};

#[cfg(feature = "async")]
pub use engine::{DEBOUNCE, update_session_tx};
