//! Rule profile selection
//!
//! Chooses which compiled-in rule catalog a deployment uses.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::rules::RuleSet;

/// Environment variable naming the rule profile.
pub const PROFILE_ENV: &str = "PWD_RULES_PROFILE";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Unknown rule profile: {0:?} (expected \"minimal\" or \"extended\")")]
    Unknown(String),
}

/// Named rule catalogs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RuleProfile {
    /// Length, digit and uppercase rules.
    Minimal,
    /// All ten rules.
    #[default]
    Extended,
}

impl RuleProfile {
    pub fn rule_set(self) -> RuleSet {
        match self {
            RuleProfile::Minimal => RuleSet::minimal(),
            RuleProfile::Extended => RuleSet::extended(),
        }
    }
}

impl FromStr for RuleProfile {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "minimal" => Ok(RuleProfile::Minimal),
            "extended" => Ok(RuleProfile::Extended),
            _ => Err(ProfileError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for RuleProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleProfile::Minimal => write!(f, "minimal"),
            RuleProfile::Extended => write!(f, "extended"),
        }
    }
}

/// Returns the configured rule profile.
///
/// Priority:
/// 1. Environment variable `PWD_RULES_PROFILE`
/// 2. Default profile `extended`
///
/// # Errors
///
/// Returns error if the variable is set to an unknown profile name.
pub fn get_profile() -> Result<RuleProfile, ProfileError> {
    match std::env::var(PROFILE_ENV) {
        Ok(value) => value.parse(),
        Err(_) => Ok(RuleProfile::default()),
    }
}

/// Builds the rule set for the configured profile.
///
/// # Example
///
/// ```rust,ignore
/// // Minimal rules via environment
/// unsafe { std::env::set_var("PWD_RULES_PROFILE", "minimal"); }
/// let rules = pwd_rules::init_rule_set()?;
/// assert_eq!(rules.len(), 3);
/// ```
pub fn init_rule_set() -> Result<RuleSet, ProfileError> {
    let profile = get_profile()?;
    let rules = profile.rule_set();

    #[cfg(feature = "tracing")]
    tracing::info!("Rule set initialized: {} rules from profile {}", rules.len(), profile);

    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    fn test_parse_profile() {
        assert_eq!("minimal".parse::<RuleProfile>(), Ok(RuleProfile::Minimal));
        assert_eq!(" Extended ".parse::<RuleProfile>(), Ok(RuleProfile::Extended));
        assert_eq!(
            "huge".parse::<RuleProfile>(),
            Err(ProfileError::Unknown("huge".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips() {
        for profile in [RuleProfile::Minimal, RuleProfile::Extended] {
            assert_eq!(profile.to_string().parse::<RuleProfile>(), Ok(profile));
        }
    }

    #[test]
    #[serial]
    fn test_get_profile_default() {
        remove_env(PROFILE_ENV);

        assert_eq!(get_profile(), Ok(RuleProfile::Extended));
    }

    #[test]
    #[serial]
    fn test_get_profile_from_env() {
        set_env(PROFILE_ENV, "minimal");

        assert_eq!(get_profile(), Ok(RuleProfile::Minimal));

        // Cleanup
        remove_env(PROFILE_ENV);
    }

    #[test]
    #[serial]
    fn test_init_rule_set_unknown_profile() {
        set_env(PROFILE_ENV, "nope");

        let result = init_rule_set();
        match result {
            Err(ProfileError::Unknown(name)) => assert_eq!(name, "nope"),
            _ => panic!("Expected Unknown profile error"),
        }

        remove_env(PROFILE_ENV);
    }

    #[test]
    #[serial]
    fn test_init_rule_set_sizes() {
        set_env(PROFILE_ENV, "minimal");
        assert_eq!(init_rule_set().map(|r| r.len()), Ok(3));

        set_env(PROFILE_ENV, "extended");
        assert_eq!(init_rule_set().map(|r| r.len()), Ok(10));

        remove_env(PROFILE_ENV);
    }
}
