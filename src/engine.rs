//! Reveal engine - decides which rules are visible and how they currently fare.

use std::collections::BTreeSet;
use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::rules::{RuleId, RuleSet};

/// How long an edit waits before it is applied, so a burst of keystrokes
/// only produces one update.
#[cfg(feature = "async")]
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Ordered set of rule ids currently shown to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleRules(BTreeSet<RuleId>);

impl VisibleRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, id: RuleId) -> bool {
        self.0.contains(&id)
    }

    /// Most recently revealed rule.
    pub fn last(&self) -> Option<RuleId> {
        self.0.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = RuleId> + '_ {
        self.0.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<RuleId> {
        self.iter().collect()
    }
}

impl FromIterator<RuleId> for VisibleRules {
    fn from_iter<I: IntoIterator<Item = RuleId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Computes the visible rules after an input change.
///
/// - Empty input clears everything.
/// - The first non-empty input always reveals rule 1, pass or fail.
/// - Afterwards the next rule is revealed only when the most recently
///   revealed one passes. At most one rule is added per call, even if later
///   rules would already be satisfied.
pub fn update(rules: &RuleSet, input: &str, previous: &VisibleRules) -> VisibleRules {
    if input.is_empty() {
        return VisibleRules::new();
    }

    let Some(last) = previous.last() else {
        return VisibleRules::from_iter([1]);
    };

    let mut visible = previous.clone();
    let next = last.saturating_add(1);
    if next <= rules.last_id() && !visible.contains(next) && rules.evaluate(last, input) {
        visible.0.insert(next);

        #[cfg(feature = "tracing")]
        tracing::debug!("Rule {} satisfied, revealing rule {}", last, next);
    }

    visible
}

/// Live state of one visible rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleStatus {
    pub id: RuleId,
    pub description: String,
    pub is_valid: bool,
}

/// Visible rules split by outcome, each group in ascending id order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub failing: Vec<RuleStatus>,
    pub passing: Vec<RuleStatus>,
}

impl Partition {
    /// Failing rules first, then passing ones.
    pub fn errors_first(&self) -> impl Iterator<Item = &RuleStatus> {
        self.failing.iter().chain(self.passing.iter())
    }

    /// All visible rules in reveal order regardless of outcome.
    pub fn in_id_order(&self) -> Vec<&RuleStatus> {
        let mut all: Vec<_> = self.errors_first().collect();
        all.sort_by_key(|status| status.id);
        all
    }

    pub fn visible_ids(&self) -> Vec<RuleId> {
        self.in_id_order().iter().map(|status| status.id).collect()
    }
}

/// Evaluates every visible rule against `input`.
///
/// Ids with no matching rule are skipped.
pub fn partition(rules: &RuleSet, visible: &VisibleRules, input: &str) -> Partition {
    let mut result = Partition::default();

    for id in visible.iter() {
        let Some(rule) = rules.get(id) else {
            continue;
        };
        let is_valid = rules.evaluate(id, input);
        let status = RuleStatus {
            id,
            description: rule.description().to_string(),
            is_valid,
        };
        if is_valid {
            result.passing.push(status);
        } else {
            result.failing.push(status);
        }
    }

    result
}

/// Everything the UI needs to render after one update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealSnapshot {
    pub visible: VisibleRules,
    pub failing: Vec<RuleStatus>,
    pub passing: Vec<RuleStatus>,
    rule_count: usize,
}

impl RevealSnapshot {
    /// Every rule of the set is revealed and none is failing.
    pub fn is_complete(&self) -> bool {
        self.visible.len() == self.rule_count && self.failing.is_empty()
    }

    pub fn partition(&self) -> Partition {
        Partition {
            failing: self.failing.clone(),
            passing: self.passing.clone(),
        }
    }
}

/// Reveal state for one form instance.
///
/// The current input is held as a [`SecretString`] so it stays out of
/// `Debug` output.
#[derive(Debug)]
pub struct RevealSession {
    rules: Arc<RuleSet>,
    visible: VisibleRules,
    input: SecretString,
}

impl RevealSession {
    pub fn new(rules: Arc<RuleSet>) -> Self {
        Self {
            rules,
            visible: VisibleRules::new(),
            input: empty_secret(),
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn visible(&self) -> &VisibleRules {
        &self.visible
    }

    /// Applies a new input value and returns the resulting snapshot.
    pub fn on_input(&mut self, input: SecretString) -> RevealSnapshot {
        self.visible = update(&self.rules, input.expose_secret(), &self.visible);
        self.input = input;

        #[cfg(feature = "tracing")]
        {
            if self.visible.is_empty() {
                tracing::debug!("Input cleared, reveal state reset");
            }
        }

        self.snapshot()
    }

    /// Recomputes the snapshot for the current input without changing
    /// visibility.
    pub fn snapshot(&self) -> RevealSnapshot {
        let Partition { failing, passing } =
            partition(&self.rules, &self.visible, self.input.expose_secret());
        RevealSnapshot {
            visible: self.visible.clone(),
            failing,
            passing,
            rule_count: self.rules.len(),
        }
    }

    pub fn reset(&mut self) {
        self.visible = VisibleRules::new();
        self.input = empty_secret();
    }
}

fn empty_secret() -> SecretString {
    SecretString::new(String::new().into())
}

/// Async version that debounces the edit and sends the snapshot via channel.
///
/// If `token` is cancelled during the debounce (a newer edit arrived), the
/// session is left untouched and nothing is sent.
#[cfg(feature = "async")]
pub async fn update_session_tx(
    session: &mut RevealSession,
    input: SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<RevealSnapshot>,
) {
    tokio::time::sleep(DEBOUNCE).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("Update superseded before debounce elapsed");
        return;
    }

    let snapshot = session.on_input(input);

    if let Err(_e) = tx.send(snapshot).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send reveal snapshot: {}", _e);
    }
}
