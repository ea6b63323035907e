pub mod errors;
mod request;
mod rule;
mod target;

pub use errors::{RewriteError, RewriteResult};
pub use request::RequestUrl;
pub use rule::{Rule, RuleError};
pub use target::{Target, TargetError, parse_target};

use serde::{Deserialize, Serialize};

/// Header name a surrounding HTTP layer can use to record the pre-rewrite
/// request target. This crate never sets headers itself; the caller acts on
/// [`Rewritten::original_target`].
pub const ORIGINAL_TARGET_FIELD: &str = "x-rewrite-original-uri";

/// One configuration entry for a rewrite rule. Rule order in the
/// configuration is match priority.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleConfig {
    pub pattern: String,
    pub replacement: String,
}

/// Report of a rewrite performed by [`RuleSet::rewrite`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten {
    pub rule_index: usize,
    pub original_target: String,
}

/// An ordered, immutable set of rewrite rules evaluated first-match-wins.
///
/// Construction is all-or-nothing: one invalid pattern fails the whole set,
/// so a broken rewrite table is caught at startup rather than masked at
/// request time. A constructed set holds no mutable state and can be shared
/// across request tasks freely.
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build a rule set from an explicitly ordered sequence of
    /// (pattern, replacement) pairs.
    pub fn new<I, P, R>(pairs: I) -> RewriteResult<Self>
    where
        I: IntoIterator<Item = (P, R)>,
        P: AsRef<str>,
        R: AsRef<str>,
    {
        let mut rules = Vec::new();

        for (pattern, replacement) in pairs {
            rules.push(Rule::new(pattern.as_ref(), replacement.as_ref())?);
        }

        Ok(Self { rules })
    }

    pub fn from_config(entries: &[RuleConfig]) -> RewriteResult<Self> {
        Self::new(
            entries
                .iter()
                .map(|entry| (entry.pattern.as_str(), entry.replacement.as_str())),
        )
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rewrite the request URL in place. Returns whether a rule fired.
    pub fn apply(&self, url: &mut RequestUrl) -> bool {
        self.rewrite(url).is_some()
    }

    /// Rewrite the request URL in place, reporting which rule fired and the
    /// pre-rewrite target.
    ///
    /// Rules are tried in construction order against the serialized target
    /// (escaped path plus query); the first rule whose rewritten candidate
    /// parses wins. Only the path and raw path are written back. One call
    /// performs at most one rewrite; a miss leaves the URL untouched.
    #[tracing::instrument(level = "trace", skip(self, url), fields(rules = self.rules.len() as u64))]
    pub fn rewrite(&self, url: &mut RequestUrl) -> Option<Rewritten> {
        let original = url.target();

        for (rule_index, rule) in self.rules.iter().enumerate() {
            let (candidate, matched) = rule.attempt_rewrite(&original);
            if !matched {
                continue;
            }

            // the rule already validated the candidate; a failure here is
            // handled the same way as a non-match
            let Ok(parsed) = parse_target(&candidate) else {
                continue;
            };

            tracing::event!(
                tracing::Level::DEBUG,
                operation = "rewrite",
                pattern = %rule.pattern(),
                from = %original,
                to = %candidate.as_ref(),
                "rewrite rule matched"
            );

            url.set_path(parsed.path);
            url.set_raw_path(parsed.raw_path);

            return Some(Rewritten {
                rule_index,
                original_target: original,
            });
        }

        None
    }
}
