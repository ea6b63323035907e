mod error;
mod template;

pub use error::{RuleError, RuleResult};
pub use template::{Template, TemplatePart};

use std::borrow::Cow;

use regex::Regex;

use crate::target::parse_target;

/// A compiled rewrite rule: a pattern matched against the full request
/// target (path plus query) and a replacement template.
///
/// Patterns are anchored to the whole target, so `/a` matches `/a` and
/// nothing else. Colon-prefixed tokens such as `:name` are ordinary literal
/// regex text, not named parameters.
#[derive(Debug)]
pub struct Rule {
    pattern: String,
    replacement: String,
    compiled: Regex,
    template: Template,
}

impl Rule {
    pub fn new(pattern: &str, replacement: &str) -> RuleResult<Self> {
        // the non-capturing wrapper anchors without renumbering groups
        let anchored = format!("^(?:{pattern})$");
        let compiled = Regex::new(&anchored).map_err(|source| RuleError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        let template = Template::compile(replacement, &compiled);

        Ok(Self {
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
            compiled,
            template,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Try to rewrite a serialized request target.
    ///
    /// Returns the rewritten target and `true` on a match whose expansion
    /// parses as a valid target. A candidate that fails to re-parse is
    /// treated as if the rule had not matched; it must never fail a live
    /// request.
    #[tracing::instrument(level = "trace", skip(self, original), fields(pattern = %self.pattern))]
    pub fn attempt_rewrite<'t>(&self, original: &'t str) -> (Cow<'t, str>, bool) {
        let Some(caps) = self.compiled.captures(original) else {
            return (Cow::Borrowed(original), false);
        };

        let candidate = self.template.expand(&caps);

        if let Err(error) = parse_target(&candidate) {
            tracing::event!(
                tracing::Level::DEBUG,
                operation = "attempt_rewrite",
                pattern = %self.pattern,
                candidate = %candidate,
                error = %error,
                "rewritten target does not parse; treating rule as unmatched"
            );
            return (Cow::Borrowed(original), false);
        }

        (Cow::Owned(candidate), true)
    }
}
