use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("pattern '{pattern}' is not a valid regular expression: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}

pub type RuleResult<T> = Result<T, RuleError>;
