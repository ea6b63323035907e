use crate::rule::RuleError;
use crate::target::TargetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RewriteError {
    #[error(transparent)]
    Rule(#[from] RuleError),
    #[error(transparent)]
    Target(#[from] TargetError),
}

pub type RewriteResult<T> = Result<T, RewriteError>;
