mod error;
mod parse;

pub use error::{TargetError, TargetResult};
pub use parse::parse_target;

/// A parsed request target: the decoded path, the escaped form it arrived
/// in, and the untouched query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub path: String,
    pub raw_path: String,
    pub query: Option<String>,
}
