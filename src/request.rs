use crate::errors::RewriteResult;
use crate::target::parse_target;

/// The mutable URL view of an in-flight request.
///
/// `raw_path` keeps the escaped form byte-for-byte; `path` is its decoded
/// counterpart. The query string participates in matching through
/// [`RequestUrl::target`] but is never rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestUrl {
    path: String,
    raw_path: String,
    query: Option<String>,
}

impl RequestUrl {
    pub fn parse(target: &str) -> RewriteResult<Self> {
        let parsed = parse_target(target)?;

        Ok(Self {
            path: parsed.path,
            raw_path: parsed.raw_path,
            query: parsed.query,
        })
    }

    pub fn from_parts(
        path: impl Into<String>,
        raw_path: impl Into<String>,
        query: Option<String>,
    ) -> Self {
        Self {
            path: path.into(),
            raw_path: raw_path.into(),
            query,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn raw_path(&self) -> &str {
        &self.raw_path
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }

    pub fn set_raw_path(&mut self, raw_path: impl Into<String>) {
        self.raw_path = raw_path.into();
    }

    /// The serialization offered to rewrite rules: escaped path plus query.
    pub fn target(&self) -> String {
        match &self.query {
            Some(query) => format!("{}?{}", self.raw_path, query),
            None => self.raw_path.clone(),
        }
    }
}
