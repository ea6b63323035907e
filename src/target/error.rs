use thiserror::Error;

#[derive(Debug, Error)]
pub enum TargetError {
    #[error("rewrite target is empty")]
    Empty,
    #[error("rewrite target '{input}' contains control byte {byte} at index {index}")]
    ControlByte {
        input: String,
        byte: u8,
        index: usize,
    },
    #[error("rewrite target path '{input}' has an invalid percent escape at index {index}")]
    InvalidPercentEncoding { input: String, index: usize },
    #[error("rewrite target path '{input}' does not decode to valid UTF-8")]
    InvalidUtf8AfterDecoding { input: String },
}

pub type TargetResult<T> = Result<T, TargetError>;
