use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescribeError {
    #[error("no leading number in amount \"{0}\"")]
    NotNumeric(String),

    #[error("invalid price \"{input}\": {reason}")]
    InvalidPrice { input: String, reason: String },
}
