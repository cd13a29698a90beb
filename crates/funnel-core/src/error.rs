use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FunnelError {
    /// Tokenizing the source text produced no words, so there is nothing to
    /// fill the pool with.
    #[error("source text contains no words")]
    EmptyText,
}

pub type Result<T> = std::result::Result<T, FunnelError>;
