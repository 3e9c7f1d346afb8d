#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MaskError {
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
}
