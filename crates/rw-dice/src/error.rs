//! Error types for dice and pools.

/// Errors that can occur when building dice or pools.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// A die or pool was configured outside its valid domain.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
