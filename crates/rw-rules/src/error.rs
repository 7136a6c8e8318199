//! Error types for the rules engine.

use rw_dice::DiceError;

/// Errors that can occur while parsing or resolving a roll request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    /// A user-supplied parameter could not be parsed or is out of range.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The system tag does not name a known rule system.
    #[error("unknown rule system: {0}")]
    UnknownSystem(String),

    /// The dice pool for the request could not be built.
    #[error(transparent)]
    Dice(#[from] DiceError),
}

/// Convenience result type for rules operations.
pub type RulesResult<T> = Result<T, RulesError>;
