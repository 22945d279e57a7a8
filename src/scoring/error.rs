use thiserror::Error;

/// Reasons a stroke cannot be scored.
///
/// None of these are fatal: trial capture turns them into an absent score.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    #[error("insufficient data: need at least 3 points, got {found}")]
    InsufficientData { found: usize },

    #[error("degenerate shape: all points coincide")]
    DegenerateShape,

    #[error("input contains non-finite coordinates")]
    NonFiniteInput,

    #[error("invalid scoring configuration: {0}")]
    InvalidConfig(String),
}
