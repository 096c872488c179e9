//! Engine error type

use std::fmt;

use crate::game::MAX_ROUNDS;

/// Errors reported to the caller. All validation happens before any
/// simulation state is touched, so no partial result ever accompanies one
/// of these.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineError {
    /// Requested strategy name is not in the registry.
    UnknownStrategy(String),
    /// Round count is zero or exceeds MAX_ROUNDS.
    InvalidRounds(u32),
    /// Noise probability is outside [0, 1] or not a number.
    InvalidNoise(f64),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::UnknownStrategy(name) => write!(f, "unknown strategy: {}", name),
            EngineError::InvalidRounds(rounds) => {
                write!(f, "rounds must be in 1..={}, got {}", MAX_ROUNDS, rounds)
            }
            EngineError::InvalidNoise(noise) => {
                write!(f, "noise must be in [0, 1], got {}", noise)
            }
        }
    }
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            EngineError::UnknownStrategy("Nope".to_string()).to_string(),
            "unknown strategy: Nope"
        );
        assert_eq!(
            EngineError::InvalidRounds(0).to_string(),
            "rounds must be in 1..=10000, got 0"
        );
        assert_eq!(
            EngineError::InvalidNoise(1.5).to_string(),
            "noise must be in [0, 1], got 1.5"
        );
    }
}
