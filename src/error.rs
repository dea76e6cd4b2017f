//! Error types.
//!
//! Only precondition violations are errors. A run that exhausts its
//! generation budget without reaching the goal is a normal
//! [`RunResult`](crate::ga::RunResult) with `success == false`.

use thiserror::Error;

/// Errors raised when a run is configured with invalid inputs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GaError {
    /// A run parameter violates its precondition.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The seed genome does not fit the configured genome shape.
    #[error("invalid seed genome: {reason}")]
    InvalidSeed { reason: String },

    /// A coloring palette too large for the `100 * conflicts + colors` cost encoding.
    #[error("palette size {palette} must be below {limit} for the combined coloring cost")]
    PaletteTooLarge { palette: usize, limit: usize },

    /// An edge list that does not describe a simple undirected graph.
    #[error("invalid graph: {0}")]
    InvalidGraph(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GaError::InvalidConfig("population_size must be at least 1".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: population_size must be at least 1"
        );

        let err = GaError::PaletteTooLarge {
            palette: 120,
            limit: 100,
        };
        assert!(err.to_string().contains("120"));
    }
}
