//! Error types for the solver core.

use thiserror::Error as ThisError;

/// Errors raised at graph construction and parameter-validation
/// boundaries.
///
/// Exhausting a search budget is not an error; it is reported through
/// [`TourStatus::BudgetExceeded`](crate::tour::TourStatus::BudgetExceeded).
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// Bad point count, non-finite coordinates, out-of-range indices,
    /// or a malformed cycle.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_input() {
        let err = Error::invalid_input("need at least 2 points, got 1");
        assert_eq!(err.to_string(), "invalid input: need at least 2 points, got 1");
    }
}
