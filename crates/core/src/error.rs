//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures (validation,
/// invariants, illegal transitions). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value object invariant was violated (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A product line failed construction or a rename.
    #[error("invalid product line: {0}")]
    InvalidProductLine(String),

    /// A requested status transition is not reachable from the current status.
    #[error("cannot change invoice status from '{current}' to '{attempted}'")]
    InvalidStatusTransition { current: String, attempted: String },

    /// The invoice failed the send-readiness predicate. The message carries
    /// the full list of violated line-level rules, not just the first.
    #[error("invoice cannot be sent: {0}")]
    CannotBeSent(String),

    /// A requested invoice was not found.
    #[error("invoice with id '{0}' not found")]
    NotFound(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_product_line(msg: impl Into<String>) -> Self {
        Self::InvalidProductLine(msg.into())
    }

    pub fn invalid_status_transition(
        current: impl ToString,
        attempted: impl ToString,
    ) -> Self {
        Self::InvalidStatusTransition {
            current: current.to_string(),
            attempted: attempted.to_string(),
        }
    }

    pub fn cannot_be_sent(msg: impl Into<String>) -> Self {
        Self::CannotBeSent(msg.into())
    }

    pub fn not_found(id: impl ToString) -> Self {
        Self::NotFound(id.to_string())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_transition_error_names_both_states() {
        let err = DomainError::invalid_status_transition("sending", "sending");
        assert_eq!(
            err.to_string(),
            "cannot change invoice status from 'sending' to 'sending'"
        );
    }

    #[test]
    fn not_found_error_carries_the_id() {
        let err = DomainError::not_found("abc-123");
        assert_eq!(err.to_string(), "invoice with id 'abc-123' not found");
    }
}
