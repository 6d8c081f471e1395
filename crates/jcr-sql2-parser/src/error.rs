use thiserror::Error as ThisError;

/// Errors reported while parsing a JCR-SQL2 query.
///
/// Syntax errors carry the offending token, its byte offset and the full
/// source text, so callers can render their own diagnostics. Errors are
/// fatal for the parse at hand; no resynchronization is attempted.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// A token did not match what the grammar expected at its position.
    #[error("syntax error at offset {index}: {message}, got `{found}`")]
    Syntax {
        /// What the grammar expected here.
        message: String,
        /// The offending token, or `EOF` when the input ended early.
        found: String,
        /// Byte offset of the offending token in the source.
        index: usize,
        /// The full source text the error occurred in.
        query: String,
    },

    /// The input parsed, but no `FROM` clause declared a source.
    #[error("invalid query, missing a FROM clause: `{query}`")]
    InvalidQuery {
        /// The full source text.
        query: String,
    },

    /// Constraint or operand nesting exceeded the configured limit.
    #[error("recursion limit of {limit} exceeded at offset {index}")]
    RecursionLimitExceeded {
        /// The configured limit.
        limit: usize,
        /// Byte offset at which the limit was hit.
        index: usize,
    },
}
