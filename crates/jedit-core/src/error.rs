//! Error types for path parsing, value parsing, and resolution.

use thiserror::Error;

/// Errors that can occur while parsing path expressions, parsing value
/// literals, or resolving navigation targets.
#[derive(Error, Debug)]
pub enum JeditError {
    /// The path expression is malformed (empty key segment, non-integer
    /// bracket content, unterminated bracket, trailing `.`).
    #[error("path syntax error in `{expr}`: {message}")]
    PathSyntax { expr: String, message: String },

    /// The value literal was not valid JSON.
    #[error("value syntax error: {0}")]
    ValueSyntax(#[from] serde_json::Error),

    /// A navigation or read path matched nothing. Raised by callers that
    /// require an existing target, never by the mutation engine.
    #[error("path `{0}` has no match")]
    NoMatch(String),
}

impl JeditError {
    /// Shorthand for a [`JeditError::PathSyntax`] value.
    pub(crate) fn path_syntax(expr: &str, message: impl Into<String>) -> Self {
        JeditError::PathSyntax {
            expr: expr.to_string(),
            message: message.into(),
        }
    }
}

/// Convenience alias used throughout jedit-core.
pub type Result<T> = std::result::Result<T, JeditError>;
