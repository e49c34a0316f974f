//! Parse failure kinds.
//!
//! A failure aborts only the declaration line it occurred on; batch
//! scanning records the failure and continues with the next line.

use thiserror::Error;

/// Why a declaration line or one of its argument lists failed to resolve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line or list text was empty.
    #[error("input is empty")]
    EmptyInput,

    /// The line does not match the `func <name>(<args>)<return>` grammar.
    #[error("line is not a function declaration")]
    MalformedDeclaration,

    /// An argument element was empty or had an empty name or type half.
    #[error("invalid argument {0:?}")]
    InvalidArgument(String),

    /// A return element had more than two space-separated tokens.
    #[error("invalid return arguments {0:?}")]
    InvalidArguments(String),

    /// An argument element had more than two space-separated tokens.
    #[error("too many tokens in argument {0:?}")]
    TooManyTokens(String),
}
