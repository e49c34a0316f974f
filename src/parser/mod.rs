//! Parsing of `go doc` function-declaration lines.
//!
//! This module provides regex-based matching of one declaration line into
//! name, argument-list and return-list substrings, plus the resolvers that
//! turn those substrings into ordered `(name, type)` pairs, applying the
//! Go shorthand rules for grouped parameters and named returns.

mod declaration;
mod error;
mod split;

pub use declaration::{parse_declaration, resolve_arguments, resolve_returns};
pub use error::ParseError;
