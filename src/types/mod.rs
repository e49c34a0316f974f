//! Signature model and type classification for Go function declarations.
//!
//! This module provides:
//! - `Arg`, `FunctionSignature` and `Constant`, the structured model built
//!   from `go doc` declaration lines
//! - `ParameterClass` and `classify` to map Go type tokens to the
//!   generation-facing parameter classes
//! - the native-type allowlist used to decide which signatures are
//!   eligible for plugin generation

mod class;
mod function;
mod native;

pub use class::{bloblang_type, classify, ParameterClass};
pub use function::{Arg, Constant, FunctionSignature};
pub use native::{is_eligible, is_native_type, FilterPolicy};
