//! Structured signature model for introspected Go functions.
//!
//! These types are built once per declaration line by the parser and are
//! immutable afterwards. They carry no classification state; parameter
//! classes are derived on demand with [`super::classify`].

use serde::Serialize;

/// One parameter or one return value of a Go function.
///
/// For parameters the name is always present. For return values the name
/// is empty unless the declaration used named returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Arg {
    /// Argument name; empty only for unnamed return values.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Go type token (e.g., "float64", "[]byte").
    #[serde(rename = "type")]
    pub ty: String,
}

impl Arg {
    /// An argument with both name and type.
    pub fn named(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Arg {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// An unnamed return value carrying only a type.
    pub fn unnamed(ty: impl Into<String>) -> Self {
        Arg {
            name: String::new(),
            ty: ty.into(),
        }
    }
}

/// A parsed function declaration with its documentation line.
///
/// `args` preserves call-site order; `returns` preserves declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FunctionSignature {
    /// Function name as printed by `go doc`.
    pub name: String,
    /// Single-line description taken from the line following the declaration.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Parameters in call-site order.
    pub args: Vec<Arg>,
    /// Return values in declaration order.
    pub returns: Vec<Arg>,
}

/// One `name = value` entry from a `const (` … `)` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Constant {
    pub name: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_arg_has_both_parts() {
        let arg = Arg::named("x", "float64");
        assert_eq!(arg.name, "x");
        assert_eq!(arg.ty, "float64");
    }

    #[test]
    fn unnamed_arg_has_empty_name() {
        let arg = Arg::unnamed("[]string");
        assert!(arg.name.is_empty());
        assert_eq!(arg.ty, "[]string");
    }

    #[test]
    fn unnamed_return_serializes_without_name() {
        let arg = Arg::unnamed("error");
        let json = serde_json::to_string(&arg).unwrap();
        assert_eq!(json, r#"{"type":"error"}"#);
    }

    #[test]
    fn signature_serializes_with_renamed_type_field() {
        let sig = FunctionSignature {
            name: "Abs".to_string(),
            description: "Abs returns the absolute value of x.".to_string(),
            args: vec![Arg::named("x", "float64")],
            returns: vec![Arg::unnamed("float64")],
        };
        let json = serde_json::to_string(&sig).unwrap();
        assert!(json.contains(r#""type":"float64""#));
        assert!(!json.contains(r#""ty""#));
    }
}
