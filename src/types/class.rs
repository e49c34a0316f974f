//! Generation-facing classification of Go type tokens.

use serde::Serialize;

use super::native::is_native_type;

/// The parameter class a Go type token maps to for plugin generation.
///
/// Derived on demand from `Arg.ty`; never stored on the model itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ParameterClass {
    /// Signed and unsigned integer types, widened to Int64 by the generator.
    Integer,
    /// Floating point types, widened to Float64 by the generator.
    Float,
    /// `string`.
    Text,
    /// Slices of primitives and `error`; generation treats these as untyped.
    Opaque,
    /// Anything else; the token is handed through for the caller to decide.
    PassThrough,
}

/// Classify a Go type token.
///
/// Unknown tokens are not errors — they classify as [`ParameterClass::PassThrough`]
/// so downstream generation can reject or special-case them.
pub fn classify(token: &str) -> ParameterClass {
    match token {
        "float" | "float32" | "float64" => ParameterClass::Float,
        "int" | "int8" | "int16" | "int32" | "int64" | "uint" | "uint8" | "uint16" | "uint32"
        | "uint64" => ParameterClass::Integer,
        "string" => ParameterClass::Text,
        "error" => ParameterClass::Opaque,
        other => {
            // Slices of allowlisted primitives are opaque; everything else
            // passes through unchanged.
            if other
                .strip_prefix("[]")
                .map(is_native_type)
                .unwrap_or(false)
            {
                ParameterClass::Opaque
            } else {
                ParameterClass::PassThrough
            }
        }
    }
}

/// Map a Go type token to the Bloblang parameter type name used by the
/// generated plugin registration, handing unknown tokens through unchanged.
pub fn bloblang_type(token: &str) -> String {
    match classify(token) {
        ParameterClass::Float => "Float64".to_string(),
        ParameterClass::Integer => "Int64".to_string(),
        ParameterClass::Text => "String".to_string(),
        ParameterClass::Opaque => "Any".to_string(),
        ParameterClass::PassThrough => token.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_floats() {
        assert_eq!(classify("float"), ParameterClass::Float);
        assert_eq!(classify("float32"), ParameterClass::Float);
        assert_eq!(classify("float64"), ParameterClass::Float);
    }

    #[test]
    fn classifies_integers() {
        assert_eq!(classify("int"), ParameterClass::Integer);
        assert_eq!(classify("int8"), ParameterClass::Integer);
        assert_eq!(classify("uint64"), ParameterClass::Integer);
        assert_eq!(classify("uint"), ParameterClass::Integer);
    }

    #[test]
    fn classifies_text() {
        assert_eq!(classify("string"), ParameterClass::Text);
    }

    #[test]
    fn classifies_opaque() {
        assert_eq!(classify("[]byte"), ParameterClass::Opaque);
        assert_eq!(classify("[]string"), ParameterClass::Opaque);
        assert_eq!(classify("[]float64"), ParameterClass::Opaque);
        assert_eq!(classify("[]int32"), ParameterClass::Opaque);
        assert_eq!(classify("error"), ParameterClass::Opaque);
    }

    #[test]
    fn unknown_tokens_pass_through() {
        assert_eq!(classify("chan int"), ParameterClass::PassThrough);
        assert_eq!(classify("*os.File"), ParameterClass::PassThrough);
        assert_eq!(classify("map[string]int"), ParameterClass::PassThrough);
        assert_eq!(classify(""), ParameterClass::PassThrough);
    }

    #[test]
    fn bloblang_names() {
        assert_eq!(bloblang_type("float32"), "Float64");
        assert_eq!(bloblang_type("uint16"), "Int64");
        assert_eq!(bloblang_type("string"), "String");
        assert_eq!(bloblang_type("[]byte"), "Any");
        assert_eq!(bloblang_type("chan int"), "chan int");
    }
}
