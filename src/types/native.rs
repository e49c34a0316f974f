//! Native-type allowlist and signature eligibility.

use log::warn;

use super::function::FunctionSignature;

/// Primitive Go types (and their slice forms) that the generated wrappers
/// can marshal without extra conversion code.
static NATIVE_TYPES: &[&str] = &[
    "int", "uint", "int8", "uint8", "int16", "uint16", "int32", "uint32", "int64", "uint64",
    "float", "float32", "float64", "string", "byte", "rune", "bool", "error", "[]int", "[]uint",
    "[]int8", "[]uint8", "[]int16", "[]uint16", "[]int32", "[]uint32", "[]int64", "[]uint64",
    "[]float", "[]float32", "[]float64", "[]string", "[]byte", "[]rune", "[]bool",
];

/// Check whether a Go type token is in the native allowlist.
pub fn is_native_type(token: &str) -> bool {
    NATIVE_TYPES.contains(&token)
}

/// Policy knobs for the eligibility check.
///
/// Return types observed in the wild are frequently non-native (`error` is
/// native, custom result structs are not) while the wrapper only needs to
/// marshal arguments, so return checking defaults to off.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterPolicy {
    /// Also require every return type to be native.
    pub check_returns: bool,
}

/// Check whether a signature accepts (and, under policy, returns) only
/// native types and is therefore eligible for plugin generation.
///
/// Signatures without arguments are never eligible: generation needs at
/// least one parameter to build a callable wrapper.
pub fn is_eligible(sig: &FunctionSignature, policy: FilterPolicy) -> bool {
    if sig.args.is_empty() {
        warn!("skipping {}: no arguments", sig.name);
        return false;
    }

    for arg in &sig.args {
        if !is_native_type(&arg.ty) {
            warn!("skipping {}: unsupported argument type {:?}", sig.name, arg.ty);
            return false;
        }
    }

    if policy.check_returns {
        for ret in &sig.returns {
            if !is_native_type(&ret.ty) {
                warn!("skipping {}: unsupported return type {:?}", sig.name, ret.ty);
                return false;
            }
        }
    }

    true
}
