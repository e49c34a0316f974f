//! Declaration matcher and argument/return list resolvers.
//!
//! `go doc -all` prints one declaration per line in the form
//! `func Name(args) returns`. The matcher splits such a line into its
//! three substrings; the resolvers then expand the Go shorthand where
//! parameters listed together share a trailing type (`a, b, c float64`)
//! and where grouped named returns share one annotation
//! (`(one, two float64)`).

use std::sync::LazyLock;

use regex::Regex;

use super::error::ParseError;
use super::split::split_top_level;
use crate::types::{Arg, FunctionSignature};

/// Grammar for one declaration line. The argument capture is non-greedy to
/// the first `)`; everything after it is the return list.
static DECLARATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^func (?P<name>\S+)\((?P<args>.*?)\)(?P<return>.*)").unwrap()
});

/// Parse one declaration line into a [`FunctionSignature`].
///
/// Resolution is all-or-nothing: any failure in the argument or return
/// list aborts this line and no partial signature is produced. Callers
/// scanning a batch should log the error and continue with the next line.
///
/// The description field is left empty; pairing a declaration with its
/// documentation line is the scanner's concern.
pub fn parse_declaration(line: &str) -> Result<FunctionSignature, ParseError> {
    if line.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let caps = DECLARATION_PATTERN
        .captures(line)
        .ok_or(ParseError::MalformedDeclaration)?;

    let name = caps["name"].to_string();
    let args_text = caps.name("args").map(|m| m.as_str()).unwrap_or("");
    let return_text = caps
        .name("return")
        .map(|m| m.as_str().trim())
        .unwrap_or("");

    let args = if args_text.is_empty() {
        Vec::new()
    } else {
        resolve_arguments(args_text)?
    };

    let returns = if return_text.is_empty() {
        Vec::new()
    } else {
        resolve_returns(return_text)?
    };

    Ok(FunctionSignature {
        name,
        description: String::new(),
        args,
        returns,
    })
}

/// Resolve an argument list such as `a, b, c float64, s string`.
///
/// Elements with only a name inherit the first explicit type found in the
/// list. The shared type is resolved once per list, not per group.
pub fn resolve_arguments(text: &str) -> Result<Vec<Arg>, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut args = Vec::new();
    for element in split_top_level(text) {
        args.push(parse_argument(element)?);
    }

    // Elided-type propagation: the first element carrying an explicit type
    // establishes the shared type for every element still lacking one.
    if let Some(shared) = args.iter().find(|a| !a.ty.is_empty()).map(|a| a.ty.clone()) {
        for arg in &mut args {
            if arg.ty.is_empty() {
                arg.ty = shared.clone();
            }
        }
    }

    Ok(args)
}

/// Resolve a return list: empty, a single bare type, or a parenthesized
/// comma list.
///
/// One enclosing pair of parentheses is stripped textually; nested parens
/// are not balanced. When the list ends in a named return, preceding
/// single-token elements are grouped named returns sharing its type.
pub fn resolve_returns(text: &str) -> Result<Vec<Arg>, ParseError> {
    let mut text = text.trim();
    if let Some(inner) = text.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
        text = inner.trim();
    }
    if text.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut returns = Vec::new();
    for element in split_top_level(text) {
        returns.push(parse_return(element)?);
    }

    // Trailing-type backward propagation for grouped named returns, e.g.
    // `(one, two float64)`. A single-token element is captured as a bare
    // type; when the final element is named, those captures were really
    // names sharing the final element's type. A bare-typed final element
    // means every return stands on its own.
    if returns.len() > 1 {
        let last = &returns[returns.len() - 1];
        if !last.name.is_empty() {
            let last_ty = last.ty.clone();
            for ret in returns.iter_mut().rev().skip(1) {
                if ret.name.is_empty() && !ret.ty.is_empty() {
                    ret.name = std::mem::take(&mut ret.ty);
                    ret.ty = last_ty.clone();
                }
            }
        }
    }

    Ok(returns)
}

/// Parse one argument element into at most `name type`.
///
/// A single token is a bare name whose type must be resolved from the
/// rest of the list.
fn parse_argument(element: &str) -> Result<Arg, ParseError> {
    let element = element.trim();
    if element.is_empty() {
        return Err(ParseError::InvalidArgument(element.to_string()));
    }

    let parts: Vec<&str> = element.split(' ').collect();
    match parts.as_slice() {
        [name] => Ok(Arg {
            name: name.to_string(),
            ty: String::new(),
        }),
        [name, ty] => {
            if name.is_empty() || ty.is_empty() {
                return Err(ParseError::InvalidArgument(element.to_string()));
            }
            Ok(Arg::named(*name, *ty))
        }
        _ => Err(ParseError::TooManyTokens(element.to_string())),
    }
}

/// Parse one return element: a bare type, or `name type` for named returns.
fn parse_return(element: &str) -> Result<Arg, ParseError> {
    let element = element.trim();
    if element.is_empty() {
        return Err(ParseError::InvalidArgument(element.to_string()));
    }

    let parts: Vec<&str> = element.split(' ').collect();
    match parts.as_slice() {
        [ty] => Ok(Arg::unnamed(*ty)),
        [name, ty] => {
            if ty.is_empty() {
                return Err(ParseError::InvalidArgument(element.to_string()));
            }
            Ok(Arg::named(*name, *ty))
        }
        _ => Err(ParseError::InvalidArguments(element.to_string())),
    }
}
