//! Line scanner for `go doc -all` output.

use std::sync::LazyLock;

use log::{debug, warn};
use regex::Regex;

use crate::parser::parse_declaration;
use crate::types::{Constant, FunctionSignature};

/// Matches one `name = value` entry inside a `const (` … `)` block.
static CONSTANT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+(?P<name>\S+)\s+=\s+(?P<value>.*)").unwrap());

/// Everything one scan pass produced.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Parsed signatures in input order, descriptions attached.
    pub functions: Vec<FunctionSignature>,
    /// `(name, value)` pairs from constant blocks, in input order.
    pub constants: Vec<Constant>,
    /// Declaration lines that failed to resolve and were skipped.
    pub skipped: usize,
}

/// Scan documentation text for function declarations and constant blocks.
///
/// Lines starting with `func ` are parsed as declarations; a failed line is
/// logged and skipped without aborting the batch. The line immediately
/// following a declaration is its single-line description — `go doc` prints
/// the indented doc comment there. Multi-line descriptions are not
/// supported; only the first line is kept.
pub fn scan_doc(text: &str) -> ScanResult {
    let lines: Vec<&str> = text.lines().collect();
    let mut result = ScanResult::default();
    let mut pos = 0;

    while pos < lines.len() {
        let line = lines[pos];

        if line.starts_with("func ") {
            match parse_declaration(line) {
                Ok(mut sig) => {
                    sig.description = description_for(&lines, pos);
                    debug!("added function {}: {}", sig.name, sig.description);
                    result.functions.push(sig);
                }
                Err(err) => {
                    warn!("skipping declaration at line {}: {}", pos + 1, err);
                    result.skipped += 1;
                }
            }
            // The declaration and its description line are consumed together.
            pos += 2;
        } else if line.starts_with("const (") {
            pos = scan_const_block(&lines, pos + 1, &mut result.constants);
        } else {
            pos += 1;
        }
    }

    result
}

/// Positional description pairing: line `i` declares, line `i + 1` describes.
///
/// Kept behind this function so a smarter pairing (multi-line doc comments)
/// only has to change the scanner.
fn description_for(lines: &[&str], decl_pos: usize) -> String {
    lines
        .get(decl_pos + 1)
        .map(|l| l.trim())
        .unwrap_or_default()
        .to_string()
}

/// Collect `name = value` entries until the closing `)` line, returning the
/// position after the block. Trailing `//` comments are stripped first;
/// a `//` inside a value string will truncate it.
fn scan_const_block(lines: &[&str], mut pos: usize, constants: &mut Vec<Constant>) -> usize {
    while pos < lines.len() {
        let line = lines[pos];
        if line.starts_with(')') {
            return pos + 1;
        }

        let code = line.split("//").next().unwrap_or(line);
        if let Some(caps) = CONSTANT_PATTERN.captures(code) {
            constants.push(Constant {
                name: caps["name"].to_string(),
                value: caps["value"].trim_end().to_string(),
            });
        }
        pos += 1;
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Arg;

    #[test]
    fn pairs_declaration_with_description() {
        let doc = "func Abs(x float64) float64\n    Abs returns the absolute value of x.\n";
        let result = scan_doc(doc);
        assert_eq!(result.functions.len(), 1);
        assert_eq!(result.functions[0].name, "Abs");
        assert_eq!(
            result.functions[0].description,
            "Abs returns the absolute value of x."
        );
    }

    #[test]
    fn scans_multiple_declarations_in_order() {
        let doc = "\
func Abs(x float64) float64
    Abs returns the absolute value of x.

func Max(x, y float64) float64
    Max returns the larger of x or y.
";
        let result = scan_doc(doc);
        let names: Vec<_> = result.functions.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Abs", "Max"]);
        assert_eq!(
            result.functions[1].args,
            vec![Arg::named("x", "float64"), Arg::named("y", "float64")]
        );
    }

    #[test]
    fn failed_declaration_is_skipped_not_fatal() {
        let doc = "\
func Bad(a b c) int
    This one cannot be resolved.

func Good(x int) int
    This one can.
";
        let result = scan_doc(doc);
        assert_eq!(result.skipped, 1);
        assert_eq!(result.functions.len(), 1);
        assert_eq!(result.functions[0].name, "Good");
    }

    #[test]
    fn declaration_without_following_line_gets_empty_description() {
        let result = scan_doc("func Last(x int) int");
        assert_eq!(result.functions.len(), 1);
        assert!(result.functions[0].description.is_empty());
    }

    #[test]
    fn method_declarations_are_skipped() {
        let doc = "func (m *Matrix) Det() float64\n    Det computes the determinant.\n";
        let result = scan_doc(doc);
        assert!(result.functions.is_empty());
        assert_eq!(result.skipped, 1);
    }

    #[test]
    fn collects_constant_block() {
        let doc = "\
const (
    MaxInt8  = 1<<7 - 1
    MinInt8  = -1 << 7
)
";
        let result = scan_doc(doc);
        assert_eq!(
            result.constants,
            vec![
                Constant {
                    name: "MaxInt8".to_string(),
                    value: "1<<7 - 1".to_string()
                },
                Constant {
                    name: "MinInt8".to_string(),
                    value: "-1 << 7".to_string()
                },
            ]
        );
    }

    #[test]
    fn strips_trailing_comment_from_constant_line() {
        let doc = "\
const (
    Pi = 3.14159 // more digits elsewhere
)
";
        let result = scan_doc(doc);
        assert_eq!(result.constants.len(), 1);
        assert_eq!(result.constants[0].name, "Pi");
        assert_eq!(result.constants[0].value, "3.14159");
    }

    #[test]
    fn scanning_continues_after_const_block() {
        let doc = "\
const (
    E = 2.71828
)

func Exp(x float64) float64
    Exp returns e**x.
";
        let result = scan_doc(doc);
        assert_eq!(result.constants.len(), 1);
        assert_eq!(result.functions.len(), 1);
        assert_eq!(result.functions[0].name, "Exp");
    }

    #[test]
    fn empty_input_scans_to_nothing() {
        let result = scan_doc("");
        assert!(result.functions.is_empty());
        assert!(result.constants.is_empty());
        assert_eq!(result.skipped, 0);
    }
}
