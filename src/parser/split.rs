//! Depth-aware splitting of comma-separated type lists.

/// Split `s` on `", "` at bracket depth zero.
///
/// `go doc` separates list elements with a comma and a single space, but
/// composite type tokens (`map[string, V]` style instantiations, function
/// types) may contain the same sequence at a deeper nesting level. Depth
/// is tracked across `()`, `[]` and `{}` so only true element boundaries
/// split.
pub(crate) fn split_top_level(s: &str) -> Vec<&str> {
    let bytes = s.as_bytes();
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => depth = depth.saturating_sub(1),
            b',' if depth == 0 && bytes.get(pos + 1) == Some(&b' ') => {
                parts.push(&s[start..pos]);
                pos += 2;
                start = pos;
                continue;
            }
            _ => {}
        }
        pos += 1;
    }

    parts.push(&s[start..]);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_flat_list() {
        assert_eq!(
            split_top_level("a, b, c float64"),
            vec!["a", "b", "c float64"]
        );
    }

    #[test]
    fn single_element_is_not_split() {
        assert_eq!(split_top_level("x int"), vec!["x int"]);
    }

    #[test]
    fn comma_inside_brackets_does_not_split() {
        assert_eq!(
            split_top_level("m map[string, int], n int"),
            vec!["m map[string, int]", "n int"]
        );
    }

    #[test]
    fn comma_inside_parens_does_not_split() {
        assert_eq!(
            split_top_level("f func(a, b int), x string"),
            vec!["f func(a, b int)", "x string"]
        );
    }

    #[test]
    fn comma_without_space_does_not_split() {
        assert_eq!(split_top_level("a,b"), vec!["a,b"]);
    }

    #[test]
    fn empty_input_yields_single_empty_part() {
        assert_eq!(split_top_level(""), vec![""]);
    }

    #[test]
    fn unbalanced_closers_do_not_underflow() {
        assert_eq!(split_top_level("a), b"), vec!["a)", "b"]);
    }
}
