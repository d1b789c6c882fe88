//! Text wrapping for entry content and labels.

/// Wrap a plain text string to the specified width.
///
/// Embedded newlines always start a new line. Returns at least one line, so
/// an empty entry still occupies its dot row.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }
    if width == 0 {
        return text.lines().map(str::to_string).collect();
    }
    text.lines()
        .flat_map(|line| {
            if line.is_empty() {
                return vec![String::new()];
            }
            textwrap::wrap(line, width)
                .into_iter()
                .map(std::borrow::Cow::into_owned)
                .collect::<Vec<_>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_text() {
        assert_eq!(wrap_text("hello", 10), vec!["hello"]);
    }

    #[test]
    fn test_wrap_long_text() {
        assert_eq!(
            wrap_text("create a services site", 10),
            vec!["create a", "services", "site"]
        );
    }

    #[test]
    fn test_wrap_keeps_newlines() {
        assert_eq!(wrap_text("one\n\ntwo", 10), vec!["one", "", "two"]);
    }

    #[test]
    fn test_wrap_empty() {
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn test_wrap_zero_width() {
        assert_eq!(wrap_text("a b\nc", 0), vec!["a b", "c"]);
    }
}
