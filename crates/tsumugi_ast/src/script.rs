//! Frontmatter script helpers.

/// Removes block (`/* */`) and line (`//`) comments from a script snippet.
///
/// Line comments are removed together with their terminating newline. An
/// unterminated block comment yields an empty string. The result is
/// trimmed of leading and trailing whitespace.
pub fn strip_comments(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_block_comment = false;

    while let Some(current) = chars.next() {
        if !in_block_comment && current == '/' {
            match chars.peek() {
                Some('*') => {
                    chars.next();
                    in_block_comment = true;
                    continue;
                }
                Some('/') => {
                    // Skip until the end of line for inline comments
                    for skipped in chars.by_ref() {
                        if skipped == '\n' {
                            break;
                        }
                    }
                    continue;
                }
                _ => {}
            }
        } else if in_block_comment && current == '*' && chars.peek() == Some(&'/') {
            chars.next();
            in_block_comment = false;
            continue;
        }

        if !in_block_comment {
            output.push(current);
        }
    }

    if in_block_comment {
        return String::new();
    }

    output.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("const x = 1;", "const x = 1;")]
    #[case("a /* b */ c", "a  c")]
    #[case("let x = 1; // note\nlet y = 2;", "let x = 1; let y = 2;")]
    #[case("// a\n/* b */", "")]
    #[case("/* // */x", "x")]
    #[case("// a /* b\nc", "c")]
    #[case("  x  ", "x")]
    #[case("", "")]
    #[case("a / b", "a / b")]
    #[case("a */ b", "a */ b")]
    fn strips_comments(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(strip_comments(input), expected);
    }

    #[test]
    fn unterminated_block_comment_yields_empty() {
        assert_eq!(strip_comments("code /* oops"), "");
        assert_eq!(strip_comments("/*"), "");
    }

    #[test]
    fn line_comment_at_end_of_input() {
        assert_eq!(strip_comments("x // trailing"), "x");
    }

    #[test]
    fn multiline_block_comment() {
        let input = "before\n/* line one\n   line two */\nafter";
        assert_eq!(strip_comments(input), "before\n\nafter");
    }

    #[test]
    fn preserves_non_ascii_outside_comments() {
        assert_eq!(strip_comments("価格 /* 円 */ 表示"), "価格  表示");
    }
}
