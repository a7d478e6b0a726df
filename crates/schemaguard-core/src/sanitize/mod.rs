//! Comment neutralization
//!
//! Rewrites SQL comments to equal-length runs of spaces so the match
//! scanner never sees commented-out keywords, while every non-comment
//! character keeps its original byte offset. Offsets found in the
//! neutralized text are therefore valid against the original text.

#[derive(Clone, Copy, PartialEq)]
enum State {
    Code,
    LineComment,
    BlockComment,
}

/// Replace every character of a `--` line comment or `/* ... */` block
/// comment with spaces, one space per byte, leaving everything else
/// untouched. The output has the same byte length as the input.
///
/// Comment delimiters inside string literals are not recognized as
/// literal text; a quoted `--` blanks the rest of its line. An
/// unterminated block comment extends to end of input.
pub fn neutralize_comments(sql: &str) -> String {
    let mut out = String::with_capacity(sql.len());
    let mut state = State::Code;
    let mut chars = sql.chars().peekable();

    while let Some(ch) = chars.next() {
        match state {
            State::Code => {
                if ch == '-' && chars.peek() == Some(&'-') {
                    chars.next();
                    out.push_str("  ");
                    state = State::LineComment;
                } else if ch == '/' && chars.peek() == Some(&'*') {
                    chars.next();
                    out.push_str("  ");
                    state = State::BlockComment;
                } else {
                    out.push(ch);
                }
            }
            State::LineComment => {
                if ch == '\n' {
                    out.push('\n');
                    state = State::Code;
                } else {
                    blank(&mut out, ch);
                }
            }
            State::BlockComment => {
                if ch == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    out.push_str("  ");
                    state = State::Code;
                } else {
                    blank(&mut out, ch);
                }
            }
        }
    }

    out
}

/// Push one space per byte of `ch` so byte offsets are preserved even
/// for multi-byte characters inside comments.
fn blank(out: &mut String, ch: char) {
    for _ in 0..ch.len_utf8() {
        out.push(' ');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_passes_plain_sql_through() {
        let sql = "CREATE TABLE todos (id TEXT PRIMARY KEY);";
        assert_eq!(neutralize_comments(sql), sql);
    }

    #[test]
    fn test_blanks_line_comment_to_end_of_line() {
        let sql = "SELECT 1; -- DROP TABLE todos\nSELECT 2;";
        let out = neutralize_comments(sql);
        let expected = format!("SELECT 1; {}\nSELECT 2;", " ".repeat(19));
        assert_eq!(out, expected);
        assert_eq!(out.len(), sql.len());
    }

    #[test]
    fn test_blanks_block_comment() {
        let sql = "a /* DROP TABLE t */ b";
        let out = neutralize_comments(sql);
        assert_eq!(out, format!("a {} b", " ".repeat(18)));
    }

    #[test]
    fn test_block_comment_blanks_newlines_too() {
        // Line math for real matches runs against the original text, so
        // blanking a comment's newline is safe.
        let sql = "a /* x\ny */ b";
        let out = neutralize_comments(sql);
        assert_eq!(out, "a           b");
    }

    #[test]
    fn test_unterminated_block_comment_extends_to_end() {
        let sql = "SELECT 1; /* DROP TABLE todos";
        let out = neutralize_comments(sql);
        assert_eq!(out, format!("SELECT 1; {}", " ".repeat(19)));
    }

    #[test]
    fn test_line_comment_at_end_of_input() {
        let out = neutralize_comments("-- trailing");
        assert_eq!(out, "           ");
    }

    #[test]
    fn test_multibyte_chars_in_comment_blank_per_byte() {
        let sql = "x -- été\ny";
        let out = neutralize_comments(sql);
        assert_eq!(out.len(), sql.len());
        assert_eq!(out, format!("x {}\ny", " ".repeat(sql.len() - 4)));
    }

    #[test]
    fn test_string_literals_are_not_understood() {
        // Known imprecision: a quoted '--' blanks the rest of the line.
        let sql = "SELECT '--tail' FROM t;";
        let out = neutralize_comments(sql);
        assert_eq!(out, format!("SELECT '{}", " ".repeat(15)));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(neutralize_comments(""), "");
    }
}
