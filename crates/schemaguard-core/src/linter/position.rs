//! Byte offset to source position mapping

/// Resolved source position: 1-indexed line and column plus the
/// trimmed text of the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub snippet: String,
}

/// Map a byte offset in `text` to a [`Position`].
///
/// The line is one plus the number of `\n` strictly before the offset;
/// the column is the byte distance from the preceding `\n` (or start
/// of text), 1-indexed. Always resolved against the original,
/// non-neutralized text so the snippet shows real source.
pub fn resolve(text: &str, offset: usize) -> Position {
    let offset = offset.min(text.len());
    let prefix = &text.as_bytes()[..offset];

    let line = prefix.iter().filter(|&&b| b == b'\n').count() + 1;
    let line_start = match prefix.iter().rposition(|&b| b == b'\n') {
        Some(idx) => idx + 1,
        None => 0,
    };
    let column = offset - line_start + 1;

    // str::lines splits on \n and strips a trailing \r, matching the
    // line numbering above for CRLF input.
    let snippet = text
        .lines()
        .nth(line - 1)
        .unwrap_or_default()
        .trim()
        .to_string();

    Position {
        line,
        column,
        snippet,
    }
}
