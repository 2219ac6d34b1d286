//! Splitting insert text on embedded newlines.

/// A piece of insert text: either text between newlines, or the newline itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Break,
}

/// Split `text` on every `\n`, keeping the newlines as [`Segment::Break`].
///
/// Text before, between and after newlines is always emitted, even when empty,
/// so the output alternates `Text, Break, Text, ...` and starts and ends with
/// `Text`:
///
/// ```text
/// "a\nb"  -> [Text("a"), Break, Text("b")]
/// "a\n"   -> [Text("a"), Break, Text("")]
/// "\n\n"  -> [Text(""), Break, Text(""), Break, Text("")]
/// ```
pub fn split_lines(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut rest = text;
    while let Some(pos) = rest.find('\n') {
        segments.push(Segment::Text(&rest[..pos]));
        segments.push(Segment::Break);
        rest = &rest[pos + 1..];
    }
    segments.push(Segment::Text(rest));
    segments
}
