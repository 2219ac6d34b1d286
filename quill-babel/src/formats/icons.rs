//! Icon mapping for the tree visualization format

/// Get the Unicode icon for a given node type
///
/// Node types are the paragraph model's variants plus the embed keys
/// (`image`, `video`) so embed paragraphs show what they hold.
pub fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Document" => "⧉",
        "Paragraph" => "¶",
        "Text" => "◦",
        "Formula" => "√",
        "image" => "▣",
        "video" => "▶",
        _ => "○",
    }
}
