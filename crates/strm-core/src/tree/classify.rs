//! Line classification: is this line a tree node, and at what depth?

use regex::Regex;
use std::sync::LazyLock;

/// Marker prefix (spaces and `|`), one or more connector glyphs, then the name.
static NODE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([| ]+)[|\\/\-]+(.*)").expect("valid tree line pattern"));

/// What a single line of the tree listing means to the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Whitespace only.
    Blank,
    /// Contains the anchor keyword; ancestry must be reset.
    Anchor,
    /// A directory or file entry.
    Node { depth: usize, name: String },
    /// Anything else (headers, separators, stray text).
    Noise,
}

/// Classifies one line. Trailing `\r`/`\n` are ignored.
///
/// Depth is the number of `|` characters in the marker prefix. The anchor
/// check runs on the whole line before the structural match, so a node line
/// containing the keyword counts as an anchor, not a node.
pub fn classify_line(line: &str, keyword: Option<&str>) -> LineKind {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return LineKind::Blank;
    }
    if let Some(keyword) = keyword.filter(|k| !k.is_empty()) {
        if line.contains(keyword) {
            return LineKind::Anchor;
        }
    }
    match NODE_LINE.captures(line) {
        Some(caps) => {
            let prefix = caps.get(1).map_or("", |m| m.as_str());
            let name = caps.get(2).map_or("", |m| m.as_str()).trim();
            LineKind::Node {
                depth: prefix.matches('|').count(),
                name: name.to_string(),
            }
        }
        None => LineKind::Noise,
    }
}
