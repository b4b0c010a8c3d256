//! Filesystem-safe pointer-file names.

use crate::tree::media_extension;

/// Characters that cannot appear in a file name on common filesystems.
fn is_illegal(c: char) -> bool {
    matches!(c, '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|') || c.is_control()
}

/// Strips the media extension from `basename` and replaces illegal
/// characters with `_`.
///
/// Returns `None` when nothing but illegal characters and whitespace would
/// remain, so the caller can skip the entry instead of writing a file named
/// only with placeholders.
pub fn sanitize_stem(basename: &str) -> Option<String> {
    let stem = match media_extension(basename) {
        Some(ext) => &basename[..basename.len() - ext.len()],
        None => match basename.rfind('.') {
            Some(idx) if idx > 0 => &basename[..idx],
            _ => basename,
        },
    };

    if stem.chars().all(|c| is_illegal(c) || c.is_whitespace()) {
        return None;
    }

    Some(
        stem.chars()
            .map(|c| if is_illegal(c) { '_' } else { c })
            .collect(),
    )
}
