//! Directory-tree text parsing.
//!
//! Turns an indentation-based tree listing into the full hierarchical path
//! of every media file it names:
//! raw lines → `classify` (depth + name) → `stack` (path reconstruction)
//! → [`MediaEntry`] list in first-seen order.

mod classify;
mod stack;

pub use classify::{classify_line, LineKind};
pub use stack::{PathStack, TreeBuilder};

/// Recognized video-file extensions (case-insensitive suffix match).
pub const VIDEO_EXTENSIONS: &[&str] = &[".mp4", ".mkv", ".avi", ".mov", ".flv", ".ts", ".rmvb"];

/// Returns the recognized video extension `name` ends with, as written in `name`.
pub fn media_extension(name: &str) -> Option<&str> {
    VIDEO_EXTENSIONS.iter().find_map(|ext| {
        let split = name.len().checked_sub(ext.len())?;
        let suffix = name.get(split..)?;
        suffix.eq_ignore_ascii_case(ext).then_some(suffix)
    })
}

/// True if `name` ends (case-insensitively) with a recognized video extension.
pub fn is_media_name(name: &str) -> bool {
    media_extension(name).is_some()
}

/// One media file found in the tree, with its reconstructed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaEntry {
    /// Path components joined with `/`, root first.
    pub full_path: String,
    /// Display name of the node (last component).
    pub name: String,
}

impl MediaEntry {
    pub fn new(full_path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            full_path: full_path.into(),
            name: name.into(),
        }
    }

    /// The recognized extension, including the leading dot.
    pub fn extension(&self) -> Option<&str> {
        media_extension(&self.name)
    }

    /// Everything before the last `/` of the full path ("" for a top-level entry).
    pub fn parent(&self) -> &str {
        match self.full_path.rfind('/') {
            Some(idx) => &self.full_path[..idx],
            None => "",
        }
    }
}

/// Parses a whole tree listing and returns every media entry in input order.
///
/// `keyword`, when set, makes collection start only after a line containing
/// it; each such line clears the accumulated ancestry. Entries emitted before
/// a later anchor line stay in the result.
pub fn parse_tree<I, S>(lines: I, keyword: Option<&str>) -> Vec<MediaEntry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = TreeBuilder::new(keyword);
    let entries: Vec<MediaEntry> = lines
        .into_iter()
        .filter_map(|line| builder.push_line(line.as_ref()))
        .collect();
    tracing::debug!(
        entries = entries.len(),
        resets = builder.resets(),
        "parsed directory tree"
    );
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(entries: &[MediaEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.full_path.as_str()).collect()
    }

    #[test]
    fn media_names_case_insensitive() {
        assert!(is_media_name("ep1.mkv"));
        assert!(is_media_name("EP1.MKV"));
        assert!(is_media_name("movie.RmVb"));
        assert!(is_media_name("stream.ts"));
        assert!(!is_media_name("notes.txt"));
        assert!(!is_media_name("mkv"));
        assert!(!is_media_name("Season 01"));
    }

    #[test]
    fn entry_extension_and_parent() {
        let e = MediaEntry::new("ShowA/Season 01/ep1.MKV", "ep1.MKV");
        assert_eq!(e.extension(), Some(".MKV"));
        assert_eq!(e.parent(), "ShowA/Season 01");
        let top = MediaEntry::new("ep1.mkv", "ep1.mkv");
        assert_eq!(top.parent(), "");
    }

    #[test]
    fn nested_show_without_keyword() {
        let lines = [
            "|-- ShowA",
            "|   |-- Season 01",
            "|   |   |-- ep1.mkv",
            "|   |   |-- ep2.mkv",
            "|   |   |-- cover.jpg",
            "|-- ShowB",
            "|   |-- pilot.mp4",
        ];
        let entries = parse_tree(lines, None);
        assert_eq!(
            paths(&entries),
            vec![
                "/ShowA/Season 01/ep1.mkv",
                "/ShowA/Season 01/ep2.mkv",
                "/ShowB/pilot.mp4",
            ]
        );
        assert_eq!(entries[2].name, "pilot.mp4");
    }

    #[test]
    fn reconstruction_is_stack_consistent() {
        // depths 0,1,2,1,2,3
        let lines = [
            " -- a.mkv",
            "|-- b.mkv",
            "||-- c.mkv",
            "|-- d.mkv",
            "||-- e.mkv",
            "|||-- f.mkv",
        ];
        let entries = parse_tree(lines, None);
        let depths: Vec<usize> = entries
            .iter()
            .map(|e| e.full_path.matches('/').count())
            .collect();
        assert_eq!(depths, vec![0, 1, 2, 1, 2, 3]);
        assert_eq!(entries[5].full_path, "a.mkv/d.mkv/e.mkv/f.mkv");
    }

    #[test]
    fn noise_and_blank_lines_ignored() {
        let lines = ["Directory listing", "", "   ", "|-- Movies", "|   |-- film.avi", "end"];
        let entries = parse_tree(lines, None);
        assert_eq!(paths(&entries), vec!["/Movies/film.avi"]);
    }

    #[test]
    fn keyword_gates_collection_until_first_match() {
        let lines = [
            "|-- before.mkv",
            "=== Media ===",
            "|-- Shows",
            "|   |-- ep1.mkv",
        ];
        let entries = parse_tree(lines, Some("Media"));
        assert_eq!(paths(&entries), vec!["/Shows/ep1.mkv"]);
    }

    #[test]
    fn repeated_keyword_resets_but_keeps_prior_entries() {
        let lines = [
            "Media root 1",
            "|-- A",
            "|   |-- a1.mkv",
            "Media root 2",
            "|   |-- orphan.mkv",
            "|-- B",
            "|   |-- b1.mkv",
        ];
        let entries = parse_tree(lines, Some("Media"));
        assert_eq!(
            paths(&entries),
            vec!["/A/a1.mkv", "//orphan.mkv", "/B/b1.mkv"]
        );
    }

    #[test]
    fn duplicates_are_kept() {
        let lines = ["|-- a.mkv", "|-- a.mkv"];
        let entries = parse_tree(lines, None);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], entries[1]);
    }
}
