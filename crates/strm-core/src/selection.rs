//! Folder-level selection of which media entries to materialize.

use std::collections::BTreeSet;

use crate::tree::MediaEntry;

/// Sorted, unique parent folders of `entries` ("" for top-level files).
pub fn folders_of(entries: &[MediaEntry]) -> BTreeSet<String> {
    entries.iter().map(|e| e.parent().to_string()).collect()
}

/// Which folders the user chose to generate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Only(BTreeSet<String>),
}

impl Selection {
    /// `Only` the given folders; an empty list selects everything.
    pub fn from_folders<I, S>(folders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = folders.into_iter().map(Into::into).collect();
        if set.is_empty() {
            Selection::All
        } else {
            Selection::Only(set)
        }
    }

    pub fn includes(&self, entry: &MediaEntry) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(folders) => folders.contains(entry.parent()),
        }
    }

    /// Keeps the selected entries, preserving order.
    pub fn apply(&self, entries: Vec<MediaEntry>) -> Vec<MediaEntry> {
        match self {
            Selection::All => entries,
            Selection::Only(_) => entries.into_iter().filter(|e| self.includes(e)).collect(),
        }
    }
}
