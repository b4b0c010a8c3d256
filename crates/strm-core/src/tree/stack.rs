//! Path reconstruction from classified lines.

use super::classify::{classify_line, LineKind};
use super::{is_media_name, MediaEntry};

/// One name per depth; index = depth.
#[derive(Debug, Clone, Default)]
pub struct PathStack {
    components: Vec<String>,
}

impl PathStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `name` the component at `depth`, dropping everything deeper.
    /// Skipped depths are padded with empty placeholders.
    pub fn set(&mut self, depth: usize, name: impl Into<String>) {
        self.components.truncate(depth);
        self.components.resize(depth, String::new());
        self.components.push(name.into());
    }

    pub fn clear(&mut self) {
        self.components.clear();
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Current full path, components joined with `/`.
    pub fn joined(&self) -> String {
        self.components.join("/")
    }
}

/// Streaming parser state: the path stack plus the collecting flag.
#[derive(Debug)]
pub struct TreeBuilder {
    keyword: Option<String>,
    stack: PathStack,
    collecting: bool,
    resets: usize,
}

impl TreeBuilder {
    /// Without a keyword every line is eligible from the start.
    pub fn new(keyword: Option<&str>) -> Self {
        let keyword = keyword
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string);
        Self {
            collecting: keyword.is_none(),
            keyword,
            stack: PathStack::new(),
            resets: 0,
        }
    }

    /// Feeds one line; returns a media entry if the line names one.
    pub fn push_line(&mut self, line: &str) -> Option<MediaEntry> {
        match classify_line(line, self.keyword.as_deref()) {
            LineKind::Blank | LineKind::Noise => None,
            LineKind::Anchor => {
                self.stack.clear();
                self.collecting = true;
                self.resets += 1;
                None
            }
            LineKind::Node { depth, name } => {
                if !self.collecting {
                    return None;
                }
                let is_media = is_media_name(&name);
                self.stack.set(depth, name.as_str());
                is_media.then(|| MediaEntry::new(self.stack.joined(), name))
            }
        }
    }

    pub fn is_collecting(&self) -> bool {
        self.collecting
    }

    /// Number of anchor lines seen so far.
    pub fn resets(&self) -> usize {
        self.resets
    }

    pub fn stack(&self) -> &PathStack {
        &self.stack
    }
}
