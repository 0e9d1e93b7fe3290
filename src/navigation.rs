//! Breadcrumb trail shared by every active node of one traversal.
//!
//! The trail is a single accumulated display string. Segment boundaries are
//! occurrences of the separator; the root segment never carries one, which
//! is what makes `pop_segment`/`collapse_to_root` no-ops at root level.

/// Separator-joined path of node names from the root to the active frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trail {
    separator: String,
    display: String,
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}

impl Trail {
    pub fn new() -> Self {
        Self {
            separator: "/".to_string(),
            display: String::new(),
        }
    }

    /// Sets the join token for future renders. Empty separators are ignored.
    pub fn set_separator(&mut self, separator: &str) {
        if !separator.is_empty() {
            self.separator = separator.to_string();
        }
    }

    /// (Re)seeds the first segment, leaving accumulated segments in place.
    pub fn set_root(&mut self, name: &str) {
        match self.display.find(&self.separator) {
            Some(at) => {
                let rest = self.display[at..].to_string();
                self.display = format!("{name}{rest}");
            }
            None => self.display = name.to_string(),
        }
    }

    /// Appends one segment for a menu being descended into.
    pub fn push_segment(&mut self, name: &str) {
        self.display.push_str(&self.separator);
        self.display.push_str(name);
    }

    /// Drops the last segment. No-op when only the root segment remains.
    pub fn pop_segment(&mut self) {
        if let Some(at) = self.display.rfind(&self.separator) {
            self.display.truncate(at);
        }
    }

    /// Drops everything after the root segment. No-op at root level.
    pub fn collapse_to_root(&mut self) {
        if let Some(at) = self.display.find(&self.separator) {
            self.display.truncate(at);
        }
    }

    pub fn render(&self) -> &str {
        &self.display
    }
}
