//! Abstraction over the address bar and its history stack.

/// Query strings passed through this trait never carry the leading `?`.
pub trait UrlHistory {
    fn current_query(&self) -> String;
    /// Rewrites the current entry; the back button is unaffected.
    fn replace_query(&mut self, query: &str);
    /// Adds a new entry on top of the current one.
    fn push_query(&mut self, query: &str);
}

/// In-process history for hosts without a browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryUrlHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl Default for MemoryUrlHistory {
    fn default() -> Self {
        Self::new("")
    }
}

impl MemoryUrlHistory {
    pub fn new(initial_query: impl Into<String>) -> Self {
        let initial_query: String = initial_query.into();
        Self {
            entries: vec![initial_query.trim_start_matches('?').to_string()],
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Moves one entry back; returns false at the oldest entry.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }
}

impl UrlHistory for MemoryUrlHistory {
    fn current_query(&self) -> String {
        self.entries[self.cursor].clone()
    }

    fn replace_query(&mut self, query: &str) {
        self.entries[self.cursor] = query.to_string();
    }

    fn push_query(&mut self, query: &str) {
        // pushing drops any forward entries, like a browser does
        self.entries.truncate(self.cursor + 1);
        self.entries.push(query.to_string());
        self.cursor += 1;
    }
}
