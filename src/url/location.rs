//! Host location abstraction
//!
//! The sync layer only needs to read the current query string and write a
//! new one. Hosts implement [`Location`] over whatever holds their address;
//! [`MemoryLocation`] keeps an in-process history for tests and the CLI.

/// Access to the host's query string
pub trait Location {
    /// Current query string, without a leading `?`
    fn search(&self) -> String;

    /// Replace the current history entry
    fn replace(&mut self, query: &str);

    /// Push a new history entry
    fn push(&mut self, query: &str);
}

/// In-memory location with back/forward history
#[derive(Debug, Clone)]
pub struct MemoryLocation {
    entries: Vec<String>,
    cursor: usize,
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self::new("")
    }
}

impl MemoryLocation {
    /// Create a location whose only entry is `query`
    #[must_use]
    pub fn new(query: &str) -> Self {
        Self {
            entries: vec![strip(query).to_string()],
            cursor: 0,
        }
    }

    /// Number of history entries
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.entries.len()
    }

    /// Move one entry back; returns `false` at the start of history
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Move one entry forward; returns `false` at the end of history
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Simulate an external navigation such as a pasted link
    pub fn navigate(&mut self, query: &str) {
        self.push(query);
    }
}

impl Location for MemoryLocation {
    fn search(&self) -> String {
        self.entries
            .get(self.cursor)
            .cloned()
            .unwrap_or_default()
    }

    fn replace(&mut self, query: &str) {
        let query = strip(query).to_string();
        match self.entries.get_mut(self.cursor) {
            Some(entry) => *entry = query,
            None => self.entries.push(query),
        }
    }

    fn push(&mut self, query: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(strip(query).to_string());
        self.cursor = self.entries.len() - 1;
    }
}

fn strip(query: &str) -> &str {
    query.strip_prefix('?').unwrap_or(query)
}
