//! Mutable per-session state: default engine, working directory, history.

use std::collections::VecDeque;
use std::path::PathBuf;

/// Upper bound on retained history entries.
pub const MAX_HISTORY_SIZE: usize = 30;

/// State that persists and can change across commands.
///
/// Created once at startup and mutated in place by classifier-triggered
/// commands; never replaced wholesale. Single-threaded by design, so no
/// interior locking.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Canonical key of the engine used when no site/engine is named.
    /// Invariant: always references an existing catalog engine.
    pub default_engine_key: String,
    /// Last directory a successful `cd` landed in.
    pub working_directory: PathBuf,
    /// Active display palette name.
    pub theme: String,
    history: VecDeque<String>,
}

impl SessionState {
    pub fn new(default_engine_key: impl Into<String>, theme: impl Into<String>) -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
        SessionState {
            default_engine_key: default_engine_key.into(),
            working_directory: cwd,
            theme: theme.into(),
            history: VecDeque::with_capacity(MAX_HISTORY_SIZE),
        }
    }

    /// Append a history entry, evicting the oldest past capacity.
    pub fn push_history(&mut self, description: impl Into<String>) {
        let description = description.into();
        if description.is_empty() {
            return;
        }
        if self.history.len() == MAX_HISTORY_SIZE {
            self.history.pop_front();
        }
        self.history.push_back(description);
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Oldest-first view of the retained history.
    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_is_bounded_fifo() {
        let mut session = SessionState::new("Google", "light");
        for i in 0..(MAX_HISTORY_SIZE + 5) {
            session.push_history(format!("entry {}", i));
        }
        assert_eq!(session.history_len(), MAX_HISTORY_SIZE);
        // Oldest five were evicted.
        assert_eq!(session.history().next(), Some("entry 5"));
        assert_eq!(session.history().last(), Some("entry 34"));
    }

    #[test]
    fn empty_descriptions_are_not_recorded() {
        let mut session = SessionState::new("Google", "light");
        session.push_history("");
        assert_eq!(session.history_len(), 0);
    }

    #[test]
    fn clear_history_empties_the_buffer() {
        let mut session = SessionState::new("Google", "light");
        session.push_history("one");
        session.push_history("two");
        session.clear_history();
        assert_eq!(session.history_len(), 0);
    }
}
