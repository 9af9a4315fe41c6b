//! Rolling context window for contextual translation.
//!
//! Holds the most recent full chunk translations so the next contextual
//! prompt can be primed with the previous output.

use std::collections::VecDeque;

/// Default number of translations kept.
pub const DEFAULT_CONTEXT_CAPACITY: usize = 5;

/// Bounded recency buffer of translated chunks, oldest evicted first.
///
/// # Examples
///
/// ```
/// use smart_translate::core::ContextWindow;
///
/// let mut window = ContextWindow::new();
/// window.push("Bonjour".to_string());
/// assert_eq!(window.last(), Some("Bonjour"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextWindow {
    entries: VecDeque<String>,
    capacity: usize,
}

impl Default for ContextWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextWindow {
    /// Creates an empty window holding up to five entries.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CONTEXT_CAPACITY)
    }

    /// Creates an empty window with a custom capacity (minimum 1).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Appends a translation, evicting the oldest once over capacity.
    pub fn push(&mut self, translation: String) {
        self.entries.push_back(translation);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Newest entry, if any.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    /// Number of entries held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the window is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_window() {
        let window = ContextWindow::new();
        assert!(window.is_empty());
        assert_eq!(window.last(), None);
        assert_eq!(window.capacity(), 5);
    }

    #[test]
    fn test_evicts_oldest_after_six() {
        let mut window = ContextWindow::new();
        for i in 1..=6 {
            window.push(format!("t{i}"));
        }
        assert_eq!(window.len(), 5);
        assert!(!window.iter().any(|e| e == "t1"));
        assert_eq!(window.iter().next(), Some("t2"));
        assert_eq!(window.last(), Some("t6"));
    }

    #[test]
    fn test_never_exceeds_capacity() {
        let mut window = ContextWindow::with_capacity(2);
        for i in 0..50 {
            window.push(i.to_string());
            assert!(window.len() <= 2);
        }
    }

    #[test]
    fn test_zero_capacity_clamped() {
        let mut window = ContextWindow::with_capacity(0);
        window.push("a".to_string());
        window.push("b".to_string());
        assert_eq!(window.len(), 1);
        assert_eq!(window.last(), Some("b"));
    }

    #[test]
    fn test_clear() {
        let mut window = ContextWindow::new();
        window.push("a".to_string());
        window.clear();
        assert!(window.is_empty());
    }
}
