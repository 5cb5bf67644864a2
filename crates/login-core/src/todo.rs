//! Dashboard Todo List
//!
//! In-memory ordered list of strings. Never persisted: it lives as long as
//! the dashboard view.

use crate::notice::{Notice, TODO_ADDED, TODO_REMOVED};

pub const EMPTY_PLACEHOLDER: &str = "No todos yet. Add one above!";

/// Whether a keydown in the todo input should add the entry
pub fn adds_on_key(key: &str) -> bool {
    key == "Enter"
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<String>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the trimmed text. Blank input is ignored and yields `None`.
    pub fn add(&mut self, text: &str) -> Option<Notice> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.items.push(text.to_string());
        Some(Notice::success(TODO_ADDED))
    }

    /// Remove by position; the rest keep their order.
    ///
    /// Out-of-range positions change nothing and yield `None`.
    pub fn remove(&mut self, index: usize) -> Option<(String, Notice)> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        Some((removed, Notice::success(TODO_REMOVED)))
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Placeholder text when there is nothing to list
    pub fn placeholder(&self) -> Option<&'static str> {
        self.is_empty().then_some(EMPTY_PLACEHOLDER)
    }
}
