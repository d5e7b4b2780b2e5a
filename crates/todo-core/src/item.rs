//! Item Entity
//!
//! A single to-do entry as stored under the `todos` key.

use serde::{Deserialize, Serialize};

/// Item identifier (creation time in epoch milliseconds)
pub type TodoId = i64;

/// A to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique within the list
    pub id: TodoId,
    /// Trimmed, never empty
    pub text: String,
    /// Completion status
    pub completed: bool,
}

impl Item {
    /// Create a new, not yet completed item
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = Item::new(1, "Test item");
        assert_eq!(item.id, 1);
        assert_eq!(item.text, "Test item");
        assert!(!item.completed);
    }

    #[test]
    fn test_item_wire_format() {
        let item = Item::new(1700000000000, "Buy milk");
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"id":1700000000000,"text":"Buy milk","completed":false}"#);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut item = Item::new(1, "x");
        item.toggle();
        assert!(item.completed);
        item.toggle();
        assert!(!item.completed);
    }
}
