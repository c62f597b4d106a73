//! Common types used across the newsdesk workspace

use serde::{Deserialize, Serialize};
use std::fmt;

/// A category key or display label.
///
/// Most CMS vocabularies key their items by text codes, but urgency is
/// numeric. Keeping both forms preserves the JSON type on output, so an
/// urgency axis renders `[1, 3, 5]` rather than `["1", "3", "5"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    /// Numeric code
    Int(i64),
    /// Text code or label
    Text(String),
}

impl Key {
    /// Returns the text form if this is a text key
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Key::Text(text) => Some(text),
            Key::Int(_) => None,
        }
    }

    /// Blank keys carry no grouping information and are skipped by reports
    pub fn is_blank(&self) -> bool {
        matches!(self, Key::Text(text) if text.trim().is_empty())
    }

    /// Loose equality that ignores the numeric/text distinction.
    ///
    /// JSON object keys always arrive as strings, so `"1"` and `1` have to be
    /// treated as the same category.
    pub fn loosely_eq(&self, other: &Key) -> bool {
        match (self, other) {
            (Key::Int(a), Key::Int(b)) => a == b,
            (Key::Text(a), Key::Text(b)) => a == b,
            (Key::Int(a), Key::Text(b)) | (Key::Text(b), Key::Int(a)) => a.to_string() == *b,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(value) => write!(f, "{value}"),
            Key::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Text(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Text(value)
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        Key::Text(value.clone())
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Int(i64::from(value))
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::Int(i64::from(value))
    }
}

/// Publishing states reported by the publishing performance report.
///
/// This is a closed vocabulary, so translations always carry every member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowState {
    /// Item was killed after publishing
    Killed,
    /// A rewrite corrected a published item
    Corrected,
    /// A rewrite republished an item
    Updated,
    /// Original publication
    Published,
}

impl WorkflowState {
    /// All states in report order
    pub const ALL: [WorkflowState; 4] = [
        WorkflowState::Killed,
        WorkflowState::Corrected,
        WorkflowState::Updated,
        WorkflowState::Published,
    ];

    /// Raw key used in aggregation buckets
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowState::Killed => "killed",
            WorkflowState::Corrected => "corrected",
            WorkflowState::Updated => "updated",
            WorkflowState::Published => "published",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            WorkflowState::Killed => "Killed",
            WorkflowState::Corrected => "Corrected",
            WorkflowState::Updated => "Updated",
            WorkflowState::Published => "Published",
        }
    }

    /// Parse a raw bucket key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|state| state.as_str() == key)
    }
}

impl fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_serializes_with_original_type() {
        assert_eq!(serde_json::to_value(Key::from(3)).unwrap(), serde_json::json!(3));
        assert_eq!(serde_json::to_value(Key::from("a")).unwrap(), serde_json::json!("a"));

        let parsed: Vec<Key> = serde_json::from_str(r#"[1, "b"]"#).unwrap();
        assert_eq!(parsed, vec![Key::Int(1), Key::Text("b".to_string())]);
    }

    #[test]
    fn test_key_loose_equality() {
        assert!(Key::from(1).loosely_eq(&Key::from("1")));
        assert!(Key::from("1").loosely_eq(&Key::from(1)));
        assert!(!Key::from(1).loosely_eq(&Key::from("01")));
        assert!(Key::from("a").loosely_eq(&Key::from("a")));
    }

    #[test]
    fn test_blank_keys() {
        assert!(Key::from("").is_blank());
        assert!(Key::from("  ").is_blank());
        assert!(!Key::from(0).is_blank());
        assert!(!Key::from("desk1").is_blank());
    }

    #[test]
    fn test_workflow_state_round_trip() {
        for state in WorkflowState::ALL {
            assert_eq!(WorkflowState::from_key(state.as_str()), Some(state));
        }
        assert_eq!(WorkflowState::from_key("spiked"), None);
        assert_eq!(WorkflowState::Corrected.label(), "Corrected");
    }
}
