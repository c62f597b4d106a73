//! Display title and label map for one chart source

use indexmap::IndexMap;
use newsdesk_common::Key;
use serde::{Deserialize, Serialize};

/// Title plus optional raw key → display label mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    /// Axis or legend title for the source
    pub title: String,
    /// Label per raw key; `None` for free-text fields whose keys display as-is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub names: Option<IndexMap<Key, Key>>,
}

impl Translation {
    /// Title-only translation
    pub fn title_only(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            names: None,
        }
    }

    /// Translation with a label map
    pub fn with_names(title: impl Into<String>, names: IndexMap<Key, Key>) -> Self {
        Self {
            title: title.into(),
            names: Some(names),
        }
    }

    /// Label for a raw key; exact match first, then loose numeric/text match
    pub fn label_for(&self, key: &Key) -> Option<&Key> {
        let names = self.names.as_ref()?;
        names.get(key).or_else(|| {
            names
                .iter()
                .find(|(candidate, _)| candidate.loosely_eq(key))
                .map(|(_, label)| label)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialized_shape() {
        let source = Translation::title_only("Source");
        assert_eq!(serde_json::to_value(&source).unwrap(), json!({"title": "Source"}));

        let mut names = IndexMap::new();
        names.insert(Key::from(1), Key::from(1));
        names.insert(Key::from(2), Key::from(2));
        let urgency = Translation::with_names("Urgency", names);
        assert_eq!(
            serde_json::to_value(&urgency).unwrap(),
            json!({"title": "Urgency", "names": {"1": 1, "2": 2}})
        );
    }

    #[test]
    fn test_label_lookup() {
        let mut names = IndexMap::new();
        names.insert(Key::from("a"), Key::from("Advisories"));
        names.insert(Key::from(3), Key::from("Low"));
        let translation = Translation::with_names("Category", names);

        assert_eq!(translation.label_for(&Key::from("a")), Some(&Key::from("Advisories")));
        assert_eq!(translation.label_for(&Key::from("3")), Some(&Key::from("Low")));
        assert_eq!(translation.label_for(&Key::from("z")), None);
        assert_eq!(Translation::title_only("Source").label_for(&Key::from("a")), None);
    }
}
