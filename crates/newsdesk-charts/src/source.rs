//! Named count sources feeding a chart

use indexmap::IndexMap;
use newsdesk_common::Key;
use serde::{Deserialize, Serialize};

/// Position of a source within a chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceRole {
    /// Its keys become the category axis
    Primary,
    /// Its keys become stacked series within each category
    Breakdown,
}

/// Counts per category, optionally split by a sub-category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceValues {
    /// category → count
    Flat(IndexMap<Key, u64>),
    /// category → (sub-category → count)
    Nested(IndexMap<Key, IndexMap<Key, u64>>),
}

impl SourceValues {
    /// Build a flat mapping from key/count pairs
    pub fn flat<K, I>(pairs: I) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, u64)>,
    {
        SourceValues::Flat(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Build a nested mapping from category/sub-count pairs
    pub fn nested<K, S, J, I>(groups: I) -> Self
    where
        K: Into<Key>,
        S: Into<Key>,
        J: IntoIterator<Item = (S, u64)>,
        I: IntoIterator<Item = (K, J)>,
    {
        SourceValues::Nested(
            groups
                .into_iter()
                .map(|(k, subs)| {
                    (
                        k.into(),
                        subs.into_iter().map(|(s, v)| (s.into(), v)).collect(),
                    )
                })
                .collect(),
        )
    }

    /// Whether values are split by sub-category
    pub fn is_nested(&self) -> bool {
        matches!(self, SourceValues::Nested(_))
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        match self {
            SourceValues::Flat(map) => map.len(),
            SourceValues::Nested(map) => map.len(),
        }
    }

    /// Whether there are no categories
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Categories in insertion order
    pub fn keys(&self) -> Vec<&Key> {
        match self {
            SourceValues::Flat(map) => map.keys().collect(),
            SourceValues::Nested(map) => map.keys().collect(),
        }
    }

    /// Total count per category in insertion order
    pub fn weights(&self) -> Vec<(Key, u64)> {
        match self {
            SourceValues::Flat(map) => map.iter().map(|(k, v)| (k.clone(), *v)).collect(),
            SourceValues::Nested(map) => map
                .iter()
                .map(|(k, subs)| (k.clone(), saturating_total(subs.values().copied())))
                .collect(),
        }
    }

    /// Count of `sub` within `category`; zero when either is absent.
    ///
    /// Sub-category keys match loosely, so a breakdown keyed `1` finds the
    /// counts stored under `"1"`.
    pub fn count(&self, category: &Key, sub: &Key) -> u64 {
        let SourceValues::Nested(map) = self else {
            return 0;
        };
        let Some(subs) = map.get(category) else {
            return 0;
        };
        subs.get(sub)
            .or_else(|| {
                subs.iter()
                    .find(|(candidate, _)| candidate.loosely_eq(sub))
                    .map(|(_, count)| count)
            })
            .copied()
            .unwrap_or(0)
    }

    /// Distinct sub-categories in order of first appearance
    pub fn sub_keys(&self) -> Vec<Key> {
        let mut keys: Vec<Key> = Vec::new();
        if let SourceValues::Nested(map) = self {
            for sub in map.values().flat_map(IndexMap::keys) {
                if !keys.iter().any(|known| known.loosely_eq(sub)) {
                    keys.push(sub.clone());
                }
            }
        }
        keys
    }
}

impl Default for SourceValues {
    fn default() -> Self {
        SourceValues::Flat(IndexMap::new())
    }
}

impl From<IndexMap<Key, u64>> for SourceValues {
    fn from(map: IndexMap<Key, u64>) -> Self {
        SourceValues::Flat(map)
    }
}

impl From<IndexMap<Key, IndexMap<Key, u64>>> for SourceValues {
    fn from(map: IndexMap<Key, IndexMap<Key, u64>>) -> Self {
        SourceValues::Nested(map)
    }
}

/// A named source attached to a chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// Field path the counts are grouped by, e.g. `anpa_category.qcode`
    pub name: String,
    /// Role in the chart
    pub role: SourceRole,
    /// Counts
    pub values: SourceValues,
}

/// Sum of counts, clamped at `u64::MAX`
pub(crate) fn saturating_total(counts: impl IntoIterator<Item = u64>) -> u64 {
    counts.into_iter().fold(0, u64::saturating_add)
}
