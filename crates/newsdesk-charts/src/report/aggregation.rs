//! Aggregation response shape consumed by the report

use newsdesk_common::Key;
use serde::{Deserialize, Serialize};

/// Top-level aggregation result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationResponse {
    /// One bucket per group value
    #[serde(default)]
    pub parent: Vec<ParentBucket>,
}

/// Counts for one group value, split into originals and rewrites
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentBucket {
    /// Group value
    pub key: Option<Key>,
    /// Number of items in the group
    pub doc_count: Option<u64>,
    /// Items that are not a rewrite of another item
    pub no_rewrite_of: Option<StateFilter>,
    /// Items that rewrite another item
    pub rewrite_of: Option<StateFilter>,
}

/// Filter bucket holding a state terms aggregation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateFilter {
    /// Counts per workflow state
    pub state: Option<TermsAggregation>,
}

/// Terms aggregation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermsAggregation {
    /// One bucket per term
    #[serde(default)]
    pub buckets: Vec<TermBucket>,
}

/// One term and its count
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermBucket {
    /// Term
    pub key: Option<Key>,
    /// Items with the term
    pub doc_count: Option<u64>,
}

impl StateFilter {
    /// State buckets, empty when the aggregation is missing
    pub fn buckets(&self) -> &[TermBucket] {
        self.state
            .as_ref()
            .map(|terms| terms.buckets.as_slice())
            .unwrap_or_default()
    }
}
