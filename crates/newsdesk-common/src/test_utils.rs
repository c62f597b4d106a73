//! Test utilities and shared test helpers for the newsdesk workspace.
//!
//! Enabled for this crate's own tests and, through the `testing` feature,
//! for the dev-dependencies of every other crate.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Vocabulary fixtures mirroring a small newsroom setup.
pub mod vocabulary_fixtures {
    /// Categories, urgency, genre, desks and users as a vocabulary store document.
    pub fn newsroom_vocabularies_yaml() -> &'static str {
        r#"
vocabularies:
  - _id: categories
    display_name: Categories
    items:
      - { qcode: a, name: Advisories, is_active: true }
      - { qcode: b, name: Basketball, is_active: true }
      - { qcode: c, name: Cricket, is_active: true }
  - _id: urgency
    display_name: Urgency
    items:
      - { qcode: 1, name: 1, is_active: true }
      - { qcode: 2, name: 2, is_active: true }
      - { qcode: 3, name: 3, is_active: true }
      - { qcode: 4, name: 4, is_active: true }
      - { qcode: 5, name: 5, is_active: true }
  - _id: genre
    display_name: Genre
    items:
      - { qcode: Article, name: "Article (news)", is_active: true }
      - { qcode: Sidebar, name: Sidebar, is_active: true }
      - { qcode: Factbox, name: Factbox, is_active: true }
  - _id: priority
    display_name: News Priority
    items:
      - { qcode: 1, name: Top, is_active: true }
      - { qcode: 2, name: Normal, is_active: true }
      - { qcode: 3, name: Low, is_active: false }
desks:
  - { _id: desk1, name: Politic Desk }
  - { _id: desk2, name: Sports Desk }
  - { _id: desk3, name: System Desk }
users:
  - { _id: user1, display_name: first user }
  - { _id: user2, display_name: second user }
  - { _id: user3, display_name: last user }
"#
    }
}

/// Aggregation response fixtures for the publishing performance report.
pub mod aggregation_fixtures {
    /// Two desks with original and rewritten items.
    pub fn desk_state_aggregations_json() -> &'static str {
        r#"{
  "parent": [
    {
      "key": "desk1",
      "doc_count": 9,
      "no_rewrite_of": {
        "state": {
          "buckets": [
            { "key": "published", "doc_count": 4 },
            { "key": "killed", "doc_count": 1 }
          ]
        }
      },
      "rewrite_of": {
        "state": {
          "buckets": [
            { "key": "corrected", "doc_count": 1 },
            { "key": "published", "doc_count": 3 }
          ]
        }
      }
    },
    {
      "key": "desk2",
      "doc_count": 5,
      "no_rewrite_of": {
        "state": {
          "buckets": [
            { "key": "published", "doc_count": 3 },
            { "key": "corrected", "doc_count": 7 }
          ]
        }
      },
      "rewrite_of": {
        "state": {
          "buckets": [
            { "key": "published", "doc_count": 2 }
          ]
        }
      }
    },
    {
      "key": "",
      "doc_count": 2,
      "no_rewrite_of": {
        "state": { "buckets": [ { "key": "published", "doc_count": 2 } ] }
      }
    }
  ]
}"#
    }
}
