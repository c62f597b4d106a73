//! Label lookup for newsdesk charts
//!
//! Chart sources are keyed by raw CMS field values: category qcodes, desk
//! ids, user ids, workflow states. This crate turns a source field into a
//! [`Translation`], a display title plus an optional raw key → label map,
//! by asking a [`VocabularyStore`] through the strategy that the
//! [`SourceField`] registry assigns to the field.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use newsdesk_labels::{InMemoryStore, LabelProvider, LabelRegistry};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InMemoryStore::from_yaml_str(
//!     "desks:\n  - { _id: desk1, name: Politic Desk }\n",
//! )?;
//! let registry = LabelRegistry::new(Arc::new(store));
//!
//! let translation = registry.translation("task.desk")?;
//! assert_eq!(translation.title, "Desk");
//! assert_eq!(translation.label_for(&"desk1".into()), Some(&"Politic Desk".into()));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod field;
pub mod registry;
pub mod store;
pub mod translation;

pub use error::{LabelError, LabelResult};
pub use field::SourceField;
pub use registry::{LabelProvider, LabelRegistry};
pub use store::{Desk, InMemoryStore, StoreUser, Vocabulary, VocabularyItem, VocabularyStore};
pub use translation::Translation;
