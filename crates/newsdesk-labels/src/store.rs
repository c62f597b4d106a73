//! Vocabulary storage backends

use crate::error::{LabelError, LabelResult};
use newsdesk_common::Key;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// A controlled vocabulary such as `categories` or `urgency`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Vocabulary id
    #[serde(rename = "_id")]
    pub id: String,
    /// Human readable vocabulary name
    #[serde(default)]
    pub display_name: Option<String>,
    /// Vocabulary entries
    #[serde(default)]
    pub items: Vec<VocabularyItem>,
}

/// One vocabulary entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyItem {
    /// Code stored on items
    pub qcode: Key,
    /// Display name
    pub name: Key,
    /// Whether the entry can still be assigned to new items
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// A desk from the desk registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Desk {
    /// Desk id as stored on `task.desk`
    #[serde(rename = "_id")]
    pub id: String,
    /// Desk name
    pub name: String,
}

/// A user from the user registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreUser {
    /// User id as stored on `task.user`
    #[serde(rename = "_id")]
    pub id: String,
    /// Name shown in the newsroom
    pub display_name: String,
}

/// Read access to the CMS label data
pub trait VocabularyStore: Send + Sync {
    /// Look up a vocabulary by id
    fn vocabulary(&self, id: &str) -> LabelResult<Option<Vocabulary>>;

    /// All registered desks
    fn desks(&self) -> LabelResult<Vec<Desk>>;

    /// All registered users
    fn users(&self) -> LabelResult<Vec<StoreUser>>;
}

#[derive(Debug, Default, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    vocabularies: Vec<Vocabulary>,
    #[serde(default)]
    desks: Vec<Desk>,
    #[serde(default)]
    users: Vec<StoreUser>,
}

/// Store backed by a vocabulary document held in memory
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    vocabularies: HashMap<String, Vocabulary>,
    desks: Vec<Desk>,
    users: Vec<StoreUser>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a YAML document (JSON is accepted as a YAML subset)
    pub fn from_yaml_str(content: &str) -> LabelResult<Self> {
        let document: StoreDocument = serde_yaml::from_str(content)
            .map_err(|e| LabelError::StoreParseError(e.to_string()))?;

        let store = Self {
            vocabularies: document
                .vocabularies
                .into_iter()
                .map(|vocabulary| (vocabulary.id.clone(), vocabulary))
                .collect(),
            desks: document.desks,
            users: document.users,
        };
        debug!(
            vocabularies = store.vocabularies.len(),
            desks = store.desks.len(),
            users = store.users.len(),
            "Parsed vocabulary store"
        );
        Ok(store)
    }

    /// Load a document from disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> LabelResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LabelError::StoreLoadError {
            path: path.to_string_lossy().to_string(),
            source,
        })?;
        let store = Self::from_yaml_str(&content)?;
        info!("Loaded vocabulary store from {:?}", path);
        Ok(store)
    }

    /// Add or replace a vocabulary
    pub fn insert_vocabulary(&mut self, vocabulary: Vocabulary) {
        self.vocabularies.insert(vocabulary.id.clone(), vocabulary);
    }

    /// Register a desk
    pub fn insert_desk(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.desks.push(Desk {
            id: id.into(),
            name: name.into(),
        });
    }

    /// Register a user
    pub fn insert_user(&mut self, id: impl Into<String>, display_name: impl Into<String>) {
        self.users.push(StoreUser {
            id: id.into(),
            display_name: display_name.into(),
        });
    }
}

impl VocabularyStore for InMemoryStore {
    fn vocabulary(&self, id: &str) -> LabelResult<Option<Vocabulary>> {
        Ok(self.vocabularies.get(id).cloned())
    }

    fn desks(&self) -> LabelResult<Vec<Desk>> {
        Ok(self.desks.clone())
    }

    fn users(&self) -> LabelResult<Vec<StoreUser>> {
        Ok(self.users.clone())
    }
}
