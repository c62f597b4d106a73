//! Field → translation resolution with caching

use crate::error::LabelResult;
use crate::field::SourceField;
use crate::store::VocabularyStore;
use crate::translation::Translation;
use indexmap::IndexMap;
use moka::sync::Cache;
use newsdesk_common::{humanize_field, Key, WorkflowState};
use newsdesk_config::LabelSettings;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Anything that can translate a chart source field
pub trait LabelProvider: Send + Sync {
    /// Title and label map for a raw field path
    fn translation(&self, field: &str) -> LabelResult<Translation>;
}

/// Resolves fields through the [`SourceField`] registry against a store
pub struct LabelRegistry {
    store: Arc<dyn VocabularyStore>,
    cache: Cache<String, Arc<Translation>>,
}

impl fmt::Debug for LabelRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabelRegistry")
            .field("store", &"<VocabularyStore>")
            .field("cached", &self.cache.entry_count())
            .finish()
    }
}

impl LabelRegistry {
    /// Create a registry with default cache settings
    pub fn new(store: Arc<dyn VocabularyStore>) -> Self {
        Self::from_settings(store, &LabelSettings::default())
    }

    /// Create a registry using the configured cache TTL and capacity
    pub fn from_settings(store: Arc<dyn VocabularyStore>, settings: &LabelSettings) -> Self {
        let cache = Cache::builder()
            .max_capacity(settings.cache_capacity)
            .time_to_live(Duration::from_secs(settings.cache_ttl_seconds))
            .build();
        Self { store, cache }
    }

    /// Drop every cached translation
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    fn resolve(&self, field: &SourceField) -> LabelResult<Translation> {
        match field {
            SourceField::Category | SourceField::Urgency | SourceField::Genre => {
                let title = field.fixed_title().unwrap_or_default();
                let id = field.vocabulary_id().unwrap_or_default();
                match self.store.vocabulary(id)? {
                    Some(vocabulary) => Ok(Translation::with_names(
                        title,
                        vocabulary
                            .items
                            .into_iter()
                            .map(|item| (item.qcode, item.name))
                            .collect(),
                    )),
                    None => {
                        warn!("Vocabulary '{}' not found, labels pass through", id);
                        Ok(Translation::title_only(title))
                    }
                }
            }
            SourceField::Desk => {
                let names = self
                    .store
                    .desks()?
                    .into_iter()
                    .map(|desk| (Key::Text(desk.id), Key::Text(desk.name)))
                    .collect();
                Ok(Translation::with_names("Desk", names))
            }
            SourceField::User => {
                let names = self
                    .store
                    .users()?
                    .into_iter()
                    .map(|user| (Key::Text(user.id), Key::Text(user.display_name)))
                    .collect();
                Ok(Translation::with_names("User", names))
            }
            SourceField::State => {
                let names: IndexMap<Key, Key> = WorkflowState::ALL
                    .iter()
                    .map(|state| (Key::from(state.as_str()), Key::from(state.label())))
                    .collect();
                Ok(Translation::with_names("State", names))
            }
            SourceField::Source => Ok(Translation::title_only("Source")),
            SourceField::Custom(raw) => {
                let id = field.vocabulary_id().unwrap_or(raw.as_str());
                match self.store.vocabulary(id)? {
                    Some(vocabulary) => {
                        let title = vocabulary
                            .display_name
                            .clone()
                            .unwrap_or_else(|| humanize_field(raw));
                        Ok(Translation::with_names(
                            title,
                            vocabulary
                                .items
                                .into_iter()
                                .map(|item| (item.qcode, item.name))
                                .collect(),
                        ))
                    }
                    None => {
                        debug!("No vocabulary for field '{}', using a derived title", raw);
                        Ok(Translation::title_only(humanize_field(raw)))
                    }
                }
            }
        }
    }
}

impl LabelProvider for LabelRegistry {
    #[instrument(skip(self))]
    fn translation(&self, field: &str) -> LabelResult<Translation> {
        let source_field = SourceField::parse(field);
        let cache_key = source_field.cache_key();

        if let Some(cached) = self.cache.get(&cache_key) {
            debug!("Translation cache hit for '{}'", cache_key);
            return Ok(cached.as_ref().clone());
        }

        let translation = self.resolve(&source_field)?;
        self.cache.insert(cache_key, Arc::new(translation.clone()));
        Ok(translation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LabelError;
    use crate::store::{Desk, InMemoryStore, StoreUser, Vocabulary};
    use newsdesk_common::test_utils::vocabulary_fixtures;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn registry() -> LabelRegistry {
        let store = InMemoryStore::from_yaml_str(vocabulary_fixtures::newsroom_vocabularies_yaml())
            .unwrap();
        LabelRegistry::new(Arc::new(store))
    }

    fn names(pairs: &[(Key, Key)]) -> IndexMap<Key, Key> {
        pairs.iter().cloned().collect()
    }

    #[test]
    fn test_category_translation() {
        let translation = registry().translation("anpa_category.qcode").unwrap();
        assert_eq!(
            translation,
            Translation::with_names(
                "Category",
                names(&[
                    ("a".into(), "Advisories".into()),
                    ("b".into(), "Basketball".into()),
                    ("c".into(), "Cricket".into()),
                ])
            )
        );
    }

    #[test]
    fn test_urgency_translation_keeps_numbers() {
        let translation = registry().translation("urgency").unwrap();
        assert_eq!(translation.title, "Urgency");
        let names = translation.names.unwrap();
        assert_eq!(names.len(), 5);
        assert_eq!(names.get(&Key::Int(3)), Some(&Key::Int(3)));
    }

    #[test]
    fn test_desk_and_user_translations() {
        let registry = registry();

        let desks = registry.translation("task.desk").unwrap();
        assert_eq!(desks.title, "Desk");
        assert_eq!(desks.label_for(&"desk2".into()), Some(&"Sports Desk".into()));

        let users = registry.translation("task.user").unwrap();
        assert_eq!(users.title, "User");
        assert_eq!(users.label_for(&"user1".into()), Some(&"first user".into()));
    }

    #[test]
    fn test_state_translation_is_complete() {
        // An empty store still yields the whole state vocabulary
        let registry = LabelRegistry::new(Arc::new(InMemoryStore::new()));
        let translation = registry.translation("state").unwrap();
        assert_eq!(
            translation,
            Translation::with_names(
                "State",
                names(&[
                    ("killed".into(), "Killed".into()),
                    ("corrected".into(), "Corrected".into()),
                    ("updated".into(), "Updated".into()),
                    ("published".into(), "Published".into()),
                ])
            )
        );
    }

    #[test]
    fn test_source_is_title_only() {
        let translation = registry().translation("source").unwrap();
        assert_eq!(translation, Translation::title_only("Source"));
    }

    #[test]
    fn test_custom_vocabulary() {
        let translation = registry().translation("priority").unwrap();
        assert_eq!(translation.title, "News Priority");
        // Inactive entries still label historic items
        assert_eq!(translation.label_for(&Key::Int(3)), Some(&"Low".into()));
    }

    #[test]
    fn test_unknown_field_degrades_to_humanized_title() {
        let translation = registry().translation("extra.word_count").unwrap();
        assert_eq!(translation, Translation::title_only("Word Count"));
    }

    #[test]
    fn test_missing_known_vocabulary() {
        let registry = LabelRegistry::new(Arc::new(InMemoryStore::new()));
        let translation = registry.translation("genre.qcode").unwrap();
        assert_eq!(translation, Translation::title_only("Genre"));
    }

    struct CountingStore {
        calls: AtomicUsize,
        fail: bool,
    }

    impl VocabularyStore for CountingStore {
        fn vocabulary(&self, _id: &str) -> LabelResult<Option<Vocabulary>> {
            Ok(None)
        }

        fn desks(&self) -> LabelResult<Vec<Desk>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(LabelError::lookup("task.desk", "store offline"));
            }
            Ok(vec![Desk {
                id: "desk1".to_string(),
                name: "Politic Desk".to_string(),
            }])
        }

        fn users(&self) -> LabelResult<Vec<StoreUser>> {
            Ok(vec![])
        }
    }

    #[test]
    fn test_translations_are_cached() {
        let store = Arc::new(CountingStore {
            calls: AtomicUsize::new(0),
            fail: false,
        });
        let registry = LabelRegistry::new(store.clone());

        registry.translation("task.desk").unwrap();
        registry.translation("task.desk").unwrap();
        assert_eq!(store.calls.load(Ordering::SeqCst), 1);

        registry.invalidate_all();
        registry.translation("task.desk").unwrap();
        assert_eq!(store.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_store_failures_propagate_and_are_not_cached() {
        let store = Arc::new(CountingStore {
            calls: AtomicUsize::new(0),
            fail: true,
        });
        let registry = LabelRegistry::new(store.clone());

        let err = registry.translation("task.desk").unwrap_err();
        assert_eq!(err.field(), Some("task.desk"));
        assert!(registry.translation("task.desk").is_err());
        assert_eq!(store.calls.load(Ordering::SeqCst), 2);
    }
}
