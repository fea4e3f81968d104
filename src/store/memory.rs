use crate::domain::{Category, Phrase, Tag};
use crate::error::{Error, Result};
use crate::stats::PersistedCounters;

use super::{CatalogStore, PhraseStore, StatsStore};

/// In-process document store. Phrases keep insertion order, which is the
/// storage order the due-set selector reports.
#[derive(Debug, Default)]
pub struct MemoryStore {
    phrases: Vec<Phrase>,
    categories: Vec<Category>,
    tags: Vec<Tag>,
    counters: PersistedCounters,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PhraseStore for MemoryStore {
    fn get_all(&self) -> Result<Vec<Phrase>> {
        Ok(self.phrases.clone())
    }

    fn get_by_id(&self, id: &str) -> Result<Option<Phrase>> {
        Ok(self.phrases.iter().find(|p| p.id == id).cloned())
    }

    fn add(&mut self, phrase: Phrase) -> Result<()> {
        self.phrases.push(phrase);
        Ok(())
    }

    fn update(&mut self, phrase: Phrase) -> Result<()> {
        match self.phrases.iter_mut().find(|p| p.id == phrase.id) {
            Some(slot) => {
                *slot = phrase;
                Ok(())
            }
            None => Err(Error::PhraseNotFound(phrase.id)),
        }
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        let before = self.phrases.len();
        self.phrases.retain(|p| p.id != id);
        if self.phrases.len() == before {
            return Err(Error::PhraseNotFound(id.to_string()));
        }
        Ok(())
    }
}

impl StatsStore for MemoryStore {
    fn counters(&self) -> Result<PersistedCounters> {
        Ok(self.counters.clone())
    }

    fn save_counters(&mut self, counters: &PersistedCounters) -> Result<()> {
        self.counters = counters.clone();
        Ok(())
    }
}

impl CatalogStore for MemoryStore {
    fn categories(&self) -> Result<Vec<Category>> {
        Ok(self.categories.clone())
    }

    fn add_category(&mut self, category: Category) -> Result<()> {
        self.categories.push(category);
        Ok(())
    }

    fn tags(&self) -> Result<Vec<Tag>> {
        Ok(self.tags.clone())
    }

    fn add_tag(&mut self, tag: Tag) -> Result<()> {
        self.tags.push(tag);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrase(english: &str, japanese: &str) -> Phrase {
        Phrase::new(english.to_string(), japanese.to_string())
    }

    #[test]
    fn test_add_and_get_by_id() {
        let mut store = MemoryStore::new();
        let p = phrase("hello", "こんにちは");
        let id = p.id.clone();
        store.add(p).unwrap();

        let found = store.get_by_id(&id).unwrap();
        assert_eq!(found.unwrap().english, "hello");
        assert!(store.get_by_id("missing").unwrap().is_none());
    }

    #[test]
    fn test_get_all_preserves_insertion_order() {
        let mut store = MemoryStore::new();
        let ids: Vec<String> = ["a", "b", "c"]
            .iter()
            .map(|s| {
                let p = phrase(s, s);
                let id = p.id.clone();
                store.add(p).unwrap();
                id
            })
            .collect();

        let all: Vec<String> = store.get_all().unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(all, ids);
    }

    #[test]
    fn test_update_replaces_whole_document() {
        let mut store = MemoryStore::new();
        let mut p = phrase("hi", "やあ");
        let id = p.id.clone();
        store.add(p.clone()).unwrap();

        p.english = "hey".to_string();
        store.update(p).unwrap();

        assert_eq!(store.get_by_id(&id).unwrap().unwrap().english, "hey");
        assert_eq!(store.get_all().unwrap().len(), 1);
    }

    #[test]
    fn test_update_unknown_id_errors() {
        let mut store = MemoryStore::new();
        let err = store.update(phrase("x", "x")).unwrap_err();
        assert!(matches!(err, Error::PhraseNotFound(_)));
    }

    #[test]
    fn test_delete() {
        let mut store = MemoryStore::new();
        let p = phrase("bye", "さようなら");
        let id = p.id.clone();
        store.add(p).unwrap();

        store.delete(&id).unwrap();
        assert!(store.get_all().unwrap().is_empty());

        let err = store.delete(&id).unwrap_err();
        assert!(matches!(err, Error::PhraseNotFound(_)));
    }

    #[test]
    fn test_counters_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.counters().unwrap(), PersistedCounters::default());

        let mut counters = store.counters().unwrap();
        counters.total_reviews = 5;
        store.save_counters(&counters).unwrap();
        assert_eq!(store.counters().unwrap().total_reviews, 5);
    }

    #[test]
    fn test_catalog_collections() {
        let mut store = MemoryStore::new();
        store.add_category(Category::new("Travel".to_string(), None)).unwrap();
        store.add_tag(Tag::new("polite".to_string())).unwrap();

        assert_eq!(store.categories().unwrap().len(), 1);
        assert_eq!(store.tags().unwrap()[0].name, "polite");
    }
}
