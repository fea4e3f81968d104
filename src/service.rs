//! The stateful study service.
//!
//! One instance per session. Every mutation funnels through here so the
//! persisted counters stay consistent and the stats cache is invalidated
//! synchronously on every write path.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::config::DEFAULT_DIFFICULTY;
use crate::domain::{Category, Interval, Phrase, ReviewRecord, Tag};
use crate::error::{Error, Result};
use crate::srs;
use crate::stats::{compute_stats, StatsCache, StatsSnapshot};
use crate::store::{CatalogStore, MemoryStore, PhraseStore, StatsStore};

/// The store composition the binary runs with
pub type AppService = StudyService<MemoryStore>;

/// Fields accepted when creating a phrase
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewPhrase {
  pub english: String,
  pub japanese: String,
  #[serde(default)]
  pub pronunciation: Option<String>,
  #[serde(default)]
  pub tags: Vec<String>,
  #[serde(default)]
  pub category_id: Option<String>,
}

/// Partial edit; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PhraseUpdate {
  pub english: Option<String>,
  pub japanese: Option<String>,
  pub pronunciation: Option<String>,
  pub tags: Option<Vec<String>>,
  pub category_id: Option<String>,
}

pub struct StudyService<S> {
  store: Arc<Mutex<S>>,
  cache: Arc<Mutex<StatsCache>>,
}

impl<S> Clone for StudyService<S> {
  fn clone(&self) -> Self {
    Self {
      store: Arc::clone(&self.store),
      cache: Arc::clone(&self.cache),
    }
  }
}

impl<S: PhraseStore + StatsStore + CatalogStore> StudyService<S> {
  pub fn new(store: S) -> Self {
    Self {
      store: Arc::new(Mutex::new(store)),
      cache: Arc::new(Mutex::new(StatsCache::default())),
    }
  }

  fn lock_store(&self) -> Result<MutexGuard<'_, S>> {
    self.store.lock().map_err(|_| {
      tracing::error!("store mutex poisoned - a thread panicked while holding the lock");
      Error::StoreUnavailable
    })
  }

  /// Clear the cached snapshot. The cache holds no authoritative state, so
  /// a poisoned lock is recovered rather than surfaced.
  fn invalidate_stats(&self) {
    self
      .cache
      .lock()
      .unwrap_or_else(|poisoned| poisoned.into_inner())
      .invalidate();
  }

  /// Register tag names the catalog has not seen yet.
  fn register_tags(store: &mut S, tags: &[String]) -> Result<()> {
    let known = store.tags()?;
    for name in tags {
      if !known.iter().any(|t| &t.name == name) && !name.trim().is_empty() {
        store.add_tag(Tag::new(name.clone()))?;
      }
    }
    Ok(())
  }

  // ==================== Phrase CRUD ====================

  pub fn add_phrase(&self, new: NewPhrase) -> Result<Phrase> {
    if new.english.trim().is_empty() {
      return Err(Error::EmptyField("english"));
    }
    if new.japanese.trim().is_empty() {
      return Err(Error::EmptyField("japanese"));
    }

    let mut phrase = Phrase::new(new.english, new.japanese);
    phrase.pronunciation = new.pronunciation;
    phrase.tags = new.tags;
    phrase.category_id = new.category_id;

    let mut store = self.lock_store()?;
    Self::register_tags(&mut store, &phrase.tags)?;
    store.add(phrase.clone())?;

    let mut counters = store.counters()?;
    counters.total_phrases += 1;
    store.save_counters(&counters)?;
    drop(store);

    self.invalidate_stats();
    tracing::debug!("added phrase {}", phrase.id);
    Ok(phrase)
  }

  pub fn list_phrases(&self) -> Result<Vec<Phrase>> {
    self.lock_store()?.get_all()
  }

  pub fn get_phrase(&self, id: &str) -> Result<Phrase> {
    self
      .lock_store()?
      .get_by_id(id)?
      .ok_or_else(|| Error::PhraseNotFound(id.to_string()))
  }

  pub fn edit_phrase(&self, id: &str, update: PhraseUpdate) -> Result<Phrase> {
    if update.english.as_deref().is_some_and(|s| s.trim().is_empty()) {
      return Err(Error::EmptyField("english"));
    }
    if update.japanese.as_deref().is_some_and(|s| s.trim().is_empty()) {
      return Err(Error::EmptyField("japanese"));
    }

    let mut store = self.lock_store()?;
    let mut phrase = store
      .get_by_id(id)?
      .ok_or_else(|| Error::PhraseNotFound(id.to_string()))?;

    if let Some(english) = update.english {
      phrase.english = english;
    }
    if let Some(japanese) = update.japanese {
      phrase.japanese = japanese;
    }
    if let Some(pronunciation) = update.pronunciation {
      phrase.pronunciation = Some(pronunciation);
    }
    if let Some(tags) = update.tags {
      Self::register_tags(&mut store, &tags)?;
      phrase.tags = tags;
    }
    if let Some(category_id) = update.category_id {
      phrase.category_id = Some(category_id);
    }
    phrase.updated_at = Utc::now();

    store.update(phrase.clone())?;
    drop(store);

    self.invalidate_stats();
    Ok(phrase)
  }

  pub fn delete_phrase(&self, id: &str) -> Result<()> {
    let mut store = self.lock_store()?;
    store.delete(id)?;

    let mut counters = store.counters()?;
    counters.total_phrases = (counters.total_phrases - 1).max(0);
    store.save_counters(&counters)?;
    drop(store);

    self.invalidate_stats();
    tracing::debug!("deleted phrase {}", id);
    Ok(())
  }

  // ==================== Scheduling ====================

  /// Today's review queue as of `as_of`.
  pub fn due_phrases(&self, as_of: DateTime<Utc>) -> Result<Vec<Phrase>> {
    let phrases = self.lock_store()?.get_all()?;
    Ok(srs::due_phrases(&phrases, as_of).into_iter().cloned().collect())
  }

  /// Advisory next interval for a phrase.
  pub fn recommend(&self, id: &str) -> Result<Interval> {
    let phrase = self.get_phrase(id)?;
    Ok(srs::recommend_interval(&phrase.review_history))
  }

  /// Record a completed review: append to history, reschedule, bump
  /// counters, invalidate stats. The history append and the new review
  /// date land in one store write; a failed write leaves the phrase as it
  /// was.
  pub fn record_review(
    &self,
    id: &str,
    interval: Interval,
    difficulty: Option<f64>,
    now: DateTime<Utc>,
  ) -> Result<Phrase> {
    let difficulty = difficulty.unwrap_or(DEFAULT_DIFFICULTY);
    if !(0.0..=1.0).contains(&difficulty) {
      return Err(Error::InvalidDifficulty(difficulty));
    }

    let mut store = self.lock_store()?;
    let mut phrase = store
      .get_by_id(id)?
      .ok_or_else(|| Error::PhraseNotFound(id.to_string()))?;

    phrase.review_history.push(ReviewRecord::new(now, interval, difficulty));
    phrase.next_review_date = srs::next_review_date(interval, now);
    phrase.updated_at = now;
    store.update(phrase.clone())?;

    let mut counters = store.counters()?;
    counters.note_review(now);
    store.save_counters(&counters)?;
    drop(store);

    self.invalidate_stats();
    tracing::debug!(
      "reviewed phrase {} ({}, difficulty {:.2}), next due {}",
      phrase.id,
      interval.as_str(),
      difficulty,
      phrase.next_review_date
    );
    Ok(phrase)
  }

  // ==================== Statistics ====================

  /// Aggregate statistics, served from the cache while fresh.
  pub fn stats(&self, now: DateTime<Utc>) -> Result<StatsSnapshot> {
    {
      let cache = self
        .cache
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
      if let Some(snapshot) = cache.get(now) {
        return Ok(snapshot);
      }
    }

    let store = self.lock_store()?;
    let phrases = store.get_all()?;
    let counters = store.counters()?;
    drop(store);

    let snapshot = compute_stats(&phrases, &counters, now);
    self
      .cache
      .lock()
      .unwrap_or_else(|poisoned| poisoned.into_inner())
      .put(snapshot.clone(), now);
    Ok(snapshot)
  }

  // ==================== Catalog ====================

  pub fn categories(&self) -> Result<Vec<Category>> {
    self.lock_store()?.categories()
  }

  pub fn add_category(
    &self,
    name: String,
    color: Option<String>,
    is_default: bool,
  ) -> Result<Category> {
    if name.trim().is_empty() {
      return Err(Error::EmptyField("name"));
    }
    let mut category = Category::new(name, color);
    category.is_default = is_default;
    self.lock_store()?.add_category(category.clone())?;
    Ok(category)
  }

  pub fn tags(&self) -> Result<Vec<Tag>> {
    self.lock_store()?.tags()
  }

  pub fn add_tag(&self, name: String) -> Result<Tag> {
    if name.trim().is_empty() {
      return Err(Error::EmptyField("name"));
    }
    let tag = Tag::new(name);
    self.lock_store()?.add_tag(tag.clone())?;
    Ok(tag)
  }
}
