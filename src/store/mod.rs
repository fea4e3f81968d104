//! Backing-store collaborator contracts.
//!
//! The scheduling core treats persistence as an external document store
//! reached through these narrow traits. [`MemoryStore`] is the in-process
//! implementation used by the binary and the tests.

pub mod memory;

pub use memory::MemoryStore;

use crate::domain::{Category, Phrase, Tag};
use crate::error::Result;
use crate::stats::PersistedCounters;

pub trait PhraseStore {
    /// Every phrase, in storage order. The order is stable between calls
    /// absent mutation.
    fn get_all(&self) -> Result<Vec<Phrase>>;

    fn get_by_id(&self, id: &str) -> Result<Option<Phrase>>;

    fn add(&mut self, phrase: Phrase) -> Result<()>;

    /// Whole-document write keyed by `phrase.id`; history and scheduling
    /// fields land together or not at all. Unknown ids are an error.
    fn update(&mut self, phrase: Phrase) -> Result<()>;

    /// Unknown ids are an error, not a silent no-op.
    fn delete(&mut self, id: &str) -> Result<()>;
}

pub trait StatsStore {
    fn counters(&self) -> Result<PersistedCounters>;

    fn save_counters(&mut self, counters: &PersistedCounters) -> Result<()>;
}

/// Category and tag collections, owned independently of the phrases that
/// reference them.
pub trait CatalogStore {
    fn categories(&self) -> Result<Vec<Category>>;

    fn add_category(&mut self, category: Category) -> Result<()>;

    fn tags(&self) -> Result<Vec<Tag>>;

    fn add_tag(&mut self, tag: Tag) -> Result<()>;
}
