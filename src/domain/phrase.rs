use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::review::ReviewRecord;

/// A single flashcard: source phrase, translation and scheduling state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phrase {
  /// Opaque identifier, assigned at creation, immutable
  pub id: String,
  pub english: String,
  pub japanese: String,
  /// Optional romaji annotation
  pub pronunciation: Option<String>,
  /// Free-form labels; insertion order preserved for display
  pub tags: Vec<String>,
  /// Weak reference to a category; dangling references are tolerated
  pub category_id: Option<String>,
  /// The sole field the due-set selector reads
  pub next_review_date: DateTime<Utc>,
  /// Append-only, chronological
  pub review_history: Vec<ReviewRecord>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Phrase {
  /// New phrase, due immediately.
  pub fn new(english: String, japanese: String) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4().to_string(),
      english,
      japanese,
      pronunciation: None,
      tags: Vec::new(),
      category_id: None,
      next_review_date: now,
      review_history: Vec::new(),
      created_at: now,
      updated_at: now,
    }
  }
}

/// A labeled grouping of phrases. Owned independently; deleting a category
/// never cascades to the phrases referencing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
  pub id: String,
  pub name: String,
  pub color: Option<String>,
  /// True for the seeded starter categories
  pub is_default: bool,
}

impl Category {
  pub fn new(name: String, color: Option<String>) -> Self {
    Self {
      id: Uuid::new_v4().to_string(),
      name,
      color,
      is_default: false,
    }
  }
}

/// A known label. Phrases carry tag names directly; this registry only
/// exists so the caller can enumerate them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
  pub id: String,
  pub name: String,
}

impl Tag {
  pub fn new(name: String) -> Self {
    Self {
      id: Uuid::new_v4().to_string(),
      name,
    }
  }
}
