//! First-run seed data: default categories and a starter phrase pack.

use crate::error::Result;
use crate::service::{NewPhrase, StudyService};
use crate::store::{CatalogStore, PhraseStore, StatsStore};

/// Seed default categories and starter phrases through the service so the
/// counters stay consistent. Does nothing when the store already holds
/// phrases. Returns the number of phrases seeded.
pub fn seed_defaults<S: PhraseStore + StatsStore + CatalogStore>(
  service: &StudyService<S>,
) -> Result<usize> {
  if !service.list_phrases()?.is_empty() {
    return Ok(0);
  }

  let mut category_ids = Vec::new();
  for (name, color) in DEFAULT_CATEGORIES {
    let category = service.add_category(name.to_string(), Some(color.to_string()), true)?;
    category_ids.push(category.id);
  }

  let mut seeded = 0;
  for (english, japanese, pronunciation, category_index, tags) in STARTER_PHRASES {
    service.add_phrase(NewPhrase {
      english: english.to_string(),
      japanese: japanese.to_string(),
      pronunciation: Some(pronunciation.to_string()),
      tags: tags.iter().map(|t| t.to_string()).collect(),
      category_id: category_ids.get(*category_index).cloned(),
    })?;
    seeded += 1;
  }

  Ok(seeded)
}

const DEFAULT_CATEGORIES: &[(&str, &str)] = &[
  ("Greetings", "#4a90d9"),
  ("Travel", "#50b86c"),
  ("Food & Drink", "#e2a33d"),
  ("Daily Life", "#b06ad9"),
];

// (english, japanese, romaji, category index, tags)
const STARTER_PHRASES: &[(&str, &str, &str, usize, &[&str])] = &[
  ("Hello", "こんにちは", "konnichiwa", 0, &["basics"]),
  ("Good morning", "おはようございます", "ohayou gozaimasu", 0, &["basics", "polite"]),
  ("Good evening", "こんばんは", "konbanwa", 0, &["basics"]),
  ("Thank you very much", "ありがとうございます", "arigatou gozaimasu", 0, &["basics", "polite"]),
  ("Excuse me", "すみません", "sumimasen", 0, &["basics", "polite"]),
  ("Where is the station?", "駅はどこですか", "eki wa doko desu ka", 1, &["question"]),
  ("How much does this cost?", "これはいくらですか", "kore wa ikura desu ka", 1, &["question", "shopping"]),
  ("One ticket, please", "切符を一枚ください", "kippu o ichimai kudasai", 1, &["polite"]),
  ("I'd like to check in", "チェックインをお願いします", "chekku-in o onegai shimasu", 1, &["hotel", "polite"]),
  ("Water, please", "お水をください", "omizu o kudasai", 2, &["restaurant", "polite"]),
  ("The bill, please", "お会計をお願いします", "okaikei o onegai shimasu", 2, &["restaurant", "polite"]),
  ("It was delicious", "おいしかったです", "oishikatta desu", 2, &["restaurant"]),
  ("Do you have an English menu?", "英語のメニューはありますか", "eigo no menyuu wa arimasu ka", 2, &["restaurant", "question"]),
  ("What time is it?", "今何時ですか", "ima nanji desu ka", 3, &["question"]),
  ("I don't understand", "わかりません", "wakarimasen", 3, &["basics"]),
  ("Could you say that again?", "もう一度言ってください", "mou ichido itte kudasai", 3, &["polite", "question"]),
];
