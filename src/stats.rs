//! Derived statistics and the persisted counter record.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Days, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{DAILY_STATS_DAYS, DEFAULT_DIFFICULTY, LEARNED_REVIEW_COUNT, STATS_CACHE_TTL_SECS};
use crate::domain::Phrase;

/// The single persisted stats record. Monotonic counters the aggregator
/// cannot derive purely from stored review history (streaks span sessions),
/// incrementally maintained by the review recorder and phrase add/delete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedCounters {
    pub total_phrases: i64,
    pub total_reviews: i64,
    pub current_streak: i64,
    pub longest_streak: i64,
    pub last_review_date: Option<DateTime<Utc>>,
}

impl PersistedCounters {
    /// Fold one completed review into the counters.
    ///
    /// Streak policy: distinct UTC calendar days with at least one review.
    /// Reviewing on consecutive days extends the streak, a second review on
    /// the same day leaves it unchanged, and a gap resets it to one.
    pub fn note_review(&mut self, now: DateTime<Utc>) {
        let today = now.date_naive();
        match self.last_review_date.map(|d| d.date_naive()) {
            Some(day) if day == today => {
                self.current_streak = self.current_streak.max(1);
            }
            Some(day) if today.checked_sub_days(Days::new(1)) == Some(day) => {
                self.current_streak += 1;
            }
            _ => {
                self.current_streak = 1;
            }
        }
        self.longest_streak = self.longest_streak.max(self.current_streak);
        self.total_reviews += 1;
        self.last_review_date = Some(now);
    }
}

/// Phrases bucketed by total review count
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MasteryLevels {
    /// 0-2 reviews
    pub beginner: i64,
    /// 3-5 reviews
    pub intermediate: i64,
    /// 6+ reviews
    pub advanced: i64,
}

/// One day of the trailing activity series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayActivity {
    pub date: NaiveDate,
    /// Phrases with at least one review recorded that day
    pub phrases_reviewed: i64,
}

/// Every aggregate the UI reads, computed fresh from the phrase collection
/// plus the carried-forward counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub total_phrases: i64,
    pub phrases_learned: i64,
    pub total_reviews: i64,
    pub current_streak: i64,
    pub longest_streak: i64,
    pub last_review_date: Option<DateTime<Utc>>,
    /// Phrase count per category id; uncategorized phrases are skipped
    pub category_stats: BTreeMap<String, i64>,
    /// Phrase count per tag; a phrase with N tags lands in N buckets
    pub tag_stats: BTreeMap<String, i64>,
    /// Trailing [`DAILY_STATS_DAYS`] days, oldest first, today included
    pub daily_stats: Vec<DayActivity>,
    pub mastery_levels: MasteryLevels,
    /// Review records dated within the current calendar month
    pub monthly_reviews: i64,
    /// Mean of each phrase's latest difficulty as a rounded percentage;
    /// phrases with no history contribute a neutral 0.5
    pub average_mastery: i64,
}

/// Compute a full snapshot. Pure function of its inputs; `now` fixes the
/// daily window and the current month.
pub fn compute_stats(
    phrases: &[Phrase],
    counters: &PersistedCounters,
    now: DateTime<Utc>,
) -> StatsSnapshot {
    let mut category_stats: BTreeMap<String, i64> = BTreeMap::new();
    let mut tag_stats: BTreeMap<String, i64> = BTreeMap::new();
    let mut mastery_levels = MasteryLevels::default();
    let mut phrases_learned = 0;
    let mut monthly_reviews = 0;
    let mut difficulty_sum = 0.0;

    for phrase in phrases {
        if let Some(category_id) = &phrase.category_id {
            *category_stats.entry(category_id.clone()).or_insert(0) += 1;
        }
        for tag in &phrase.tags {
            *tag_stats.entry(tag.clone()).or_insert(0) += 1;
        }

        match phrase.review_history.len() {
            0..=2 => mastery_levels.beginner += 1,
            3..=5 => mastery_levels.intermediate += 1,
            _ => mastery_levels.advanced += 1,
        }
        if phrase.review_history.len() >= LEARNED_REVIEW_COUNT {
            phrases_learned += 1;
        }

        monthly_reviews += phrase
            .review_history
            .iter()
            .filter(|r| r.date.year() == now.year() && r.date.month() == now.month())
            .count() as i64;

        difficulty_sum += phrase
            .review_history
            .last()
            .map(|r| r.difficulty)
            .unwrap_or(DEFAULT_DIFFICULTY);
    }

    let average_mastery = if phrases.is_empty() {
        (DEFAULT_DIFFICULTY * 100.0).round() as i64
    } else {
        (difficulty_sum / phrases.len() as f64 * 100.0).round() as i64
    };

    StatsSnapshot {
        total_phrases: phrases.len() as i64,
        phrases_learned,
        total_reviews: counters.total_reviews,
        current_streak: counters.current_streak,
        longest_streak: counters.longest_streak,
        last_review_date: counters.last_review_date,
        category_stats,
        tag_stats,
        daily_stats: daily_activity(phrases, now),
        mastery_levels,
        monthly_reviews,
        average_mastery,
    }
}

fn daily_activity(phrases: &[Phrase], now: DateTime<Utc>) -> Vec<DayActivity> {
    let today = now.date_naive();
    let mut series = Vec::with_capacity(DAILY_STATS_DAYS);

    for offset in (0..DAILY_STATS_DAYS as u64).rev() {
        let Some(day) = today.checked_sub_days(Days::new(offset)) else {
            continue;
        };
        let phrases_reviewed = phrases
            .iter()
            .filter(|p| p.review_history.iter().any(|r| r.date.date_naive() == day))
            .count() as i64;
        series.push(DayActivity {
            date: day,
            phrases_reviewed,
        });
    }

    series
}

/// Timestamp-gated snapshot cache. Mutations must call [`StatsCache::invalidate`]
/// synchronously; staleness beyond the freshness window is only acceptable
/// absent mutations.
#[derive(Debug, Default)]
pub struct StatsCache {
    snapshot: Option<StatsSnapshot>,
    computed_at: Option<DateTime<Utc>>,
}

impl StatsCache {
    /// The cached snapshot, if one exists and is still fresh.
    pub fn get(&self, now: DateTime<Utc>) -> Option<StatsSnapshot> {
        let computed_at = self.computed_at?;
        if now - computed_at < Duration::seconds(STATS_CACHE_TTL_SECS) {
            self.snapshot.clone()
        } else {
            None
        }
    }

    pub fn put(&mut self, snapshot: StatsSnapshot, now: DateTime<Utc>) {
        self.snapshot = Some(snapshot);
        self.computed_at = Some(now);
    }

    pub fn invalidate(&mut self) {
        self.snapshot = None;
        self.computed_at = None;
    }
}
