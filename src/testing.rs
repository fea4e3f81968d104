//! Test fixtures shared by unit and integration tests.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::domain::{Interval, Phrase, ReviewRecord};

/// Fixed UTC timestamp, minute precision.
pub fn utc_at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
  Utc
    .with_ymd_and_hms(year, month, day, hour, minute, 0)
    .single()
    .unwrap_or_else(|| panic!("invalid test timestamp {year}-{month}-{day} {hour}:{minute}"))
}

pub fn review_at(date: DateTime<Utc>, interval: Interval, difficulty: f64) -> ReviewRecord {
  ReviewRecord::new(date, interval, difficulty)
}

/// A phrase scheduled for review at `next_review_date`.
pub fn phrase_due_at(next_review_date: DateTime<Utc>) -> Phrase {
  let mut phrase = Phrase::new("thank you".to_string(), "ありがとう".to_string());
  phrase.next_review_date = next_review_date;
  phrase
}

/// A phrase with `reviews` daily reviews of neutral difficulty ending the
/// day before `now`.
pub fn phrase_with_history(reviews: usize, now: DateTime<Utc>) -> Phrase {
  let mut phrase = phrase_due_at(now);
  phrase.review_history = (0..reviews)
    .map(|i| {
      let date = now - Duration::days((reviews - i) as i64);
      review_at(date, Interval::Tomorrow, 0.5)
    })
    .collect();
  phrase
}
