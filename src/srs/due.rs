//! Due-set selection.

use chrono::{DateTime, Days, Utc};

use crate::domain::Phrase;

/// End of the calendar day containing `as_of`, i.e. the following midnight
/// (UTC). Comparison is day-granular: a phrase due at any time today counts.
pub fn day_end(as_of: DateTime<Utc>) -> DateTime<Utc> {
  as_of
    .date_naive()
    .checked_add_days(Days::new(1))
    .and_then(|d| d.and_hms_opt(0, 0, 0))
    .map(|dt| dt.and_utc())
    .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Every phrase whose next review date falls on or before the end of the
/// `as_of` day, in storage order. Re-querying the same snapshot yields the
/// identical sequence.
pub fn due_phrases<'a>(phrases: &'a [Phrase], as_of: DateTime<Utc>) -> Vec<&'a Phrase> {
  let cutoff = day_end(as_of);
  phrases
    .iter()
    .filter(|p| p.next_review_date < cutoff)
    .collect()
}
