//! Next-review-date calculation.

use chrono::{DateTime, Duration, Months, Utc};

use crate::domain::Interval;

/// Compute the concrete next review date for a chosen interval.
///
/// Pure function of `interval` and `now`. The policy branches on the
/// interval's day count, not the enum, so new intervals inherit it:
/// up to 7 days are added as whole days, up to 14 as whole weeks, and
/// anything longer as calendar months (`floor(days/30)`), which keeps
/// long horizons calendar-aware (end-of-month dates clamp) instead of
/// naive day addition.
pub fn next_review_date(interval: Interval, now: DateTime<Utc>) -> DateTime<Utc> {
  let days = interval.days();

  if days <= 7 {
    now + Duration::days(days)
  } else if days <= 14 {
    now + Duration::weeks(days / 7)
  } else {
    let months = (days / 30) as u32;
    now
      .checked_add_months(Months::new(months))
      .unwrap_or_else(|| now + Duration::days(days))
  }
}
