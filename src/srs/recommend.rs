//! Adaptive interval recommendation.
//!
//! A bounded promotion/demotion ladder over the named intervals, driven by a
//! difficulty-weighted success rate over the most recent reviews. Advisory
//! only: the caller may override with any interval from the table.

use crate::config::{HOLD_THRESHOLD, PROMOTE_THRESHOLD, RECENT_REVIEW_WINDOW};
use crate::domain::{Interval, ReviewRecord};

/// Success rate over the most recent reviews: `1 - average(difficulty)`
/// across a window of up to [`RECENT_REVIEW_WINDOW`] records. None when the
/// history is empty.
pub fn recent_success_rate(history: &[ReviewRecord]) -> Option<f64> {
  if history.is_empty() {
    return None;
  }
  let window = &history[history.len().saturating_sub(RECENT_REVIEW_WINDOW)..];
  let avg_difficulty = window.iter().map(|r| r.difficulty).sum::<f64>() / window.len() as f64;
  Some(1.0 - avg_difficulty)
}

/// Recommend the next interval from review history.
///
/// Cold start recommends [`Interval::Tomorrow`]. Otherwise the last review's
/// interval is promoted one rung when the recent success rate reaches
/// [`PROMOTE_THRESHOLD`], held when it reaches [`HOLD_THRESHOLD`], and
/// demoted one rung below that. Bounded at both ends of the ladder.
pub fn recommend_interval(history: &[ReviewRecord]) -> Interval {
  let (Some(last), Some(success_rate)) = (history.last(), recent_success_rate(history)) else {
    return Interval::Tomorrow;
  };

  if success_rate >= PROMOTE_THRESHOLD {
    last.interval.promoted()
  } else if success_rate >= HOLD_THRESHOLD {
    last.interval
  } else {
    last.interval.demoted()
  }
}
