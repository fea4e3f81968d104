use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Named review-delay bucket. The single source of truth for interval
/// semantics: day counts, display labels and the promotion ladder all live
/// here, other components must not hardcode their own copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interval {
  Tomorrow,
  ThreeDays,
  OneWeek,
  TwoWeeks,
  OneMonth,
}

impl Interval {
  /// All intervals, shortest first
  pub const ALL: [Interval; 5] = [
    Self::Tomorrow,
    Self::ThreeDays,
    Self::OneWeek,
    Self::TwoWeeks,
    Self::OneMonth,
  ];

  pub fn days(&self) -> i64 {
    match self {
      Self::Tomorrow => 1,
      Self::ThreeDays => 3,
      Self::OneWeek => 7,
      Self::TwoWeeks => 14,
      Self::OneMonth => 30,
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      Self::Tomorrow => "Tomorrow",
      Self::ThreeDays => "In 3 days",
      Self::OneWeek => "In 1 week",
      Self::TwoWeeks => "In 2 weeks",
      Self::OneMonth => "In 1 month",
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Tomorrow => "tomorrow",
      Self::ThreeDays => "three_days",
      Self::OneWeek => "one_week",
      Self::TwoWeeks => "two_weeks",
      Self::OneMonth => "one_month",
    }
  }

  /// Unknown strings fall back to the shortest interval, so a stored value
  /// the table does not recognize schedules the phrase soonest rather than
  /// pushing it far out.
  pub fn from_str(s: &str) -> Self {
    match s {
      "three_days" => Self::ThreeDays,
      "one_week" => Self::OneWeek,
      "two_weeks" => Self::TwoWeeks,
      "one_month" => Self::OneMonth,
      _ => Self::Tomorrow,
    }
  }

  /// Next longer interval; caps at one month
  pub fn promoted(&self) -> Self {
    match self {
      Self::Tomorrow => Self::ThreeDays,
      Self::ThreeDays => Self::OneWeek,
      Self::OneWeek => Self::TwoWeeks,
      Self::TwoWeeks => Self::OneMonth,
      Self::OneMonth => Self::OneMonth,
    }
  }

  /// Next shorter interval; floors at tomorrow
  pub fn demoted(&self) -> Self {
    match self {
      Self::Tomorrow => Self::Tomorrow,
      Self::ThreeDays => Self::Tomorrow,
      Self::OneWeek => Self::ThreeDays,
      Self::TwoWeeks => Self::OneWeek,
      Self::OneMonth => Self::TwoWeeks,
    }
  }
}

/// One completed review. Immutable once appended to a phrase's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
  /// Wall clock at recording time
  pub date: DateTime<Utc>,
  /// Interval chosen at this review
  pub interval: Interval,
  /// Self-reported hardness in [0, 1]; low = easy
  pub difficulty: f64,
}

impl ReviewRecord {
  pub fn new(date: DateTime<Utc>, interval: Interval, difficulty: f64) -> Self {
    Self {
      date,
      interval,
      difficulty,
    }
  }
}
