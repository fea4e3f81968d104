//! Review-session handlers: the due queue, recommendations and review
//! submission.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::{Interval, Phrase};
use crate::error::Result;
use crate::service::AppService;

#[derive(Debug, Deserialize)]
pub struct ReviewForm {
  pub interval: Interval,
  /// Defaults to neutral when omitted
  pub difficulty: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct Recommendation {
  pub interval: Interval,
  pub days: i64,
  pub label: &'static str,
}

pub async fn due_queue(State(service): State<AppService>) -> Result<Json<Vec<Phrase>>> {
  Ok(Json(service.due_phrases(Utc::now())?))
}

pub async fn recommend(
  State(service): State<AppService>,
  Path(id): Path<String>,
) -> Result<Json<Recommendation>> {
  let interval = service.recommend(&id)?;
  Ok(Json(Recommendation {
    interval,
    days: interval.days(),
    label: interval.label(),
  }))
}

pub async fn submit_review(
  State(service): State<AppService>,
  Path(id): Path<String>,
  Json(form): Json<ReviewForm>,
) -> Result<Json<Phrase>> {
  let phrase = service.record_review(&id, form.interval, form.difficulty, Utc::now())?;
  Ok(Json(phrase))
}
