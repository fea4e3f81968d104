//! Phrase CRUD handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::domain::Phrase;
use crate::error::Result;
use crate::service::{AppService, NewPhrase, PhraseUpdate};

pub async fn list_phrases(State(service): State<AppService>) -> Result<Json<Vec<Phrase>>> {
  Ok(Json(service.list_phrases()?))
}

pub async fn create_phrase(
  State(service): State<AppService>,
  Json(req): Json<NewPhrase>,
) -> Result<(StatusCode, Json<Phrase>)> {
  let phrase = service.add_phrase(req)?;
  Ok((StatusCode::CREATED, Json(phrase)))
}

pub async fn get_phrase(
  State(service): State<AppService>,
  Path(id): Path<String>,
) -> Result<Json<Phrase>> {
  Ok(Json(service.get_phrase(&id)?))
}

pub async fn update_phrase(
  State(service): State<AppService>,
  Path(id): Path<String>,
  Json(update): Json<PhraseUpdate>,
) -> Result<Json<Phrase>> {
  Ok(Json(service.edit_phrase(&id, update)?))
}

pub async fn delete_phrase(
  State(service): State<AppService>,
  Path(id): Path<String>,
) -> Result<StatusCode> {
  service.delete_phrase(&id)?;
  Ok(StatusCode::NO_CONTENT)
}
