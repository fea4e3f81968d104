//! Category and tag collection handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::domain::{Category, Tag};
use crate::error::Result;
use crate::service::AppService;

#[derive(Debug, Deserialize)]
pub struct CreateCategoryForm {
  pub name: String,
  pub color: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTagForm {
  pub name: String,
}

pub async fn list_categories(State(service): State<AppService>) -> Result<Json<Vec<Category>>> {
  Ok(Json(service.categories()?))
}

pub async fn create_category(
  State(service): State<AppService>,
  Json(form): Json<CreateCategoryForm>,
) -> Result<(StatusCode, Json<Category>)> {
  let category = service.add_category(form.name, form.color, false)?;
  Ok((StatusCode::CREATED, Json(category)))
}

pub async fn list_tags(State(service): State<AppService>) -> Result<Json<Vec<Tag>>> {
  Ok(Json(service.tags()?))
}

pub async fn create_tag(
  State(service): State<AppService>,
  Json(form): Json<CreateTagForm>,
) -> Result<(StatusCode, Json<Tag>)> {
  let tag = service.add_tag(form.name)?;
  Ok((StatusCode::CREATED, Json(tag)))
}
