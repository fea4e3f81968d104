//! Statistics handler.

use axum::extract::State;
use axum::Json;
use chrono::Utc;

use crate::error::Result;
use crate::service::AppService;
use crate::stats::StatsSnapshot;

pub async fn get_stats(State(service): State<AppService>) -> Result<Json<StatsSnapshot>> {
  Ok(Json(service.stats(Utc::now())?))
}
