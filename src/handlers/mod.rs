//! HTTP surface: thin JSON handlers over the study service.

pub mod catalog;
pub mod phrases;
pub mod stats;
pub mod study;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::service::AppService;

pub fn router(service: AppService) -> Router {
  Router::new()
    .route("/phrases", get(phrases::list_phrases).post(phrases::create_phrase))
    .route(
      "/phrases/{id}",
      get(phrases::get_phrase)
        .put(phrases::update_phrase)
        .delete(phrases::delete_phrase),
    )
    .route("/phrases/{id}/recommend", get(study::recommend))
    .route("/phrases/{id}/review", post(study::submit_review))
    .route("/study/due", get(study::due_queue))
    .route("/stats", get(stats::get_stats))
    .route("/categories", get(catalog::list_categories).post(catalog::create_category))
    .route("/tags", get(catalog::list_tags).post(catalog::create_tag))
    .layer(TraceLayer::new_for_http())
    .with_state(service)
}
