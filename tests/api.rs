//! End-to-end API tests over the JSON surface.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use jp_phrasebook::domain::Phrase;
use jp_phrasebook::handlers;
use jp_phrasebook::seed;
use jp_phrasebook::service::StudyService;
use jp_phrasebook::stats::StatsSnapshot;
use jp_phrasebook::store::MemoryStore;

fn server() -> TestServer {
  let service = StudyService::new(MemoryStore::new());
  TestServer::new(handlers::router(service)).expect("test server")
}

fn seeded_server() -> TestServer {
  let service = StudyService::new(MemoryStore::new());
  seed::seed_defaults(&service).expect("seed");
  TestServer::new(handlers::router(service)).expect("test server")
}

async fn create_phrase(server: &TestServer, english: &str, japanese: &str) -> Phrase {
  let response = server
    .post("/phrases")
    .json(&json!({ "english": english, "japanese": japanese }))
    .await;
  response.assert_status(StatusCode::CREATED);
  response.json::<Phrase>()
}

#[tokio::test]
async fn test_create_and_list_phrases() {
  let server = server();

  let created = create_phrase(&server, "Hello", "こんにちは").await;
  assert_eq!(created.english, "Hello");
  assert!(created.review_history.is_empty());

  let response = server.get("/phrases").await;
  response.assert_status_ok();
  let phrases = response.json::<Vec<Phrase>>();
  assert_eq!(phrases.len(), 1);
  assert_eq!(phrases[0].id, created.id);
}

#[tokio::test]
async fn test_create_phrase_rejects_empty_text() {
  let server = server();

  let response = server
    .post("/phrases")
    .json(&json!({ "english": "Hello", "japanese": "" }))
    .await;
  response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
  let body = response.json::<Value>();
  assert!(body["error"].as_str().unwrap().contains("japanese"));
}

#[tokio::test]
async fn test_get_unknown_phrase_is_404() {
  let server = server();
  let response = server.get("/phrases/no-such-id").await;
  response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_new_phrase_is_due_immediately() {
  let server = server();
  let created = create_phrase(&server, "Water", "水").await;

  let response = server.get("/study/due").await;
  response.assert_status_ok();
  let due = response.json::<Vec<Phrase>>();
  assert!(due.iter().any(|p| p.id == created.id));
}

#[tokio::test]
async fn test_review_flow() {
  let server = server();
  let created = create_phrase(&server, "Water", "水").await;

  let response = server
    .post(&format!("/phrases/{}/review", created.id))
    .json(&json!({ "interval": "one_week", "difficulty": 0.2 }))
    .await;
  response.assert_status_ok();
  let reviewed = response.json::<Phrase>();

  assert_eq!(reviewed.review_history.len(), 1);
  assert_eq!(reviewed.review_history[0].interval.as_str(), "one_week");
  assert!(reviewed.next_review_date > reviewed.review_history[0].date);

  // Read-your-writes: the phrase left today's queue
  let due = server.get("/study/due").await.json::<Vec<Phrase>>();
  assert!(!due.iter().any(|p| p.id == created.id));

  // ...and the stats reflect the review
  let stats = server.get("/stats").await.json::<StatsSnapshot>();
  assert_eq!(stats.total_reviews, 1);
  assert_eq!(stats.current_streak, 1);
}

#[tokio::test]
async fn test_review_rejects_invalid_difficulty() {
  let server = server();
  let created = create_phrase(&server, "Water", "水").await;

  let response = server
    .post(&format!("/phrases/{}/review", created.id))
    .json(&json!({ "interval": "one_week", "difficulty": 1.5 }))
    .await;
  response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

  // Phrase unchanged
  let phrase = server
    .get(&format!("/phrases/{}", created.id))
    .await
    .json::<Phrase>();
  assert!(phrase.review_history.is_empty());
}

#[tokio::test]
async fn test_review_unknown_phrase_is_404() {
  let server = server();
  let response = server
    .post("/phrases/no-such-id/review")
    .json(&json!({ "interval": "tomorrow" }))
    .await;
  response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_recommend_cold_start_then_promotion() {
  let server = server();
  let created = create_phrase(&server, "Water", "水").await;

  let response = server.get(&format!("/phrases/{}/recommend", created.id)).await;
  response.assert_status_ok();
  let body = response.json::<Value>();
  assert_eq!(body["interval"], "tomorrow");
  assert_eq!(body["days"], 1);

  server
    .post(&format!("/phrases/{}/review", created.id))
    .json(&json!({ "interval": "tomorrow", "difficulty": 0.1 }))
    .await
    .assert_status_ok();

  let body = server
    .get(&format!("/phrases/{}/recommend", created.id))
    .await
    .json::<Value>();
  assert_eq!(body["interval"], "three_days");
}

#[tokio::test]
async fn test_update_and_delete_phrase() {
  let server = server();
  let created = create_phrase(&server, "Water", "水").await;

  let response = server
    .put(&format!("/phrases/{}", created.id))
    .json(&json!({ "pronunciation": "mizu", "tags": ["noun"] }))
    .await;
  response.assert_status_ok();
  let updated = response.json::<Phrase>();
  assert_eq!(updated.pronunciation.as_deref(), Some("mizu"));

  // Tags typed on a phrase land in the tag registry
  let tags = server.get("/tags").await.json::<Value>();
  assert!(tags.as_array().unwrap().iter().any(|t| t["name"] == "noun"));

  let response = server.delete(&format!("/phrases/{}", created.id)).await;
  response.assert_status(StatusCode::NO_CONTENT);

  server
    .get(&format!("/phrases/{}", created.id))
    .await
    .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_categories_endpoint() {
  let server = server();

  let response = server
    .post("/categories")
    .json(&json!({ "name": "Work", "color": "#333333" }))
    .await;
  response.assert_status(StatusCode::CREATED);

  let categories = server.get("/categories").await.json::<Value>();
  let categories = categories.as_array().unwrap();
  assert_eq!(categories.len(), 1);
  assert_eq!(categories[0]["name"], "Work");
  assert_eq!(categories[0]["is_default"], false);

  let response = server.post("/categories").json(&json!({ "name": " " })).await;
  response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_seeded_app_serves_starter_pack() {
  let server = seeded_server();

  let phrases = server.get("/phrases").await.json::<Vec<Phrase>>();
  assert!(!phrases.is_empty());

  let categories = server.get("/categories").await.json::<Value>();
  assert!(!categories.as_array().unwrap().is_empty());

  let stats = server.get("/stats").await.json::<StatsSnapshot>();
  assert_eq!(stats.total_phrases, phrases.len() as i64);
  // Nothing reviewed yet: everything is a beginner and mastery is neutral
  assert_eq!(stats.mastery_levels.beginner, phrases.len() as i64);
  assert_eq!(stats.average_mastery, 50);
}
