use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jp_phrasebook::service::StudyService;
use jp_phrasebook::store::MemoryStore;
use jp_phrasebook::{config, handlers, seed};

#[tokio::main]
async fn main() {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "jp_phrasebook=debug,tower_http=debug".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let service = StudyService::new(MemoryStore::new());

  match seed::seed_defaults(&service) {
    Ok(0) => {}
    Ok(seeded) => tracing::info!("Seeded {} starter phrases", seeded),
    Err(e) => tracing::warn!("Failed to seed starter phrases: {}", e),
  }

  let app = handlers::router(service);

  let port = config::load_server_port();
  let bind_addr = config::server_bind_addr(port);
  let listener = tokio::net::TcpListener::bind(&bind_addr)
    .await
    .unwrap_or_else(|_| panic!("Failed to bind to {}", bind_addr));

  tracing::info!("Server running on http://localhost:{}", port);

  axum::serve(listener, app)
    .await
    .expect("Server failed to start");
}
