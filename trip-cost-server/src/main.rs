use std::sync::Arc;

use tracing::{info, warn};

use trip_cost_server::config::AppConfig;
use trip_cost_server::costs::CostQueryService;
use trip_cost_server::directions::DirectionsClient;
use trip_cost_server::fares::{FareRepository, InMemoryFareStore};
use trip_cost_server::seed::ensure_seeded;
use trip_cost_server::telemetry;
use trip_cost_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    telemetry::init(&config.telemetry)?;

    if config.directions.api_key.is_empty() {
        warn!("GOOGLE_MAPS_API_KEY not set. Distance lookups will fail.");
    }

    // Load or generate fare data before serving
    let tables = ensure_seeded(&config.fare_data, &config.seed)?;
    let store = Arc::new(InMemoryFareStore::default());
    store.replace_all(tables)?;
    let repository = FareRepository::new(store);
    if let Some(counts) = repository.counts() {
        info!(bus = counts.bus, train = counts.train, "fare tables ready");
    }

    let directions = DirectionsClient::new(config.directions.clone())?;
    let costs = CostQueryService::new(repository, directions);
    let app = create_router(AppState::new(costs));

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Trip cost server listening on http://{addr}");
    info!("  GET  /health  - Health check");
    info!("  POST /submit  - Trip summary");
    info!("  GET  /bus     - Bus fares");
    info!("  GET  /train   - Train fares");

    axum::serve(listener, app).await?;
    Ok(())
}
