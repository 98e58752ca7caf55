use fare_server::config::ServerConfig;
use fare_server::network::NetworkSnapshot;
use fare_server::summary::FareService;
use fare_server::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let policy = config.load_policy()?;
    let fares = FareService::new(policy.fares, policy.discounts);
    info!(
        base_fare = fares.fares().base_fare,
        youth_discount = fares.discounts().youth.is_some(),
        child_discount = fares.discounts().child.is_some(),
        "loaded fare policy"
    );

    // Fail fast if the network can't be loaded
    let network = NetworkSnapshot::load(&config.network_file)?;
    info!(
        stations = network.station_count(),
        lines = network.line_count(),
        routes = network.route_count(),
        file = %config.network_file.display(),
        "loaded network snapshot"
    );

    let app = create_router(AppState::new(network, fares));

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!("fare server listening on http://{}", config.listen_addr);
    info!("  GET /health");
    info!("  GET /paths?source=&target=&type=DISTANCE|DURATION[&rider=YOUTH|CHILD|ADULT]");

    axum::serve(listener, app).await?;
    Ok(())
}
