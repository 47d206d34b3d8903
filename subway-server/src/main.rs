use subway_server::config::ServerConfig;
use subway_server::stations::StationStore;
use subway_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();

    // Build app state around a fresh, empty station collection
    let state = AppState::new(StationStore::new());
    let app = create_router(state);

    let addr = config.addr();
    println!("Subway station service listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET    /health         - Health check");
    println!("  POST   /stations       - Create a station");
    println!("  GET    /stations       - List stations");
    println!("  GET    /stations/{{id}}  - Look up a station");
    println!("  DELETE /stations/{{id}}  - Delete a station");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
