mod client;
mod handlers;
mod models;
mod routes;
mod stats;
mod utils;

use std::error::Error;

use axum::serve;
use tokio::net::TcpListener;
use tracing::info;
use utils::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();
    routes::init_tracing(&log_level);

    let config = Config::init();

    let bind_addr = config.bind_addr.clone();
    let app = routes::make_app(config).await?;

    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Listening on http://{bind_addr}");

    serve(listener, app).await?;
    Ok(())
}
