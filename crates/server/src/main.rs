use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use barakah_server::config::ServerConfig;

const DEFAULT_LOG_FILTER: &str = "barakah_server=info,barakah_core=info";

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_target(true)
        .init();

    info!("Starting Barakah NAV service...");

    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = barakah_server::run(config).await {
        error!("{}", e);
        std::process::exit(1);
    }
}
