use dotenvy::dotenv;
use tokio::net::TcpListener;

use mergington::config::Config;
use mergington::error::AppError;
use mergington::{load_directory, logging, web};

#[tokio::main]
async fn main() {
    dotenv().ok();
    logging::init();

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;
    let directory = load_directory(&config)?;
    let app = web::router(directory, &config.static_dir);

    // Fall back to the next port when the configured one is taken.
    let listener = match TcpListener::bind((config.host.as_str(), config.port)).await {
        Ok(l) => l,
        Err(e) => {
            tracing::warn!(
                "Could not bind {}:{}: {}. Trying {}:{}",
                config.host,
                config.port,
                e,
                config.host,
                config.port.saturating_add(1)
            );
            TcpListener::bind((config.host.as_str(), config.port.saturating_add(1))).await?
        }
    };

    let bound_addr = listener.local_addr()?;
    tracing::info!("Serving on http://{}", bound_addr);
    tracing::info!("Open http://{}{} to browse activities", bound_addr, web::LANDING_PAGE);

    axum::serve(listener, app).await?;
    Ok(())
}
