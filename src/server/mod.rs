use log::{error, info};

use crate::config::ServerConfig;
use crate::url_to_recipe::fetchers::RequestFetcher;

pub mod handlers;
pub mod routes;
pub mod state;

pub use state::AppState;

/// Bind the configured address and serve the API until the process exits.
pub async fn run(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let fetcher = RequestFetcher::with_user_agent(None, &config.user_agent)?;
    let app = routes::app(AppState::new(fetcher));

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        error!("failed to bind {}: {}", addr, e);
        e
    })?;
    info!("listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
