//! Crewmatch Assignment Service

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use crewmatch_server::committer::{CommitSink, HttpCommitSink, LogCommitSink};
use crewmatch_server::{http, AppState, Config, Dataset};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load config
    let config = Config::from_env();
    let addr: SocketAddr = config.bind_addr.parse()?;

    // Load the dataset
    let dataset = match &config.dataset_path {
        Some(path) => {
            let dataset = Dataset::from_file(path)?;
            info!(path = %path.display(), "Dataset loaded");
            dataset
        }
        None => {
            info!("No dataset configured - using demo data");
            Dataset::demo()
        }
    };
    let (catalog, directory) = dataset.into_parts()?;

    // Choose the commit sink
    let sink: Arc<dyn CommitSink> = match &config.commit_endpoint {
        Some(endpoint) => {
            info!(endpoint = %endpoint, "Commits forwarded to assignment service");
            Arc::new(HttpCommitSink::new(
                endpoint.clone(),
                Duration::from_secs(config.commit_timeout_secs),
            )?)
        }
        None => {
            info!("No commit endpoint configured - commits recorded to log");
            Arc::new(LogCommitSink)
        }
    };

    // Create shared state
    let state = AppState::with_sink(catalog, directory, sink);

    info!(
        tasks = state.catalog.len(),
        workers = state.directory.len(),
        "Starting Crewmatch assignment service"
    );

    // Create HTTP router and serve
    let router = http::create_router(state);
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
