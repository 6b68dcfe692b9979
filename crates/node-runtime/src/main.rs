//! # Bookchain Node
//!
//! The `bookchain-node` binary. Startup sequence:
//!
//! 1. Initialize logging
//! 2. Load configuration from the environment
//! 3. Run the pairing handshake (registration → token → partner →
//!    blocks request) until the partner's chain has been received
//! 4. Read lines from stdin and submit each as a new block
//! 5. On Ctrl+C or EOF, shut the consumption loop down and exit

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use bc_01_transport::HttpRouterClient;
use bc_02_identity::SharedIdentity;
use bc_04_sync::BlockAuthor;
use bc_05_pairing::PairingNegotiator;
use node_runtime::{LogEvents, LogProgress, NodeConfig};
use tokio::io::AsyncBufReadExt;
use tokio::task::JoinHandle;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Periodically advance the local epoch to stay loosely synchronized
/// with the router's token-validity window.
fn spawn_epoch_ticker(identity: SharedIdentity, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        // The first tick fires immediately; skip it so the epoch the
        // router issued stays valid for a full window.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            identity.write().advance_epoch();
        }
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load configuration
    let config = NodeConfig::from_env();
    info!(router = %config.router_url, "Starting bookchain node");

    let router = Arc::new(HttpRouterClient::new(config.router_url.clone())?);

    // Pair and receive the partner's chain
    let negotiator = PairingNegotiator::new(
        Arc::clone(&router),
        Arc::new(LogEvents),
        Arc::new(LogProgress),
        config.pairing.clone(),
        config.sync.clone(),
    );
    let paired = negotiator.run().await;
    info!(
        partner = %paired.partner,
        blocks = paired.node.lock().chain.len(),
        "Node ready"
    );

    let epoch_ticker = config
        .epoch_interval
        .map(|every| spawn_epoch_ticker(Arc::clone(&paired.identity), every));

    let author = BlockAuthor::new(
        Arc::clone(&router),
        Arc::clone(&paired.identity),
        Arc::clone(&paired.node),
        config.sync.clone(),
    );

    // Each stdin line becomes a new block
    info!("Type a line to submit a block. Press Ctrl+C to stop.");
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Ctrl+C received");
                break;
            }
            line = lines.next_line() => match line? {
                Some(text) => {
                    let text = text.trim();
                    if !text.is_empty() {
                        author.submit(text).await;
                    }
                }
                None => {
                    info!("Input closed");
                    break;
                }
            },
        }
    }

    // Graceful shutdown
    if let Some(ticker) = epoch_ticker {
        ticker.abort();
    }
    paired.shutdown().await;
    info!("Shutdown complete");

    Ok(())
}
