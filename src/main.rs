use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use live_scoreboard::board::{RestartPolicy, ScoreBoard, SystemClock};
use live_scoreboard::config::Config;
use live_scoreboard::dashboard::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();

    let restart_policy = if config.retain_finished {
        info!("Finished matches are retained; restarting a finished pair is rejected");
        RestartPolicy::RejectFinished
    } else {
        RestartPolicy::ReplaceFinished
    };
    let board = ScoreBoard::with_options(Arc::new(SystemClock), restart_policy);

    let app = dashboard::router(AppState { board });
    let addr: SocketAddr = config.listen_addr.parse()?;
    info!("Scoreboard listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
