//! AlphaTrade web server - simulated stock trading over HTTP.

use alphatrade_core::{Broker, RandomOracle};
use clap::Parser;
use std::sync::Arc;

mod render;
mod server;

#[derive(Parser)]
#[command(name = "alphatrade-web")]
#[command(about = "AlphaTrade web dashboard - simulated stock trading")]
#[command(version)]
struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: String,

    /// Display name of the broker account
    #[arg(long, default_value = "AlphaTrade")]
    name: String,

    /// Starting cash balance
    #[arg(long, default_value = "10000")]
    balance: f64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let broker = Broker::new(&args.name, args.balance);
    let state = server::AppState::new(broker, Arc::new(RandomOracle::new()));

    server::serve(state, &args.bind).await
}
