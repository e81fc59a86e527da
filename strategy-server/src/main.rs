use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Use JSON logs in production (STRATEGY_LOG_JSON=1), human-readable otherwise
    let json_logs = std::env::var("STRATEGY_LOG_JSON").unwrap_or_default() == "1";
    let filter = EnvFilter::from_default_env()
        .add_directive("strategy_server=info".parse()?)
        .add_directive("strategy_agents=info".parse()?);
    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .init();
    }

    let config = strategy_server::config::ServerConfig::parse();
    tracing::info!("Starting Team Strategy Agent API on {}", config.listen_addr);
    if config.db_path.is_none() {
        tracing::info!("No --db-path given, tasks are kept in memory");
    }
    let server = strategy_server::server::Server::new(config);
    server.run().await
}
