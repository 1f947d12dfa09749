use claimdesk_server::prelude::*;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "claimdesk_server=info,claimdesk_rbac=info".to_string()),
        )
        .with_target(true)
        .init();

    let config = match std::env::args()
        .nth(1)
        .or_else(|| std::env::var("CLAIMDESK_CONFIG").ok())
    {
        Some(path) => {
            info!(path = %path, "Loading configuration");
            ServerConfig::from_file(&path)?
        }
        None => {
            info!("No configuration given, using defaults");
            ServerConfig::default()
        }
    };

    let server = AccessServer::builder().with_config(config).build()?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        address = %server.address(),
        "Access-control server built"
    );

    server.run().await?;
    Ok(())
}
