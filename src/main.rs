use clap::Parser;
use ticker_core::{logger, Host, HostConfig};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = HostConfig::parse();
    logger::init_logger(config.verbose);

    info!("Starting server");

    let host = Host::build(config);
    host.shutdown().install_ctrlc()?;

    let ticks = host.run().await?;

    info!("Ticker core stopped after {} ticks", ticks);
    Ok(())
}
