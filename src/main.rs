use anyhow::Result;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("fianchetto starting");
    fianchetto_cli::run()?;
    Ok(())
}
