use clap::Parser;
use fuel_price_processor::cli::{run, Cli};
use fuel_price_processor::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
