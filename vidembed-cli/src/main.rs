use anyhow::Result;
use clap::Parser;

mod cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    cli::Args::parse().run().await
}
