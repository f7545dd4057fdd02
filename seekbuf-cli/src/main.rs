mod args;
mod command;

use clap::Parser;
use color_eyre::eyre::Error;
use tracing_subscriber::EnvFilter;

use crate::args::Args;

fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .pretty()
        .init();

    let args = Args::parse();
    command::run(args)?;

    Ok(())
}
