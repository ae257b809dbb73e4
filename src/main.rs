use anyhow::Result;
use clap::Parser;
use porttyper::cli::Cli;
use porttyper::commands::annotate;
use porttyper::config;

fn main() -> Result<()> {
    env_logger::init();
    let _cli = Cli::parse();

    let root = config::default_root()?;
    annotate::run(&root);
    Ok(())
}
