use anyhow::{Context, Result};
use omniglot_tool::config::Config;
use std::{env, path::PathBuf};
use structopt::StructOpt;

#[derive(Debug, Clone, StructOpt)]
/// Sample few-shot tasks from an Omniglot-like dataset
struct Args {
    #[structopt(long, default_value = "omniglot.json5")]
    /// configuration file
    pub config_file: PathBuf,
}

fn main() -> Result<()> {
    // setup logger
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    // parse arguments
    let Args { config_file } = Args::from_args();
    let config = Config::open(&config_file)
        .with_context(|| format!("failed to load config file '{}'", config_file.display()))?;

    omniglot_tool::start(&config)?;

    Ok(())
}
