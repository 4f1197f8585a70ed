use album_tracker::{Menu, TrackerConfig};
use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "album-tracker")]
#[command(about = "Keep track of your album collection", long_about = None)]
struct Args {
    /// Directory holding the collection files (<name>.csv)
    #[arg(short = 'd', long, default_value = ".")]
    dir: String,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr; keep them quiet unless asked so the menu stays readable
    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in paths
    let dir = shellexpand::tilde(&args.dir);
    let config = TrackerConfig::new(PathBuf::from(dir.as_ref()));
    log::info!("Collections directory: {:?}", config.collection_dir);

    let mut menu = Menu::new(config, io::stdin().lock(), io::stdout());
    menu.run()?;

    log::debug!("Session ended with {} albums", menu.collection().len());
    Ok(())
}
