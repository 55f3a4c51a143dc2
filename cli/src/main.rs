mod cli;
mod commands;
mod output;

use bmtree::config::Config;
use bmtree::error::Result;
use clap::Parser;
use log::debug;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = cli::Cli::parse();

    // Initialize logger
    let mut logger = env_logger::Builder::from_default_env();
    if args.debug {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    if args.version {
        println!("bmtree {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let no_color = args.nc;
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("Run failed: {:?}", e);
            eprintln!("{}", output::colorize::failure(&e.to_string(), no_color));
            ExitCode::FAILURE
        }
    }
}

fn run(args: cli::Cli) -> Result<()> {
    // Load configuration
    let cfg = if let Some(config_path) = &args.config {
        Config::load_from_path(config_path)?
    } else {
        Config::load()
    };

    cli::handle_args(args, &cfg)
}
