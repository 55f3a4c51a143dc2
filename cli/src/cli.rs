use crate::commands::{
    config::ConfigCommand, convert::ConvertCommand, stats::StatsCommand, urls::UrlsCommand,
    AppContext, CommandEnum,
};
use bmtree::config::Config;
use bmtree::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// Show the program version and exit
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Optional custom configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true)]
    pub nc: bool,

    /// Show debug information
    #[arg(short = 'g', long = "debug", global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert bookmark exports to JSON trees
    Convert {
        /// Bookmark files to convert (HTML exports, or JSON trees from an earlier run)
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output file (single input only; default: input name with .json)
        #[arg(short, long, conflicts_with = "out_dir")]
        output: Option<PathBuf>,

        /// Directory to write converted files into
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Remove folders with this title (repeatable)
        #[arg(short, long = "remove", value_name = "NAME")]
        remove: Vec<String>,

        /// Keep only folders with this title (repeatable)
        #[arg(short, long = "pick", value_name = "NAME")]
        pick: Vec<String>,

        /// Also write the unique URL list to this file (single input only)
        #[arg(long, value_name = "PATH")]
        urls: Option<PathBuf>,

        /// Write compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Print the unique URLs of a bookmark file
    Urls {
        /// Bookmark file (HTML export or JSON tree)
        input: PathBuf,

        /// Write the list to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Remove folders with this title before collecting (repeatable)
        #[arg(short, long = "remove", value_name = "NAME")]
        remove: Vec<String>,

        /// Collect only from folders with this title (repeatable)
        #[arg(short, long = "pick", value_name = "NAME")]
        pick: Vec<String>,
    },

    /// Show bookmark and folder counts of a bookmark file
    Stats {
        /// Bookmark file (HTML export or JSON tree)
        input: PathBuf,
    },

    /// Show the effective configuration, or create a default config file
    Config {
        /// Write a default configuration file
        #[arg(long)]
        init: bool,

        /// Overwrite an existing configuration file
        #[arg(short, long, requires = "init")]
        force: bool,
    },
}

impl Commands {
    fn into_command(self) -> CommandEnum {
        match self {
            Commands::Convert {
                inputs,
                output,
                out_dir,
                remove,
                pick,
                urls,
                compact,
            } => CommandEnum::Convert(ConvertCommand {
                inputs,
                output,
                out_dir,
                remove,
                pick,
                urls,
                compact,
            }),
            Commands::Urls {
                input,
                output,
                remove,
                pick,
            } => CommandEnum::Urls(UrlsCommand {
                input,
                output,
                remove,
                pick,
            }),
            Commands::Stats { input } => CommandEnum::Stats(StatsCommand { input }),
            Commands::Config { init, force } => CommandEnum::Config(ConfigCommand { init, force }),
        }
    }
}

pub fn handle_args(cli: Cli, config: &Config) -> Result<()> {
    let Some(command) = cli.command else {
        return Err("No command given; try `bmtree --help`".into());
    };

    let ctx = AppContext {
        config,
        config_path: cli.config.as_deref(),
        no_color: cli.nc,
    };
    command.into_command().execute(&ctx)
}
