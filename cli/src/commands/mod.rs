use bmtree::config::Config;
use bmtree::error::{BmtreeError, Result};
use bmtree::utils::same_file;
use std::path::{Path, PathBuf};

pub struct AppContext<'a> {
    pub config: &'a Config,
    /// Explicit `--config` path, if any
    pub config_path: Option<&'a Path>,
    pub no_color: bool,
}

pub mod config;
pub mod convert;
pub mod stats;
pub mod urls;

pub trait BmtreeCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()>;
}

/// Enum-based dispatch for commands (avoids Box<dyn BmtreeCommand>)
pub enum CommandEnum {
    Convert(convert::ConvertCommand),
    Urls(urls::UrlsCommand),
    Stats(stats::StatsCommand),
    Config(config::ConfigCommand),
}

impl CommandEnum {
    pub fn execute(&self, ctx: &AppContext) -> Result<()> {
        match self {
            Self::Convert(cmd) => cmd.execute(ctx),
            Self::Urls(cmd) => cmd.execute(ctx),
            Self::Stats(cmd) => cmd.execute(ctx),
            Self::Config(cmd) => cmd.execute(ctx),
        }
    }
}

/// Refuse to write `target` when it is one of the files being read
pub fn ensure_not_input(target: &Path, inputs: &[PathBuf]) -> Result<()> {
    match inputs.iter().find(|input| same_file(input, target)) {
        Some(input) => Err(BmtreeError::InvalidInput(format!(
            "refusing to overwrite input {}",
            input.display()
        ))),
        None => Ok(()),
    }
}
