use super::{AppContext, BmtreeCommand};
use crate::output::colorize::success;
use bmtree::config::Config;
use bmtree::error::{BmtreeError, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ConfigCommand {
    pub init: bool,
    pub force: bool,
}

impl ConfigCommand {
    fn target_path(ctx: &AppContext) -> PathBuf {
        ctx.config_path
            .map(PathBuf::from)
            .unwrap_or_else(Config::default_path)
    }
}

impl BmtreeCommand for ConfigCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let path = Self::target_path(ctx);

        if !self.init {
            println!("# {}", path.display());
            print!("{}", ctx.config.to_yaml()?);
            return Ok(());
        }

        if path.exists() && !self.force {
            return Err(BmtreeError::Config(format!(
                "{} already exists; use --force to overwrite it",
                path.display()
            )));
        }

        Config::default().save_to_path(&path)?;
        println!(
            "{}",
            success(
                &format!("Wrote default configuration to {}", path.display()),
                ctx.no_color
            )
        );
        Ok(())
    }
}
