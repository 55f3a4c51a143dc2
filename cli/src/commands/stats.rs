use super::{AppContext, BmtreeCommand};
use crate::output::colorize::{Colorize, ColorizeStats};
use bmtree::error::Result;
use bmtree::import_export::load_tree;
use bmtree::operations::tree_stats;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct StatsCommand {
    pub input: PathBuf,
}

impl BmtreeCommand for StatsCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let tree = load_tree(&self.input)?;
        let stats = tree_stats(&tree);
        print!("{}", ColorizeStats(&stats).render(ctx.no_color));
        Ok(())
    }
}
