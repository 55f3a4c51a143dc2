use super::{ensure_not_input, AppContext, BmtreeCommand};
use crate::output::colorize::success;
use bmtree::error::Result;
use bmtree::import_export::{convert_bookmarks, render_url_list, TreeWriter, UrlListWriter};
use bmtree::operations::collect_urls;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct UrlsCommand {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub remove: Vec<String>,
    pub pick: Vec<String>,
}

impl BmtreeCommand for UrlsCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        if let Some(output) = &self.output {
            ensure_not_input(output, std::slice::from_ref(&self.input))?;
        }

        let filter = ctx.config.folder_filter(&self.remove, &self.pick);
        let tree = convert_bookmarks(&self.input, &filter)?;

        match &self.output {
            Some(output) => {
                UrlListWriter.write(&tree, output)?;
                let count = collect_urls(&tree).len();
                println!(
                    "{}",
                    success(
                        &format!("Wrote {} URL(s) to {}", count, output.display()),
                        ctx.no_color
                    )
                );
            }
            None => print!("{}", render_url_list(&tree)),
        }
        Ok(())
    }
}
