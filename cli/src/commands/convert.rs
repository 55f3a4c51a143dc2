use super::{ensure_not_input, AppContext, BmtreeCommand};
use crate::output::colorize::{failure, success};
use bmtree::error::{BmtreeError, Result};
use bmtree::import_export::{convert_bookmarks, JsonWriter, TreeWriter, UrlListWriter};
use bmtree::operations::{tree_stats, FolderFilter, TreeStats};
use bmtree::utils::{default_output_path, same_file};
use log::debug;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ConvertCommand {
    pub inputs: Vec<PathBuf>,
    pub output: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub remove: Vec<String>,
    pub pick: Vec<String>,
    pub urls: Option<PathBuf>,
    pub compact: bool,
}

/// One input/output pair and what ended up in the output
struct Converted {
    input: PathBuf,
    output: PathBuf,
    stats: TreeStats,
}

impl ConvertCommand {
    fn plan(&self) -> Result<Vec<(PathBuf, PathBuf)>> {
        if self.inputs.len() > 1 && (self.output.is_some() || self.urls.is_some()) {
            return Err(BmtreeError::InvalidInput(
                "--output and --urls take a single input; use --out-dir for several".to_string(),
            ));
        }

        let plan: Vec<(PathBuf, PathBuf)> = self
            .inputs
            .iter()
            .map(|input| {
                let output = match &self.output {
                    Some(output) => output.clone(),
                    None => default_output_path(input, self.out_dir.as_deref()),
                };
                (input.clone(), output)
            })
            .collect();

        for (i, (input, output)) in plan.iter().enumerate() {
            ensure_not_input(output, &self.inputs)?;
            if let Some((earlier, _)) = plan[..i]
                .iter()
                .find(|(_, taken)| same_file(taken, output))
            {
                return Err(BmtreeError::InvalidInput(format!(
                    "{} and {} would both be written to {}",
                    earlier.display(),
                    input.display(),
                    output.display()
                )));
            }
        }

        if let Some(urls) = &self.urls {
            ensure_not_input(urls, &self.inputs)?;
            if plan.iter().any(|(_, output)| same_file(output, urls)) {
                return Err(BmtreeError::InvalidInput(format!(
                    "URL list and JSON tree would both be written to {}",
                    urls.display()
                )));
            }
        }

        Ok(plan)
    }

    fn convert_one(
        &self,
        input: &Path,
        output: &Path,
        filter: &FolderFilter,
        pretty: bool,
    ) -> Result<Converted> {
        let tree = convert_bookmarks(input, filter)?;
        JsonWriter { pretty }.write(&tree, output)?;
        debug!("Wrote {}", output.display());

        if let Some(urls) = &self.urls {
            UrlListWriter.write(&tree, urls)?;
            debug!("Wrote {}", urls.display());
        }

        Ok(Converted {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            stats: tree_stats(&tree),
        })
    }
}

fn report(converted: &Converted, no_color: bool) -> String {
    success(
        &format!(
            "Converted {} -> {} ({} bookmark(s), {} folder(s))",
            converted.input.display(),
            converted.output.display(),
            converted.stats.bookmarks,
            converted.stats.folders
        ),
        no_color,
    )
}

impl BmtreeCommand for ConvertCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let plan = self.plan()?;
        let filter = ctx.config.folder_filter(&self.remove, &self.pick);
        let pretty = ctx.config.pretty && !self.compact;

        if let [(input, output)] = plan.as_slice() {
            let converted = self.convert_one(input, output, &filter, pretty)?;
            println!("{}", report(&converted, ctx.no_color));
            return Ok(());
        }

        debug!(
            "Converting {} file(s) on {} thread(s)",
            plan.len(),
            ctx.config.jobs
        );
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(ctx.config.jobs)
            .build()
            .map_err(|e| BmtreeError::Config(format!("cannot start workers: {}", e)))?;

        let results = pool.install(|| {
            plan.par_iter()
                .map(|(input, output)| {
                    self.convert_one(input, output, &filter, pretty)
                        .map_err(|e| (input, e))
                })
                .collect::<Vec<_>>()
        });

        let mut failed = 0;
        for result in &results {
            match result {
                Ok(converted) => println!("{}", report(converted, ctx.no_color)),
                Err((input, e)) => {
                    failed += 1;
                    eprintln!(
                        "{}",
                        failure(&format!("{}: {}", input.display(), e), ctx.no_color)
                    );
                }
            }
        }

        if failed > 0 {
            return Err(BmtreeError::Other(format!(
                "{} of {} conversion(s) failed",
                failed,
                results.len()
            )));
        }
        Ok(())
    }
}
