//! Batch processing command

use crate::BatchArgs;
use anyhow::{bail, Result};
use lutgrade_lut::CubeLut;
use lutgrade_ops::FilterOptions;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};

pub fn run(args: BatchArgs, verbose: u8) -> Result<()> {
    trace!(pattern = %args.input, lut = %args.lut.display(), "batch::run");

    let lut = super::load_lut(&args.lut)?;

    let files: Vec<PathBuf> = glob::glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();

    if files.is_empty() {
        bail!("No files match pattern: {}", args.input);
    }

    info!(files = files.len(), pattern = %args.input, "Starting batch processing");

    if verbose > 0 {
        println!("Found {} files matching '{}'", files.len(), args.input);
    }

    std::fs::create_dir_all(&args.output_dir)?;

    // Images run one per worker; each is filtered serially so the pool is
    // not oversubscribed.
    let options = super::filter_options(args.truncate).with_parallel(false);
    let results: Vec<Result<()>> = files
        .par_iter()
        .map(|input| {
            process_file(
                input,
                &args.output_dir,
                args.format.as_deref(),
                &lut,
                &options,
                verbose,
            )
        })
        .collect();

    let mut success = 0;
    let mut failed = 0;
    for r in results {
        match r {
            Ok(()) => success += 1,
            Err(e) => {
                failed += 1;
                eprintln!("Error: {:#}", e);
            }
        }
    }

    info!(success, failed, "Batch processing complete");
    println!("Processed: {} success, {} failed", success, failed);

    if failed > 0 {
        bail!("{} files failed", failed);
    }

    Ok(())
}

fn process_file(
    input: &Path,
    output_dir: &Path,
    format: Option<&str>,
    lut: &CubeLut,
    options: &FilterOptions,
    verbose: u8,
) -> Result<()> {
    let output = output_path(input, output_dir, format);

    if verbose > 0 {
        println!("Processing {} -> {}", input.display(), output.display());
    }

    let image = super::load_image(input)?;
    let result = lutgrade_ops::apply(&image, lut, options)?;
    super::save_image(&output, &result)?;

    debug!(input = %input.display(), output = %output.display(), "done");
    Ok(())
}

/// `<output_dir>/<stem>.<ext>`, keeping the input extension unless
/// `format` overrides it.
fn output_path(input: &Path, output_dir: &Path, format: Option<&str>) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    let ext = format.unwrap_or_else(|| {
        input
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("png")
    });

    output_dir.join(format!("{}.{}", stem, ext.trim_start_matches('.')))
}
