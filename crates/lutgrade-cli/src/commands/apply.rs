//! Single-image LUT application

use crate::ApplyArgs;
use anyhow::{Context, Result};
use std::time::Instant;
use tracing::{info, trace};

pub fn run(args: ApplyArgs, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), lut = %args.lut.display(), "apply::run");
    let start = Instant::now();

    // Both inputs must be good before the output is touched.
    let lut = super::load_lut(&args.lut)?;
    let image = super::load_image(&args.input)?;

    if verbose > 0 {
        println!(
            "Applying {} ({}^3) to {} ({}x{}, {})",
            args.lut.display(),
            lut.size(),
            args.input.display(),
            image.width(),
            image.height(),
            image.bit_depth()
        );
    }

    let result = lutgrade_ops::apply(&image, &lut, &super::filter_options(args.truncate))
        .with_context(|| format!("Failed to apply LUT: {}", args.lut.display()))?;

    super::save_image(&args.output, &result)?;

    info!(
        output = %args.output.display(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Image written"
    );

    Ok(())
}
