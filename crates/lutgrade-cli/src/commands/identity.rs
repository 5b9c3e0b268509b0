//! Identity LUT generation

use crate::IdentityArgs;
use anyhow::{Context, Result};
use lutgrade_lut::{cube, CubeLut};
use tracing::{info, trace};

pub fn run(args: IdentityArgs, verbose: u8) -> Result<()> {
    trace!(size = args.size, output = %args.output.display(), "identity::run");

    let mut lut = CubeLut::identity(args.size)
        .with_context(|| format!("Invalid LUT size: {}", args.size))?;
    if let Some(title) = args.title {
        lut = lut.with_title(title);
    }

    cube::write(&args.output, &lut)
        .with_context(|| format!("Failed to save: {}", args.output.display()))?;

    info!(size = args.size, output = %args.output.display(), "Identity LUT written");
    if verbose > 0 {
        println!("Wrote {}^3 identity LUT to {}", args.size, args.output.display());
    }

    Ok(())
}
