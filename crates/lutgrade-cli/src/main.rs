//! lutgrade - apply `.cube` 3D LUTs to PNG and TIFF images

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "lutgrade")]
#[command(author, version, about = "Color grade images with 3D LUTs")]
#[command(long_about = "
Applies a .cube 3D lookup table to every pixel of an image using trilinear
interpolation. Alpha is passed through unchanged.

Examples:
  lutgrade apply photo.png -l film.cube -o graded.png
  lutgrade apply scan.tif -l film.cube -o graded.tif --truncate
  lutgrade batch -i 'frames/*.png' -l film.cube -o graded/
  lutgrade info film.cube
  lutgrade identity 33 -o identity.cube
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a LUT to one image
    #[command(visible_alias = "a")]
    Apply(ApplyArgs),

    /// Apply a LUT to every image matching a glob
    Batch(BatchArgs),

    /// Show LUT information
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Write an identity LUT
    Identity(IdentityArgs),
}

#[derive(Args)]
struct ApplyArgs {
    /// Input image
    input: PathBuf,

    /// LUT file (.cube)
    #[arg(short, long)]
    lut: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Truncate instead of round when converting back to integer samples
    #[arg(long)]
    truncate: bool,
}

#[derive(Args)]
struct BatchArgs {
    /// Input pattern (glob)
    #[arg(short, long)]
    input: String,

    /// LUT file (.cube)
    #[arg(short, long)]
    lut: PathBuf,

    /// Output directory
    #[arg(short, long)]
    output_dir: PathBuf,

    /// Output format extension (png, tif); defaults to the input's
    #[arg(short, long)]
    format: Option<String>,

    /// Truncate instead of round when converting back to integer samples
    #[arg(long)]
    truncate: bool,
}

#[derive(Args)]
struct InfoArgs {
    /// LUT file(s)
    #[arg(required = true)]
    lut: Vec<PathBuf>,
}

#[derive(Args)]
struct IdentityArgs {
    /// Grid size per axis (2-256)
    size: usize,

    /// Output .cube file
    #[arg(short, long)]
    output: PathBuf,

    /// TITLE to embed
    #[arg(short, long)]
    title: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Apply(args) => commands::apply::run(args, cli.verbose),
        Commands::Batch(args) => commands::batch::run(args, cli.verbose),
        Commands::Info(args) => commands::info::run(args, cli.verbose),
        Commands::Identity(args) => commands::identity::run(args, cli.verbose),
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
