use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use tablefeet::config::{
    DEFAULT_FOOT_SIZE, DEFAULT_MAX_DIM, DEFAULT_MIN_AR, DEFAULT_MIN_DIM, DEFAULT_THRESHOLD,
    DRIVER_MAX_AR,
};
use tablefeet::io;
use tablefeet::{ConsoleReport, MapError, Pipeline, TableConfig, TableFilter};

#[derive(Parser)]
#[command(name = "tablefeet")]
#[command(about = "Replace table-shaped obstacles in an occupancy map with four feet")]
struct Cli {
    /// Occupancy map to read (PGM)
    #[arg(long, value_name = "FILE", default_value = "map.pgm")]
    input: PathBuf,

    /// Where to write the edited map (PGM)
    #[arg(long, value_name = "FILE", default_value = "new_map.pgm")]
    output: PathBuf,

    /// Where to write the color-coded bounding boxes (PNG)
    #[arg(long, value_name = "FILE", default_value = "debug_contours.png")]
    debug_image: PathBuf,

    /// Pixels at or below this intensity are obstacles
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: u8,

    /// Smallest table side in pixels
    #[arg(long, default_value_t = DEFAULT_MIN_DIM)]
    min_dim: u32,

    /// Largest table side in pixels
    #[arg(long, default_value_t = DEFAULT_MAX_DIM)]
    max_dim: u32,

    /// Lowest accepted long-side / short-side ratio
    #[arg(long, default_value_t = DEFAULT_MIN_AR)]
    min_ar: f64,

    /// Highest accepted long-side / short-side ratio
    #[arg(long, default_value_t = DRIVER_MAX_AR)]
    max_ar: f64,

    /// Side length of each foot marker in pixels
    #[arg(long, default_value_t = DEFAULT_FOOT_SIZE)]
    foot_size: u32,

    /// Save every pipeline stage to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> TableConfig {
        TableConfig {
            threshold: self.threshold,
            filter: TableFilter {
                min_dim: self.min_dim,
                max_dim: self.max_dim,
                min_ar: self.min_ar,
                max_ar: self.max_ar,
            },
            foot_size: self.foot_size,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level))
        )
        .init();

    // Handled failures end the run with a diagnostic, not a non-zero exit
    if let Err(e) = run(&args) {
        match e.downcast_ref::<MapError>() {
            Some(MapError::InputNotFound { path }) => {
                eprintln!(
                    "Error: Input file '{}' not found. Make sure the map exists or pass --input.",
                    path.display()
                );
            }
            Some(MapError::Unreadable { path, source }) => {
                eprintln!(
                    "Error: Could not open or read the image '{}': {}. Please ensure it is a valid image.",
                    path.display(),
                    source
                );
            }
            _ => eprintln!("An unexpected error occurred: {:#}", e),
        }
    }

    Ok(())
}

fn run(args: &Cli) -> anyhow::Result<()> {
    let mut pipeline = Pipeline::new(args.config())?;

    if args.verbose {
        println!("Loading map: {:?}", args.input);
    }
    let map = io::load_map(&args.input)?;
    if args.verbose {
        println!("Map loaded: {}x{}", map.width(), map.height());
    }

    if let Some(debug_dir) = &args.debug_out {
        pipeline = pipeline.with_debug(debug_dir.clone())?;
    }

    let mut report = ConsoleReport::new();
    report.print_header(pipeline.config());
    let result = pipeline.run_with_sinks(&map, &mut [&mut report])?;

    report.print_summary(pipeline.config(), result.accepted_count());
    if args.verbose {
        println!(
            "{} contours traced, {} table-sized, {} overlapping pairs",
            result.candidates.len(),
            report.candidates(),
            result.overlaps.len()
        );
    }

    io::save_map(&result.map, &args.output)?;
    println!("Modified map saved to: {}", args.output.display());

    io::save_debug(&result.debug, &args.debug_image)?;
    println!("Debug contours image saved to: {}", args.debug_image.display());

    Ok(())
}
